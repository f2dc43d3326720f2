//! Host-bridge port — the capabilities the host runtime injects.
//!
//! The bridge runtime itself (accessory cache persistence, UI, process
//! lifecycle) stays outside this workspace; the platform only consumes
//! this narrow surface, which a test double can implement in a few lines.

use vektiva_domain::accessory::Accessory;
use vektiva_domain::error::VektivaError;
use vektiva_domain::id::AccessoryId;

/// Outbound port to the host bridge runtime.
///
/// Logging is deliberately not part of this port: the workspace logs
/// through `tracing` and the host installs whatever subscriber it wants.
pub trait HostBridge: Send + Sync {
    /// Derive the stable accessory identity for a device id.
    ///
    /// Must be an injective mapping: the same device id always yields the
    /// same identity, distinct device ids yield distinct identities.
    fn accessory_id(&self, device_id: &str) -> AccessoryId;

    /// Persist and expose newly created accessories, keyed by the fixed
    /// plugin/platform name pair.
    ///
    /// # Errors
    ///
    /// Returns [`VektivaError::Bridge`] if the host rejects the
    /// registration.
    fn register_accessories(
        &self,
        plugin: &'static str,
        platform: &'static str,
        accessories: Vec<Accessory>,
    ) -> Result<(), VektivaError>;
}
