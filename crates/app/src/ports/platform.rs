//! Dynamic-platform port — the surface a host bridge drives.
//!
//! The host calls the lifecycle methods in order:
//!
//! 1. [`configure_accessory`](DynamicPlatform::configure_accessory) —
//!    once per accessory restored from the host's cache
//! 2. [`did_finish_launching`](DynamicPlatform::did_finish_launching) —
//!    the ready signal; runs device discovery
//! 3. (user and automation actions arrive as
//!    [`get_on`](DynamicPlatform::get_on) /
//!    [`set_on`](DynamicPlatform::set_on) calls)

use std::future::Future;

use vektiva_domain::accessory::Accessory;
use vektiva_domain::error::VektivaError;
use vektiva_domain::id::AccessoryId;

/// Inbound port implemented by the platform adapter.
pub trait DynamicPlatform {
    /// Accept one accessory restored from the host's cache.
    ///
    /// Invoked before the ready signal; mutates the in-memory known
    /// accessories list only.
    fn configure_accessory(&mut self, accessory: Accessory);

    /// Ready signal from the host — run device discovery.
    ///
    /// # Errors
    ///
    /// Propagates [`VektivaError::Bridge`] if registering a newly created
    /// accessory fails.
    fn did_finish_launching(&mut self) -> Result<(), VektivaError>;

    /// Read the power characteristic of the given accessory.
    ///
    /// A failed vendor round-trip reads as `false` (off), never as an
    /// error; only an unknown accessory id is an error.
    ///
    /// # Errors
    ///
    /// Returns [`VektivaError::NotFound`] for an unknown accessory id.
    fn get_on(
        &self,
        id: AccessoryId,
    ) -> impl Future<Output = Result<bool, VektivaError>> + Send;

    /// Write the power characteristic of the given accessory.
    ///
    /// # Errors
    ///
    /// Returns [`VektivaError::NotFound`] for an unknown accessory id, or
    /// [`VektivaError::Characteristic`] with
    /// [`ServiceCommunicationFailure`](vektiva_domain::error::CharacteristicError::ServiceCommunicationFailure)
    /// when the vendor does not confirm the write.
    fn set_on(
        &self,
        id: AccessoryId,
        value: bool,
    ) -> impl Future<Output = Result<(), VektivaError>> + Send;
}
