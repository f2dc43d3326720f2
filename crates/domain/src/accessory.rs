//! Accessory boundary records — what the host bridge caches and restores.
//!
//! The host owns the durable cache; these types only describe the shape
//! that crosses the boundary, so they are serde-serializable end to end.

use serde::{Deserialize, Serialize};

use crate::id::AccessoryId;

/// One accessory as the host bridge sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessory {
    /// Stable identity derived from the device id.
    pub id: AccessoryId,
    /// Name shown to end users.
    pub display_name: String,
    /// Static identification surface.
    pub information: AccessoryInformation,
    switch: Option<SwitchService>,
}

/// Static identification metadata exposed on every accessory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessoryInformation {
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
}

/// The switch-capability surface of an accessory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchService {
    /// Name characteristic of the service.
    pub name: String,
}

impl Accessory {
    /// Create a fresh accessory record with no services attached.
    #[must_use]
    pub fn new(display_name: impl Into<String>, id: AccessoryId) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            information: AccessoryInformation::default(),
            switch: None,
        }
    }

    /// The switch service, if one has been attached.
    #[must_use]
    pub fn switch_service(&self) -> Option<&SwitchService> {
        self.switch.as_ref()
    }

    /// The switch service, created on first access.
    ///
    /// Restored accessories may already carry one, in which case it is
    /// reused as-is rather than replaced.
    pub fn switch_service_mut(&mut self) -> &mut SwitchService {
        self.switch.get_or_insert_with(SwitchService::default)
    }
}
