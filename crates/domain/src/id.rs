//! Typed accessory identifier backed by a UUID.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Namespace for deriving accessory identities from device ids.
///
/// Changing this value would orphan every accessory a host has cached,
/// so it is fixed for the lifetime of the project.
const ACCESSORY_NAMESPACE: Uuid = Uuid::from_u128(0x8f1d_60bc_2a57_4c8e_9b3a_5d4e_0f72_c916);

/// Unique identifier for an [`Accessory`](crate::accessory::Accessory).
///
/// The same device id always derives the same identity, which is what
/// lets the platform tell a cache-restored accessory from a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessoryId(Uuid);

impl AccessoryId {
    /// Derive the stable identity for a device id (UUID v5).
    #[must_use]
    pub fn from_device_id(device_id: &str) -> Self {
        Self(Uuid::new_v5(&ACCESSORY_NAMESPACE, device_id.as_bytes()))
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the inner UUID.
    #[must_use]
    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for AccessoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for AccessoryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_derive_same_identity_for_same_device_id() {
        let a = AccessoryId::from_device_id("d1");
        let b = AccessoryId::from_device_id("d1");
        assert_eq!(a, b);
    }

    #[test]
    fn should_derive_distinct_identities_for_distinct_device_ids() {
        let a = AccessoryId::from_device_id("d1");
        let b = AccessoryId::from_device_id("d2");
        assert_ne!(a, b);
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = AccessoryId::from_device_id("d1");
        let text = id.to_string();
        let parsed: AccessoryId = text.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let id = AccessoryId::from_device_id("d1");
        let json = serde_json::to_string(&id).unwrap();
        let parsed: AccessoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_return_error_when_parsing_invalid_uuid() {
        let result = AccessoryId::from_str("not-a-uuid");
        assert!(result.is_err());
    }

    #[test]
    fn should_wrap_existing_uuid_when_using_from_uuid() {
        let uuid = Uuid::new_v5(&Uuid::NAMESPACE_OID, b"x");
        let id = AccessoryId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), uuid);
    }
}
