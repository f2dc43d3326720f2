//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`VektivaError`] via `#[from]` (adapter-local errors arrive through
//! the boxed [`VektivaError::Cloud`] variant instead, keeping IO crates
//! out of this crate).

use thiserror::Error;

/// Top-level error for the vektiva-bridge workspace.
#[derive(Debug, Error)]
pub enum VektivaError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A lookup by identity found nothing.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// A characteristic operation failed in a way the host must surface.
    #[error("characteristic error")]
    Characteristic(#[from] CharacteristicError),

    /// A vendor-cloud request failed at the transport or HTTP level.
    ///
    /// Wrapped as a boxed source so the domain stays free of HTTP crates;
    /// the cloud adapter converts its own error type into this variant.
    #[error("vendor cloud error")]
    Cloud(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The host bridge rejected an operation (e.g. accessory registration).
    #[error("host bridge error")]
    Bridge(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Violations of domain invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The configured `remoteId` is empty.
    #[error("remoteId must not be empty")]
    EmptyRemoteId,

    /// The configured `apiKey` is empty.
    #[error("apiKey must not be empty")]
    EmptyApiKey,

    /// The configured `deviceId` is empty.
    #[error("deviceId must not be empty")]
    EmptyDeviceId,
}

/// A lookup by identity found nothing.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    /// Kind of record that was looked up (e.g. `"Accessory"`).
    pub entity: &'static str,
    /// The identity that had no match.
    pub id: String,
}

/// Failure conditions surfaced to the host bridge on characteristic
/// operations, mirroring the host's status vocabulary.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CharacteristicError {
    /// The vendor did not confirm a write; the host should show the
    /// accessory as unresponsive.
    #[error("service communication failure")]
    ServiceCommunicationFailure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Accessory",
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Accessory not found: abc");
    }

    #[test]
    fn should_convert_validation_error_into_top_level() {
        let err: VektivaError = ValidationError::EmptyRemoteId.into();
        assert!(matches!(err, VektivaError::Validation(_)));
    }

    #[test]
    fn should_convert_characteristic_error_into_top_level() {
        let err: VektivaError = CharacteristicError::ServiceCommunicationFailure.into();
        assert!(matches!(err, VektivaError::Characteristic(_)));
    }
}
