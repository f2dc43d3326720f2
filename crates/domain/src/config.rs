//! Platform configuration — three opaque credentials supplied by the host.
//!
//! The host bridge owns configuration loading; this type only maps the
//! platform block of the host's JSON configuration (hence the camelCase
//! field names on the wire) and enforces the non-empty invariant.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Root of the Vektiva vendor cloud API.
pub const API_ROOT: &str = "https://vektiva.online/api";

/// Credentials and device selection for one platform instance.
///
/// Immutable for the process lifetime once accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformConfig {
    /// Remote account identifier at the vendor cloud.
    pub remote_id: String,
    /// API key for the remote account.
    pub api_key: String,
    /// Identifier of the one switch this instance controls.
    pub device_id: String,
}

impl PlatformConfig {
    /// Create a configuration from its three parts.
    pub fn new(
        remote_id: impl Into<String>,
        api_key: impl Into<String>,
        device_id: impl Into<String>,
    ) -> Self {
        Self {
            remote_id: remote_id.into(),
            api_key: api_key.into(),
            device_id: device_id.into(),
        }
    }

    /// Check the non-empty invariant on all three fields.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] variant naming the first empty field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.remote_id.is_empty() {
            return Err(ValidationError::EmptyRemoteId);
        }
        if self.api_key.is_empty() {
            return Err(ValidationError::EmptyApiKey);
        }
        if self.device_id.is_empty() {
            return Err(ValidationError::EmptyDeviceId);
        }
        Ok(())
    }

    /// Vendor base URL for this configuration.
    ///
    /// Always `{API_ROOT}/{remoteId}/{apiKey}/{deviceId}`, recomputed from
    /// the configuration and nothing else.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!(
            "{API_ROOT}/{}/{}/{}",
            self.remote_id, self.api_key, self.device_id
        )
    }
}
