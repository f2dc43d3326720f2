//! # vektiva-adapter-cloud
//!
//! `reqwest` implementation of the [`VendorApi`] port.
//!
//! One HTTP GET per command against
//! `{base_url}/{command}`, where the base URL comes from the platform
//! configuration. No retries and no explicit deadline: timeout behavior
//! is whatever the underlying transport provides.
//!
//! ## Dependency rule
//! Depends on `vektiva-app` (port traits) and `vektiva-domain` only.

use std::future::Future;

use vektiva_app::ports::VendorApi;
use vektiva_domain::command::Command;
use vektiva_domain::config::PlatformConfig;
use vektiva_domain::error::VektivaError;

/// HTTP client for the Vektiva vendor cloud.
pub struct CloudClient {
    http: reqwest::Client,
    base_url: String,
}

impl CloudClient {
    /// Build a client for the configured device at the production API
    /// root.
    ///
    /// # Errors
    ///
    /// Returns [`CloudError`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: &PlatformConfig) -> Result<Self, CloudError> {
        Self::with_base_url(config.base_url())
    }

    /// Build a client against an explicit base URL.
    ///
    /// Used for local endpoints and stub servers; production code goes
    /// through [`CloudClient::new`].
    ///
    /// # Errors
    ///
    /// Returns [`CloudError`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, CloudError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn command_url(&self, command: Command) -> String {
        format!("{}/{command}", self.base_url)
    }
}

impl VendorApi for CloudClient {
    fn send(&self, command: Command) -> impl Future<Output = Result<String, VektivaError>> + Send {
        async move {
            let url = self.command_url(command);
            let response = self.http.get(&url).send().await.map_err(CloudError::from)?;
            let response = response.error_for_status().map_err(CloudError::from)?;
            let body = response.text().await.map_err(CloudError::from)?;
            Ok(body)
        }
    }
}

/// Errors originating from the HTTP transport.
#[derive(Debug, thiserror::Error)]
pub enum CloudError {
    /// Connection, DNS, timeout, or non-2xx status failure.
    #[error("vendor request failed")]
    Http(#[from] reqwest::Error),
}

impl From<CloudError> for VektivaError {
    fn from(err: CloudError) -> Self {
        Self::Cloud(Box::new(err))
    }
}
