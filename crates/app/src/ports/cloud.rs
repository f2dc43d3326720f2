//! Vendor-API port — one HTTP round-trip to the Vektiva cloud.

use std::future::Future;

use vektiva_domain::command::Command;
use vektiva_domain::error::VektivaError;

/// Outbound port for issuing a single vendor command.
///
/// Implementations perform exactly one network round-trip and return the
/// raw response body of a successful (2xx) request. Transport failures
/// and non-2xx statuses are errors; interpreting the body (the `"OK"`
/// contract) is the caller's concern, not the transport's.
pub trait VendorApi: Send + Sync {
    /// Issue `command` against the configured device.
    fn send(&self, command: Command) -> impl Future<Output = Result<String, VektivaError>> + Send;
}
