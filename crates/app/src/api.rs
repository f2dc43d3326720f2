//! Shared request chokepoint — every characteristic operation funnels
//! through here, one vendor round-trip at a time.

use vektiva_domain::command::Command;

use crate::ports::VendorApi;

/// Response body the vendor sends when a command succeeded.
///
/// Exact string equality, no trimming or case folding.
const OK_BODY: &str = "OK";

/// Wraps the vendor port with the boolean `"OK"` contract.
///
/// Failures never cross this boundary as errors: a transport failure or
/// an unexpected body is logged once and reported as `false`. Whether
/// `false` is user-visible is the caller's decision.
pub struct ApiClient<C> {
    vendor: C,
}

impl<C: VendorApi> ApiClient<C> {
    /// Wrap a vendor transport.
    pub fn new(vendor: C) -> Self {
        Self { vendor }
    }

    /// Issue `command` and report whether the vendor confirmed it.
    ///
    /// Returns `true` iff the response body is exactly `"OK"`.
    pub async fn make_request(&self, command: Command) -> bool {
        match self.vendor.send(command).await {
            Ok(body) if body == OK_BODY => true,
            Ok(body) => {
                tracing::warn!(%command, %body, "unexpected vendor response");
                false
            }
            Err(error) => {
                tracing::error!(%command, %error, "API request failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use vektiva_domain::error::VektivaError;

    /// Vendor double that always answers with the scripted outcome.
    struct ScriptedVendor(Result<&'static str, &'static str>);

    impl VendorApi for ScriptedVendor {
        fn send(
            &self,
            _command: Command,
        ) -> impl Future<Output = Result<String, VektivaError>> + Send {
            let result = self
                .0
                .map(str::to_string)
                .map_err(|msg| VektivaError::Cloud(msg.into()));
            async move { result }
        }
    }

    #[tokio::test]
    async fn should_report_true_for_exact_ok_body() {
        let api = ApiClient::new(ScriptedVendor(Ok("OK")));
        assert!(api.make_request(Command::On).await);
    }

    #[tokio::test]
    async fn should_report_false_for_any_other_body() {
        let api = ApiClient::new(ScriptedVendor(Ok("NOK")));
        assert!(!api.make_request(Command::On).await);
    }

    #[tokio::test]
    async fn should_not_trim_or_case_fold_the_body() {
        let api = ApiClient::new(ScriptedVendor(Ok("ok")));
        assert!(!api.make_request(Command::Status).await);

        let api = ApiClient::new(ScriptedVendor(Ok("OK\n")));
        assert!(!api.make_request(Command::Status).await);
    }

    #[tokio::test]
    async fn should_swallow_transport_failures_as_false() {
        let api = ApiClient::new(ScriptedVendor(Err("connection reset")));
        assert!(!api.make_request(Command::Off).await);
    }
}
