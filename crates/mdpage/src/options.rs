//! Configuration options for link verification

use std::time::Duration;

/// Default request timeout for link checks
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Options for `HttpLinkVerifier`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyOptions {
    /// Upper bound for connecting and receiving the response
    pub timeout: Duration,

    /// User-Agent header sent with each request
    pub user_agent: String,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("mdpage/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
