//! HTTP link verification via HEAD requests.

use std::fmt;

use log::{debug, warn};
use mdpage_core::{ElementError, LinkVerifier};

use crate::options::VerifyOptions;
use crate::utilities::is_http_url;

/// Verifies links by issuing a HEAD request and requiring a 2xx response.
///
/// Connection errors, timeouts and non-2xx statuses are all reported as
/// `ElementError::VerificationFailure`. URLs that are not absolute http(s)
/// URLs fail without touching the network.
pub struct HttpLinkVerifier {
    agent: ureq::Agent,
    options: VerifyOptions,
}

impl HttpLinkVerifier {
    /// Create a verifier with default options
    pub fn new() -> Self {
        Self::with_options(VerifyOptions::default())
    }

    /// Create a verifier with custom options
    pub fn with_options(options: VerifyOptions) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(options.timeout)
            .user_agent(&options.user_agent)
            .build();
        Self { agent, options }
    }

    /// Get the current options
    pub fn options(&self) -> &VerifyOptions {
        &self.options
    }
}

impl fmt::Debug for HttpLinkVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpLinkVerifier")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Default for HttpLinkVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkVerifier for HttpLinkVerifier {
    fn check(&self, url: &str) -> mdpage_core::Result<()> {
        if !is_http_url(url) {
            return Err(failure(url, "not an absolute http(s) URL".to_string()));
        }

        debug!("Checking link {}", url);

        let result = match self.agent.head(url).call() {
            Ok(response) if (200..300).contains(&response.status()) => Ok(()),
            Ok(response) => Err(failure(url, format!("HTTP status {}", response.status()))),
            Err(ureq::Error::Status(code, _)) => Err(failure(url, format!("HTTP status {}", code))),
            Err(err) => Err(failure(url, err.to_string())),
        };

        if let Err(err) = &result {
            warn!("{}", err);
        }
        result
    }
}

fn failure(url: &str, reason: String) -> ElementError {
    ElementError::VerificationFailure {
        url: url.to_string(),
        reason,
    }
}
