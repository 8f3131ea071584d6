use std::time::Duration;

use url::Url;

use crate::error::TransportError;

/// Envelope `code` the backend uses for a successful call.
pub const DEFAULT_SUCCESS_CODE: i32 = 1000;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the storefront backend.
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub success_code: i32,
}

impl ApiClientConfig {
    /// Parses `base_url`, adding the trailing slash endpoint joining relies on.
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url =
            Url::parse(&normalized).map_err(|e| TransportError::InvalidUrl(e.to_string()))?;

        Ok(Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            success_code: DEFAULT_SUCCESS_CODE,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_success_code(mut self, success_code: i32) -> Self {
        self.success_code = success_code;
        self
    }
}
