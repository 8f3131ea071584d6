use std::env;
use std::time::Duration;

use remote::config::{ApiClientConfig, DEFAULT_SUCCESS_CODE};
use remote::error::TransportError;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/";

/// Backend connection settings
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub success_code: i32,
}

impl ApiConfig {
    /// Load backend configuration from environment variables
    ///
    /// Environment variables:
    /// - STOREFRONT_API_URL: Backend base URL (default: "http://localhost:8080/api/")
    /// - STOREFRONT_HTTP_TIMEOUT_SECS: Connect and request timeout (default: 30)
    /// - STOREFRONT_SUCCESS_CODE: Envelope code of a successful call (default: 1000)
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("STOREFRONT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            timeout_secs: parse_or(env::var("STOREFRONT_HTTP_TIMEOUT_SECS").ok(), 30),
            success_code: parse_or(env::var("STOREFRONT_SUCCESS_CODE").ok(), DEFAULT_SUCCESS_CODE),
        }
    }

    pub fn client_config(&self) -> Result<ApiClientConfig, TransportError> {
        Ok(ApiClientConfig::new(&self.base_url)?
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_success_code(self.success_code))
    }
}

/// Parses an optional variable, keeping `default` when absent or malformed.
pub fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fall_back_to_default_on_missing_or_malformed_value() {
        assert_eq!(parse_or::<u64>(None, 30), 30);
        assert_eq!(parse_or::<u64>(Some("soon".to_string()), 30), 30);
        assert_eq!(parse_or::<u64>(Some(" 45 ".to_string()), 30), 45);
    }

    #[test]
    fn should_build_client_config() {
        // Arrange
        let config = ApiConfig {
            base_url: "https://shop.example.com/api".to_string(),
            timeout_secs: 10,
            success_code: 0,
        };

        // Act
        let client = config.client_config().unwrap();

        // Assert
        assert_eq!(client.base_url.as_str(), "https://shop.example.com/api/");
        assert_eq!(client.timeout, Duration::from_secs(10));
        assert_eq!(client.success_code, 0);
    }
}
