use std::env;
use std::time::Duration;

use view_models::payment::PollPolicy;

use super::api_config::parse_or;

/// Payment status polling
#[derive(Debug, Clone)]
pub struct PaymentPollingConfig {
    pub interval_secs: u64,
    pub max_attempts: u32,
}

impl PaymentPollingConfig {
    /// Environment variables:
    /// - STOREFRONT_PAYMENT_POLL_SECS: Seconds between status checks (default: 3)
    /// - STOREFRONT_PAYMENT_POLL_ATTEMPTS: Checks before giving up (default: 20)
    pub fn from_env() -> Self {
        Self {
            interval_secs: parse_or(env::var("STOREFRONT_PAYMENT_POLL_SECS").ok(), 3),
            max_attempts: parse_or(env::var("STOREFRONT_PAYMENT_POLL_ATTEMPTS").ok(), 20),
        }
    }

    pub fn policy(&self) -> PollPolicy {
        PollPolicy {
            interval: Duration::from_secs(self.interval_secs),
            max_attempts: self.max_attempts,
        }
    }
}
