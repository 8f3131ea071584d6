use super::{
    api_config::ApiConfig, payment_config::PaymentPollingConfig, storage_config::StorageConfig,
};

pub struct AppConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub payment: PaymentPollingConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api: ApiConfig::from_env(),
            storage: StorageConfig::from_env(),
            payment: PaymentPollingConfig::from_env(),
        }
    }
}
