use std::env;
use std::path::PathBuf;

/// Where the preference and search-history files live
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    /// Environment variables:
    /// - STOREFRONT_DATA_DIR: Directory for local state (default: ".storefront")
    pub fn from_env() -> Self {
        let data_dir = env::var("STOREFRONT_DATA_DIR").unwrap_or_else(|_| ".storefront".to_string());
        Self {
            data_dir: PathBuf::from(data_dir),
        }
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join("preferences.json")
    }

    pub fn search_history_path(&self) -> PathBuf {
        self.data_dir.join("recent_searches.json")
    }
}
