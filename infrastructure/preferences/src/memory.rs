//! In-memory stores for sessions that must not touch the disk.

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::StorageError;
use business::domain::product::recent_searches::RecentSearches;
use business::domain::session::model::SavedCredentials;
use business::domain::session::store::{PreferenceStore, SearchHistoryStore};

use crate::preference_store::Preferences;

#[derive(Default)]
pub struct MemoryPreferenceStore {
    state: RwLock<Preferences>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds an access token and has finished onboarding.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            state: RwLock::new(Preferences {
                is_first_launch: false,
                access_token: Some(token.into()),
                phone_number: None,
                password: None,
            }),
        }
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn access_token(&self) -> Result<Option<String>, StorageError> {
        Ok(self.state.read().await.access_token.clone())
    }

    async fn save_access_token(&self, token: &str) -> Result<(), StorageError> {
        self.state.write().await.access_token = Some(token.to_string());
        Ok(())
    }

    async fn clear_access_token(&self) -> Result<(), StorageError> {
        self.state.write().await.access_token = None;
        Ok(())
    }

    async fn saved_credentials(&self) -> Result<Option<SavedCredentials>, StorageError> {
        Ok(self.state.read().await.credentials())
    }

    async fn save_credentials(&self, credentials: &SavedCredentials) -> Result<(), StorageError> {
        let mut state = self.state.write().await;
        state.phone_number = Some(credentials.phone_number.clone());
        state.password = Some(credentials.password.clone());
        Ok(())
    }

    async fn clear_credentials(&self) -> Result<(), StorageError> {
        let mut state = self.state.write().await;
        state.phone_number = None;
        state.password = None;
        Ok(())
    }

    async fn is_first_launch(&self) -> Result<bool, StorageError> {
        Ok(self.state.read().await.is_first_launch)
    }

    async fn set_first_launch(&self, first_launch: bool) -> Result<(), StorageError> {
        self.state.write().await.is_first_launch = first_launch;
        Ok(())
    }
}

#[derive(Default)]
pub struct MemorySearchHistoryStore {
    searches: RwLock<RecentSearches>,
}

impl MemorySearchHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SearchHistoryStore for MemorySearchHistoryStore {
    async fn recent(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.searches.read().await.keywords().to_vec())
    }

    async fn record(&self, keyword: &str) -> Result<(), StorageError> {
        self.searches.write().await.record(keyword);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.searches.write().await = RecentSearches::default();
        Ok(())
    }
}
