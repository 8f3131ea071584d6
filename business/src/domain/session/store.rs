use async_trait::async_trait;

use crate::domain::errors::StorageError;

use super::model::SavedCredentials;

/// Durable key-value store for the session and launch state.
///
/// Each read is an independent snapshot; concurrent writes are not coordinated
/// and the last one wins.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn access_token(&self) -> Result<Option<String>, StorageError>;
    async fn save_access_token(&self, token: &str) -> Result<(), StorageError>;
    async fn clear_access_token(&self) -> Result<(), StorageError>;
    async fn saved_credentials(&self) -> Result<Option<SavedCredentials>, StorageError>;
    async fn save_credentials(&self, credentials: &SavedCredentials) -> Result<(), StorageError>;
    async fn clear_credentials(&self) -> Result<(), StorageError>;
    async fn is_first_launch(&self) -> Result<bool, StorageError>;
    async fn set_first_launch(&self, first_launch: bool) -> Result<(), StorageError>;
}

/// Bounded, most-recent-first history of search keywords.
#[async_trait]
pub trait SearchHistoryStore: Send + Sync {
    async fn recent(&self) -> Result<Vec<String>, StorageError>;
    async fn record(&self, keyword: &str) -> Result<(), StorageError>;
    async fn clear(&self) -> Result<(), StorageError>;
}
