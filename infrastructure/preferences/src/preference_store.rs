use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use business::domain::errors::StorageError;
use business::domain::session::model::SavedCredentials;
use business::domain::session::store::PreferenceStore;

use crate::json_file::JsonFile;

/// On-disk shape of the preference file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Preferences {
    #[serde(default = "default_first_launch")]
    pub is_first_launch: bool,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

fn default_first_launch() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            is_first_launch: true,
            access_token: None,
            phone_number: None,
            password: None,
        }
    }
}

impl Preferences {
    pub(crate) fn credentials(&self) -> Option<SavedCredentials> {
        match (&self.phone_number, &self.password) {
            (Some(phone_number), Some(password)) => Some(SavedCredentials {
                phone_number: phone_number.clone(),
                password: password.clone(),
            }),
            _ => None,
        }
    }
}

/// Preference store backed by a single JSON file. The file is read once on
/// open; every write replaces it.
pub struct FilePreferenceStore {
    file: JsonFile,
    state: RwLock<Preferences>,
}

impl FilePreferenceStore {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let file = JsonFile::new(path.as_ref());
        let state = file.load::<Preferences>().await?;
        tracing::debug!(path = %file.path().display(), "Preference store opened");
        Ok(Self {
            file,
            state: RwLock::new(state),
        })
    }

    async fn update(&self, change: impl FnOnce(&mut Preferences)) -> Result<(), StorageError> {
        let mut state = self.state.write().await;
        let mut next = state.clone();
        change(&mut next);
        self.file.save(&next).await?;
        *state = next;
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn access_token(&self) -> Result<Option<String>, StorageError> {
        Ok(self.state.read().await.access_token.clone())
    }

    async fn save_access_token(&self, token: &str) -> Result<(), StorageError> {
        let token = token.to_string();
        self.update(|prefs| prefs.access_token = Some(token)).await
    }

    async fn clear_access_token(&self) -> Result<(), StorageError> {
        self.update(|prefs| prefs.access_token = None).await
    }

    async fn saved_credentials(&self) -> Result<Option<SavedCredentials>, StorageError> {
        Ok(self.state.read().await.credentials())
    }

    async fn save_credentials(&self, credentials: &SavedCredentials) -> Result<(), StorageError> {
        let credentials = credentials.clone();
        self.update(|prefs| {
            prefs.phone_number = Some(credentials.phone_number);
            prefs.password = Some(credentials.password);
        })
        .await
    }

    async fn clear_credentials(&self) -> Result<(), StorageError> {
        self.update(|prefs| {
            prefs.phone_number = None;
            prefs.password = None;
        })
        .await
    }

    async fn is_first_launch(&self) -> Result<bool, StorageError> {
        Ok(self.state.read().await.is_first_launch)
    }

    async fn set_first_launch(&self, first_launch: bool) -> Result<(), StorageError> {
        self.update(|prefs| prefs.is_first_launch = first_launch)
            .await
    }
}
