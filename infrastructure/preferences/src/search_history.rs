use std::path::Path;

use async_trait::async_trait;
use tokio::sync::Mutex;

use business::domain::errors::StorageError;
use business::domain::product::recent_searches::RecentSearches;
use business::domain::session::store::SearchHistoryStore;

use crate::json_file::JsonFile;

/// Recent-search history kept in its own JSON file as a plain keyword array.
pub struct FileSearchHistoryStore {
    file: JsonFile,
    searches: Mutex<RecentSearches>,
}

impl FileSearchHistoryStore {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let file = JsonFile::new(path.as_ref());
        let stored = file.load::<Vec<String>>().await?;
        Ok(Self {
            file,
            searches: Mutex::new(RecentSearches::from_stored(stored)),
        })
    }
}

#[async_trait]
impl SearchHistoryStore for FileSearchHistoryStore {
    async fn recent(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.searches.lock().await.keywords().to_vec())
    }

    async fn record(&self, keyword: &str) -> Result<(), StorageError> {
        let mut searches = self.searches.lock().await;
        let mut next = searches.clone();
        if !next.record(keyword) {
            return Ok(());
        }
        self.file.save(&next.keywords()).await?;
        *searches = next;
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut searches = self.searches.lock().await;
        self.file.save(&Vec::<String>::new()).await?;
        *searches = RecentSearches::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::recent_searches::MAX_RECENT_SEARCHES;

    #[tokio::test]
    async fn should_keep_one_occurrence_of_repeated_keyword() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSearchHistoryStore::open(dir.path().join("searches.json"))
            .await
            .unwrap();

        store.record("iphone").await.unwrap();
        store.record("airpods").await.unwrap();
        store.record("iphone").await.unwrap();

        assert_eq!(store.recent().await.unwrap(), vec!["iphone", "airpods"]);
    }

    #[tokio::test]
    async fn should_cap_history_and_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("searches.json");
        let store = FileSearchHistoryStore::open(&path).await.unwrap();
        for i in 0..20 {
            store.record(&format!("keyword {}", i)).await.unwrap();
        }
        drop(store);

        let reopened = FileSearchHistoryStore::open(&path).await.unwrap();
        let recent = reopened.recent().await.unwrap();

        assert_eq!(recent.len(), MAX_RECENT_SEARCHES);
        assert_eq!(recent[0], "keyword 19");
        assert_eq!(recent[MAX_RECENT_SEARCHES - 1], "keyword 5");
    }

    #[tokio::test]
    async fn should_clear_history() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSearchHistoryStore::open(dir.path().join("searches.json"))
            .await
            .unwrap();
        store.record("case").await.unwrap();

        store.clear().await.unwrap();

        assert!(store.recent().await.unwrap().is_empty());
    }
}
