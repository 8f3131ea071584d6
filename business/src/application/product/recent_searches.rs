use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::use_cases::recent_searches::{
    ClearRecentSearchesUseCase, GetRecentSearchesUseCase,
};
use crate::domain::resource::Resource;
use crate::domain::session::store::SearchHistoryStore;

pub struct GetRecentSearchesUseCaseImpl {
    pub history: Arc<dyn SearchHistoryStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRecentSearchesUseCase for GetRecentSearchesUseCaseImpl {
    async fn execute(&self) -> Resource<Vec<String>> {
        let result = self.history.recent().await;
        if let Err(err) = &result {
            self.logger
                .warn(&format!("Could not read search history: {}", err));
        }
        result.into()
    }
}

pub struct ClearRecentSearchesUseCaseImpl {
    pub history: Arc<dyn SearchHistoryStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearRecentSearchesUseCase for ClearRecentSearchesUseCaseImpl {
    async fn execute(&self) -> Resource<()> {
        self.logger.info("Clearing search history");
        self.history.clear().await.into()
    }
}
