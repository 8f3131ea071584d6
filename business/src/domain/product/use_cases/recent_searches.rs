use async_trait::async_trait;

use crate::domain::resource::Resource;

#[async_trait]
pub trait GetRecentSearchesUseCase: Send + Sync {
    async fn execute(&self) -> Resource<Vec<String>>;
}

#[async_trait]
pub trait ClearRecentSearchesUseCase: Send + Sync {
    async fn execute(&self) -> Resource<()>;
}
