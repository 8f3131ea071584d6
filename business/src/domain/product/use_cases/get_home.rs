use async_trait::async_trait;

use crate::domain::product::model::ProductSummary;
use crate::domain::resource::Resource;

#[async_trait]
pub trait GetHomeProductsUseCase: Send + Sync {
    async fn execute(&self) -> Resource<Vec<ProductSummary>>;
}
