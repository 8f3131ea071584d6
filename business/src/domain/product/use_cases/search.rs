use async_trait::async_trait;

use crate::domain::product::model::ProductSummary;
use crate::domain::resource::Resource;

pub struct SearchProductsParams {
    pub keyword: String,
}

/// Records the keyword in the recent-search history, then searches.
#[async_trait]
pub trait SearchProductsUseCase: Send + Sync {
    async fn execute(&self, params: SearchProductsParams) -> Resource<Vec<ProductSummary>>;
}
