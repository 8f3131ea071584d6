use async_trait::async_trait;

use super::model::{ProductDetail, ProductSummary};
use crate::domain::resource::Resource;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn home_products(&self) -> Resource<Vec<ProductSummary>>;
    async fn product_detail(&self, id: i64) -> Resource<ProductDetail>;
    /// Filters the public catalog listing by keyword.
    async fn search(&self, keyword: &str) -> Resource<Vec<ProductSummary>>;
}
