use async_trait::async_trait;

use crate::domain::product::model::ProductDetail;
use crate::domain::resource::Resource;

pub struct GetProductDetailParams {
    pub id: i64,
}

#[async_trait]
pub trait GetProductDetailUseCase: Send + Sync {
    async fn execute(&self, params: GetProductDetailParams) -> Resource<ProductDetail>;
}
