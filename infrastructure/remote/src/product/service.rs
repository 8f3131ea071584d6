use std::sync::Arc;

use async_trait::async_trait;

use crate::client::ApiClient;
use crate::endpoints::Endpoint;
use crate::envelope::ApiResult;
use crate::product::dto::{HomeDto, ProductDetailDto};

#[async_trait]
pub trait ProductService: Send + Sync {
    async fn home(&self) -> ApiResult<HomeDto>;
    async fn product_detail(&self, id: i64) -> ApiResult<ProductDetailDto>;
}

pub struct ProductServiceHttp {
    client: Arc<ApiClient>,
}

impl ProductServiceHttp {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductService for ProductServiceHttp {
    async fn home(&self) -> ApiResult<HomeDto> {
        self.client.call(Endpoint::home()).await
    }

    async fn product_detail(&self, id: i64) -> ApiResult<ProductDetailDto> {
        self.client.call(Endpoint::product_detail(id)).await
    }
}
