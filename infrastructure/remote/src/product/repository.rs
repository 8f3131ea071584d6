use std::sync::Arc;

use async_trait::async_trait;

use business::domain::product::model::{ProductDetail, ProductSummary};
use business::domain::product::repository::ProductRepository;
use business::domain::resource::Resource;

use crate::endpoints::Access;
use crate::product::dto::{ProductDetailDto, ProductSummaryDto};
use crate::product::service::ProductService;
use crate::response::ResponseHandler;

pub struct ProductRepositoryHttp {
    service: Arc<dyn ProductService>,
    responses: Arc<ResponseHandler>,
}

impl ProductRepositoryHttp {
    pub fn new(service: Arc<dyn ProductService>, responses: Arc<ResponseHandler>) -> Self {
        Self { service, responses }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryHttp {
    async fn home_products(&self) -> Resource<Vec<ProductSummary>> {
        let result = self.service.home().await;
        let outcome = self
            .responses
            .interpret("load products", result)
            .map(|home| {
                home.products
                    .into_iter()
                    .map(ProductSummaryDto::into_domain)
                    .collect()
            });
        self.responses.finish(Access::Public, outcome).await
    }

    async fn product_detail(&self, id: i64) -> Resource<ProductDetail> {
        let result = self.service.product_detail(id).await;
        let outcome = self
            .responses
            .interpret("load product", result)
            .map(ProductDetailDto::into_domain);
        self.responses.finish(Access::Public, outcome).await
    }

    /// The backend has no search route; the home listing is filtered locally.
    async fn search(&self, keyword: &str) -> Resource<Vec<ProductSummary>> {
        let keyword = keyword.trim();
        self.home_products().await.map(|products| {
            products
                .into_iter()
                .filter(|product| product.matches(keyword))
                .collect()
        })
    }
}
