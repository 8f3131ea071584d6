use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::model::ProductSummary;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_home::GetHomeProductsUseCase;
use crate::domain::resource::Resource;

pub struct GetHomeProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetHomeProductsUseCase for GetHomeProductsUseCaseImpl {
    async fn execute(&self) -> Resource<Vec<ProductSummary>> {
        self.logger.info("Fetching home products");
        self.repository.home_products().await
    }
}
