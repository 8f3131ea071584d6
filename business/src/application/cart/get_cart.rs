use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get_cart::GetCartUseCase;
use crate::domain::logger::Logger;
use crate::domain::resource::Resource;

pub struct GetCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self) -> Resource<Cart> {
        self.logger.info("Fetching cart");
        self.repository.view_cart().await
    }
}
