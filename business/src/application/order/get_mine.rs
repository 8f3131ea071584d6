use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_mine::GetMyOrdersUseCase;
use crate::domain::resource::Resource;

pub struct GetMyOrdersUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetMyOrdersUseCase for GetMyOrdersUseCaseImpl {
    async fn execute(&self) -> Resource<Vec<Order>> {
        self.logger.info("Fetching order history");
        self.repository.my_orders().await
    }
}
