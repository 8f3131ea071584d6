use async_trait::async_trait;

use crate::domain::order::model::Order;
use crate::domain::resource::Resource;

#[async_trait]
pub trait GetMyOrdersUseCase: Send + Sync {
    async fn execute(&self) -> Resource<Vec<Order>>;
}
