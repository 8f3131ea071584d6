use async_trait::async_trait;

use crate::domain::order::model::{NewOrderItem, Order};
use crate::domain::resource::Resource;

pub struct PlaceOrderParams {
    /// 0 for a purchase, 1 for a repair request.
    pub order_type: i32,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub description: Option<String>,
    pub total_price: i64,
    pub items: Vec<NewOrderItem>,
}

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(&self, params: PlaceOrderParams) -> Resource<Order>;
}
