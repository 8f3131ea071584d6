use async_trait::async_trait;

use super::model::{NewOrder, Order};
use crate::domain::resource::Resource;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn place_order(&self, order: &NewOrder) -> Resource<Order>;
    async fn my_orders(&self) -> Resource<Vec<Order>>;
}
