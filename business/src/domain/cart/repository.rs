use async_trait::async_trait;

use super::model::{Cart, CartItem};
use crate::domain::resource::Resource;

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn add_item(&self, product_att_id: i64) -> Resource<CartItem>;
    async fn view_cart(&self) -> Resource<Cart>;
}
