use async_trait::async_trait;

use crate::domain::cart::model::CartItem;
use crate::domain::resource::Resource;

pub struct AddCartItemParams {
    pub product_att_id: i64,
}

#[async_trait]
pub trait AddCartItemUseCase: Send + Sync {
    async fn execute(&self, params: AddCartItemParams) -> Resource<CartItem>;
}
