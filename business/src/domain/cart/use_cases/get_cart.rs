use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::resource::Resource;

#[async_trait]
pub trait GetCartUseCase: Send + Sync {
    async fn execute(&self) -> Resource<Cart>;
}
