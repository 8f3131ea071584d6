use std::sync::Arc;

use async_trait::async_trait;

use crate::cart::dto::{CartItemDto, PlaceOrderRequest};
use crate::client::ApiClient;
use crate::endpoints::Endpoint;
use crate::envelope::ApiResult;
use crate::order::dto::OrderDto;

/// Cart routes. Orders are placed and listed under `cart/` too.
#[async_trait]
pub trait CartService: Send + Sync {
    async fn add_to_cart(&self, product_att_id: i64) -> ApiResult<CartItemDto>;
    async fn view_cart(&self) -> ApiResult<Vec<CartItemDto>>;
    async fn place_order(&self, request: &PlaceOrderRequest) -> ApiResult<OrderDto>;
    async fn my_orders(&self) -> ApiResult<Vec<OrderDto>>;
}

pub struct CartServiceHttp {
    client: Arc<ApiClient>,
}

impl CartServiceHttp {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CartService for CartServiceHttp {
    async fn add_to_cart(&self, product_att_id: i64) -> ApiResult<CartItemDto> {
        self.client.call(Endpoint::add_to_cart(product_att_id)).await
    }

    async fn view_cart(&self) -> ApiResult<Vec<CartItemDto>> {
        self.client.call(Endpoint::view_cart()).await
    }

    async fn place_order(&self, request: &PlaceOrderRequest) -> ApiResult<OrderDto> {
        self.client
            .call_with_body(Endpoint::place_order(), request)
            .await
    }

    async fn my_orders(&self) -> ApiResult<Vec<OrderDto>> {
        self.client.call(Endpoint::my_orders()).await
    }
}
