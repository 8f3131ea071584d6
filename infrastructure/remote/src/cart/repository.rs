use std::sync::Arc;

use async_trait::async_trait;

use business::domain::cart::model::{Cart, CartItem};
use business::domain::cart::repository::CartRepository;
use business::domain::resource::Resource;

use crate::cart::dto::CartItemDto;
use crate::cart::service::CartService;
use crate::endpoints::Access;
use crate::response::ResponseHandler;

pub struct CartRepositoryHttp {
    service: Arc<dyn CartService>,
    responses: Arc<ResponseHandler>,
}

impl CartRepositoryHttp {
    pub fn new(service: Arc<dyn CartService>, responses: Arc<ResponseHandler>) -> Self {
        Self { service, responses }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryHttp {
    async fn add_item(&self, product_att_id: i64) -> Resource<CartItem> {
        let result = self.service.add_to_cart(product_att_id).await;
        let outcome = self
            .responses
            .interpret("add item to cart", result)
            .map(CartItemDto::into_domain);
        self.responses.finish(Access::Authenticated, outcome).await
    }

    async fn view_cart(&self) -> Resource<Cart> {
        let result = self.service.view_cart().await;
        let outcome = self.responses.interpret("load cart", result).map(|items| {
            Cart::from_items(items.into_iter().map(CartItemDto::into_domain).collect())
        });
        self.responses.finish(Access::Authenticated, outcome).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::dto::PlaceOrderRequest;
    use crate::envelope::{ApiResponse, ApiResult};
    use crate::order::dto::OrderDto;
    use business::domain::session::store::PreferenceStore;
    use mockall::mock;
    use preferences::MemoryPreferenceStore;

    mock! {
        pub Service {}

        #[async_trait]
        impl CartService for Service {
            async fn add_to_cart(&self, product_att_id: i64) -> ApiResult<CartItemDto>;
            async fn view_cart(&self) -> ApiResult<Vec<CartItemDto>>;
            async fn place_order(&self, request: &PlaceOrderRequest) -> ApiResult<OrderDto>;
            async fn my_orders(&self) -> ApiResult<Vec<OrderDto>>;
        }
    }

    fn repository(service: MockService, prefs: Arc<MemoryPreferenceStore>) -> CartRepositoryHttp {
        CartRepositoryHttp::new(
            Arc::new(service),
            Arc::new(ResponseHandler::new(prefs, 1000)),
        )
    }

    fn line(id: i64, price: i64, quantity: i64) -> CartItemDto {
        CartItemDto {
            id,
            product_att_id: id * 10,
            product_name: format!("Item {}", id),
            color: None,
            image: None,
            price,
            quantity,
        }
    }

    #[tokio::test]
    async fn should_compute_cart_totals_from_lines() {
        let mut service = MockService::new();
        service
            .expect_view_cart()
            .times(1)
            .returning(|| Ok(ApiResponse::ok(vec![line(1, 100, 2), line(2, 50, 1)])));

        let result = repository(service, Arc::new(MemoryPreferenceStore::new()))
            .view_cart()
            .await;

        let cart = result.into_data().unwrap();
        assert_eq!(cart.total_price(), 250);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[tokio::test]
    async fn should_clear_token_when_cart_request_unauthorized() {
        let mut service = MockService::new();
        service
            .expect_view_cart()
            .returning(|| Ok(ApiResponse::failure(401, "Unauthenticated")));
        let prefs = Arc::new(MemoryPreferenceStore::with_token("jwt"));

        let result = repository(service, prefs.clone()).view_cart().await;

        assert!(result.is_error());
        assert_eq!(prefs.access_token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn should_report_empty_add_result_as_error() {
        let mut service = MockService::new();
        service
            .expect_add_to_cart()
            .withf(|id| *id == 31)
            .returning(|_| Ok(ApiResponse::empty(200)));

        let result = repository(service, Arc::new(MemoryPreferenceStore::new()))
            .add_item(31)
            .await;

        assert!(result.is_error());
        assert!(result.data().is_none());
    }

    #[tokio::test]
    async fn should_report_missing_attribute() {
        let mut service = MockService::new();
        service
            .expect_add_to_cart()
            .returning(|_| Ok(ApiResponse::failure(404, "not found")));

        let result = repository(service, Arc::new(MemoryPreferenceStore::new()))
            .add_item(99)
            .await;

        assert_eq!(
            result.message(),
            Some("Could not add item to cart: the requested item was not found.")
        );
    }
}
