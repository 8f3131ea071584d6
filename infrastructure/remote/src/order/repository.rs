use std::sync::Arc;

use async_trait::async_trait;

use business::domain::order::model::{NewOrder, Order};
use business::domain::order::repository::OrderRepository;
use business::domain::resource::Resource;

use crate::cart::dto::PlaceOrderRequest;
use crate::cart::service::CartService;
use crate::endpoints::Access;
use crate::order::dto::OrderDto;
use crate::response::ResponseHandler;

pub struct OrderRepositoryHttp {
    service: Arc<dyn CartService>,
    responses: Arc<ResponseHandler>,
}

impl OrderRepositoryHttp {
    pub fn new(service: Arc<dyn CartService>, responses: Arc<ResponseHandler>) -> Self {
        Self { service, responses }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryHttp {
    async fn place_order(&self, order: &NewOrder) -> Resource<Order> {
        let result = self
            .service
            .place_order(&PlaceOrderRequest::from(order))
            .await;
        let outcome = self
            .responses
            .interpret("place order", result)
            .map(OrderDto::into_domain);
        self.responses.finish(Access::Authenticated, outcome).await
    }

    async fn my_orders(&self) -> Resource<Vec<Order>> {
        let result = self.service.my_orders().await;
        let outcome = self
            .responses
            .interpret("load orders", result)
            .map(|orders| orders.into_iter().map(OrderDto::into_domain).collect());
        self.responses.finish(Access::Authenticated, outcome).await
    }
}
