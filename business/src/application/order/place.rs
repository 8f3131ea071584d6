use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::model::{NewOrder, NewOrderProps, Order};
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};
use crate::domain::resource::Resource;

pub struct PlaceOrderUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, params: PlaceOrderParams) -> Resource<Order> {
        let order = match NewOrder::new(NewOrderProps {
            order_type: params.order_type,
            phone_number: params.phone_number,
            email: params.email,
            address: params.address,
            description: params.description,
            total_price: params.total_price,
            items: params.items,
        }) {
            Ok(order) => order,
            Err(err) => {
                self.logger.warn(&format!("Order rejected: {}", err));
                return Resource::error(err.to_string());
            }
        };

        self.logger.info(&format!(
            "Placing {} order with {} item(s), total {}",
            order.order_type,
            order.items.len(),
            order.total_price
        ));

        let result = self.repository.place_order(&order).await;
        if let Some(placed) = result.data() {
            self.logger
                .info(&format!("Order placed with id: {}", placed.id));
        }
        result
    }
}
