use std::sync::Arc;

use tokio::sync::watch;

use business::domain::cart::model::Cart;
use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::get_cart::GetCartUseCase;
use business::domain::order::model::Order;
use business::domain::order::use_cases::get_mine::GetMyOrdersUseCase;
use business::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};
use business::domain::resource::Resource;

use crate::message_bus::MessageBus;
use crate::state::{BUSY_MESSAGE, InFlight, LoadState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartState {
    pub cart: LoadState<Cart>,
    pub orders: LoadState<Vec<Order>>,
    /// Set while add-to-cart or place-order is in flight.
    pub is_updating: bool,
    pub last_order: Option<Order>,
}

fn updating(state: &mut CartState) -> &mut bool {
    &mut state.is_updating
}

pub struct CartViewModel {
    add_item: Arc<dyn AddCartItemUseCase>,
    get_cart: Arc<dyn GetCartUseCase>,
    place_order: Arc<dyn PlaceOrderUseCase>,
    get_my_orders: Arc<dyn GetMyOrdersUseCase>,
    bus: MessageBus,
    state: watch::Sender<CartState>,
}

impl CartViewModel {
    pub fn new(
        add_item: Arc<dyn AddCartItemUseCase>,
        get_cart: Arc<dyn GetCartUseCase>,
        place_order: Arc<dyn PlaceOrderUseCase>,
        get_my_orders: Arc<dyn GetMyOrdersUseCase>,
        bus: MessageBus,
    ) -> Self {
        Self {
            add_item,
            get_cart,
            place_order,
            get_my_orders,
            bus,
            state: watch::Sender::new(CartState::default()),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<CartState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> CartState {
        self.state.borrow().clone()
    }

    pub async fn load_cart(&self) {
        self.state.send_modify(|s| s.cart = LoadState::Loading);
        let result = self.get_cart.execute().await;
        if let Some(message) = result.message() {
            self.bus.error(message);
        }
        self.state.send_modify(|s| s.cart = result.into());
    }

    pub async fn load_orders(&self) {
        self.state.send_modify(|s| s.orders = LoadState::Loading);
        let result = self.get_my_orders.execute().await;
        if let Some(message) = result.message() {
            self.bus.error(message);
        }
        self.state.send_modify(|s| s.orders = result.into());
    }

    /// Adds one unit of the attribute and reloads the whole cart on success.
    pub async fn add_to_cart(&self, product_att_id: i64) -> Resource<()> {
        let Some(_guard) = InFlight::acquire(&self.state, updating) else {
            return Resource::error(BUSY_MESSAGE);
        };

        let added = self
            .add_item
            .execute(AddCartItemParams { product_att_id })
            .await;
        match added {
            Resource::Success(item) => {
                tracing::debug!(item = item.id, "Item added to cart");
                self.bus.info(format!("{} added to cart", item.product_name));
                self.load_cart().await;
                Resource::Success(())
            }
            other => {
                let message = other.message().unwrap_or_default().to_string();
                self.bus.error(&message);
                Resource::error(message)
            }
        }
    }

    /// Places the order. On success the local cart is emptied at once and
    /// the order history is reloaded.
    pub async fn place_order(&self, params: PlaceOrderParams) -> Resource<Order> {
        let Some(_guard) = InFlight::acquire(&self.state, updating) else {
            return Resource::error(BUSY_MESSAGE);
        };

        let placed = self.place_order.execute(params).await;
        match &placed {
            Resource::Success(order) => {
                self.bus.info(format!("Order #{} placed", order.id));
                let order = order.clone();
                self.state.send_modify(|s| {
                    s.cart = LoadState::Loaded(Cart::empty());
                    s.last_order = Some(order);
                });
                self.load_orders().await;
            }
            other => {
                if let Some(message) = other.message() {
                    self.bus.error(message);
                }
            }
        }
        placed
    }
}
