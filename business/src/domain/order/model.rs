use chrono::{DateTime, Utc};

use super::errors::OrderError;
use super::value_objects::OrderType;
use crate::domain::shared::validation::is_blank;

/// Copy of a cart line frozen at the moment the order was placed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub product_att_id: i64,
    pub product_name: String,
    pub color: Option<String>,
    pub image: Option<String>,
    pub price: i64,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub phone_number: String,
    pub email: String,
    pub address: Option<String>,
    pub description: Option<String>,
    pub total_price: i64,
    pub items: Vec<OrderItem>,
    pub status: i32,
    pub order_type: OrderType,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderItem {
    pub cart_item_id: i64,
    pub product_att_id: i64,
    pub quantity: u32,
}

/// Order ready to be submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub order_type: OrderType,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub description: Option<String>,
    pub total_price: i64,
    pub items: Vec<NewOrderItem>,
}

pub struct NewOrderProps {
    pub order_type: i32,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub description: Option<String>,
    pub total_price: i64,
    pub items: Vec<NewOrderItem>,
}

impl NewOrder {
    /// Address, total and items are only checked for purchases. Repair
    /// requests are accepted without them.
    pub fn new(props: NewOrderProps) -> Result<Self, OrderError> {
        let order_type =
            OrderType::from_code(props.order_type).ok_or(OrderError::InvalidType(props.order_type))?;

        if is_blank(&props.phone_number) {
            return Err(OrderError::PhoneEmpty);
        }
        if is_blank(&props.email) {
            return Err(OrderError::EmailEmpty);
        }

        if order_type == OrderType::Purchase {
            if is_blank(&props.address) {
                return Err(OrderError::AddressEmpty);
            }
            if props.total_price <= 0 {
                return Err(OrderError::InvalidTotal);
            }
            if props.items.is_empty() {
                return Err(OrderError::NoItems);
            }
            if props.items.iter().any(|item| item.quantity == 0) {
                return Err(OrderError::InvalidQuantity);
            }
        }

        Ok(Self {
            order_type,
            phone_number: props.phone_number.trim().to_string(),
            email: props.email.trim().to_string(),
            address: props.address.trim().to_string(),
            description: props
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            total_price: props.total_price,
            items: props.items,
        })
    }
}
