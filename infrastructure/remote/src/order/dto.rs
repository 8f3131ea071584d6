use chrono::{DateTime, Utc};
use serde::Deserialize;

use business::domain::order::model::{Order, OrderItem};
use business::domain::order::value_objects::OrderType;

use crate::serde_helpers::{amount, optional_timestamp};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    #[serde(default)]
    pub product_att_id: i64,
    #[serde(default)]
    pub product_name: String,
    pub color: Option<String>,
    pub image: Option<String>,
    #[serde(default, deserialize_with = "amount")]
    pub price: i64,
    #[serde(default)]
    pub quantity: i64,
}

impl OrderItemDto {
    pub fn into_domain(self) -> OrderItem {
        OrderItem {
            product_att_id: self.product_att_id,
            product_name: self.product_name,
            color: self.color,
            image: self.image,
            price: self.price,
            quantity: u32::try_from(self.quantity).unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: i64,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
    pub address: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "amount")]
    pub total_price: i64,
    #[serde(default, alias = "orderItems")]
    pub items: Vec<OrderItemDto>,
    #[serde(default)]
    pub status: i32,
    #[serde(rename = "type")]
    pub order_type: Option<i32>,
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl OrderDto {
    pub fn into_domain(self) -> Order {
        Order {
            id: self.id,
            phone_number: self.phone_number,
            email: self.email,
            address: self.address.filter(|a| !a.trim().is_empty()),
            description: self.description.filter(|d| !d.trim().is_empty()),
            total_price: self.total_price,
            items: self.items.into_iter().map(OrderItemDto::into_domain).collect(),
            status: self.status,
            order_type: self
                .order_type
                .and_then(OrderType::from_code)
                .unwrap_or(OrderType::Purchase),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
