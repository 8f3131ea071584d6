use serde::{Deserialize, Serialize};

use business::domain::cart::model::CartItem;
use business::domain::order::model::NewOrder;

use crate::serde_helpers::amount;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemDto {
    pub id: i64,
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

impl CartItemDto {
    pub fn into_domain(self) -> CartItem {
        CartItem {
            id: self.id,
            product_att_id: self.product_att_id,
            product_name: self.product_name,
            color: self.color,
            image: self.image,
            price: self.price,
            quantity: u32::try_from(self.quantity).unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderItemRequest {
    pub cart_item_id: i64,
    pub product_att_id: i64,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub phone_number: String,
    pub email: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub total_price: i64,
    #[serde(rename = "type")]
    pub order_type: i32,
    pub items: Vec<PlaceOrderItemRequest>,
}

impl From<&NewOrder> for PlaceOrderRequest {
    fn from(order: &NewOrder) -> Self {
        Self {
            phone_number: order.phone_number.clone(),
            email: order.email.clone(),
            address: order.address.clone(),
            description: order.description.clone(),
            total_price: order.total_price,
            order_type: order.order_type.code(),
            items: order
                .items
                .iter()
                .map(|item| PlaceOrderItemRequest {
                    cart_item_id: item.cart_item_id,
                    product_att_id: item.product_att_id,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cart::model::Cart;
    use business::domain::order::model::{NewOrderItem, NewOrderProps};
    use serde_json::json;

    #[test]
    fn should_read_cart_item_with_float_price() {
        let json = r#"{"id":5,"productAttId":31,"productName":"iPhone 15","price":1990000.0,"quantity":2}"#;

        let item = serde_json::from_str::<CartItemDto>(json).unwrap().into_domain();

        assert_eq!(item.price, 1_990_000);
        assert_eq!(item.quantity, 2);
        assert_eq!(item.line_total(), 3_980_000);
    }

    #[test]
    fn should_clamp_negative_quantity_to_zero() {
        let json = r#"{"id":5,"price":10,"quantity":-3}"#;

        let item = serde_json::from_str::<CartItemDto>(json).unwrap().into_domain();

        assert_eq!(item.quantity, 0);
    }

    #[test]
    fn should_reject_price_beyond_integer_range() {
        let json = r#"[{"id":1,"price":1e19,"quantity":2}]"#;

        let result = serde_json::from_str::<Vec<CartItemDto>>(json);

        assert!(result.is_err());
    }

    #[test]
    fn should_total_extreme_prices_without_overflow() {
        let json = r#"[{"id":1,"price":9223372036854775807,"quantity":2},{"id":2,"price":9223372036854775807,"quantity":1}]"#;
        let items = serde_json::from_str::<Vec<CartItemDto>>(json).unwrap();

        let cart = Cart::from_items(items.into_iter().map(CartItemDto::into_domain).collect());

        assert_eq!(cart.total_price(), i64::MAX);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn should_serialize_order_with_type_code() {
        let order = NewOrder::new(NewOrderProps {
            order_type: 0,
            phone_number: "0912345678".to_string(),
            email: "a@shop.vn".to_string(),
            address: "12 Le Loi".to_string(),
            description: None,
            total_price: 250,
            items: vec![NewOrderItem {
                cart_item_id: 5,
                product_att_id: 31,
                quantity: 2,
            }],
        })
        .unwrap();

        let body = serde_json::to_value(PlaceOrderRequest::from(&order)).unwrap();

        assert_eq!(
            body,
            json!({
                "phoneNumber": "0912345678",
                "email": "a@shop.vn",
                "address": "12 Le Loi",
                "totalPrice": 250,
                "type": 0,
                "items": [{"cartItemId": 5, "productAttId": 31, "quantity": 2}]
            })
        );
    }
}
