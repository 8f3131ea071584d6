use serde::{Deserialize, Serialize};

use business::domain::payment::model::{PaymentOrder, PaymentStatus};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub order_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrderDto {
    pub order_id: Option<i64>,
    #[serde(default)]
    pub order_url: String,
    pub app_trans_id: Option<String>,
    pub zp_trans_token: Option<String>,
}

impl PaymentOrderDto {
    /// `order_id` is the id the payment was requested for; the server may
    /// omit it from the answer.
    pub fn into_domain(self, order_id: i64) -> PaymentOrder {
        PaymentOrder {
            order_id: self.order_id.unwrap_or(order_id),
            order_url: self.order_url,
            app_trans_id: self.app_trans_id,
            zp_trans_token: self.zp_trans_token,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatusDto {
    pub order_id: Option<i64>,
    #[serde(default, alias = "paymentStatus")]
    pub status: i32,
    pub message: Option<String>,
}

impl PaymentStatusDto {
    pub fn into_domain(self, order_id: i64) -> PaymentStatus {
        PaymentStatus {
            order_id: self.order_id.unwrap_or(order_id),
            status: self.status,
            message: self.message,
        }
    }
}
