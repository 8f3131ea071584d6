use std::sync::Arc;

use async_trait::async_trait;

use crate::client::ApiClient;
use crate::endpoints::Endpoint;
use crate::envelope::ApiResult;
use crate::payment::dto::{CreatePaymentRequest, PaymentOrderDto, PaymentStatusDto};

#[async_trait]
pub trait PaymentService: Send + Sync {
    async fn create_zalopay(&self, request: &CreatePaymentRequest) -> ApiResult<PaymentOrderDto>;
    async fn payment_status(&self, order_id: i64) -> ApiResult<PaymentStatusDto>;
}

pub struct PaymentServiceHttp {
    client: Arc<ApiClient>,
}

impl PaymentServiceHttp {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PaymentService for PaymentServiceHttp {
    async fn create_zalopay(&self, request: &CreatePaymentRequest) -> ApiResult<PaymentOrderDto> {
        self.client
            .call_with_body(Endpoint::create_zalopay(), request)
            .await
    }

    async fn payment_status(&self, order_id: i64) -> ApiResult<PaymentStatusDto> {
        self.client.call(Endpoint::payment_status(order_id)).await
    }
}
