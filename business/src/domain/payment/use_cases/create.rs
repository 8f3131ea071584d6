use async_trait::async_trait;

use crate::domain::payment::model::PaymentOrder;
use crate::domain::resource::Resource;

pub struct CreatePaymentParams {
    pub order_id: i64,
}

#[async_trait]
pub trait CreatePaymentUseCase: Send + Sync {
    async fn execute(&self, params: CreatePaymentParams) -> Resource<PaymentOrder>;
}
