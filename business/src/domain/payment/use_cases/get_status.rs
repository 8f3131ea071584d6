use async_trait::async_trait;

use crate::domain::payment::model::PaymentStatus;
use crate::domain::resource::Resource;

pub struct GetPaymentStatusParams {
    pub order_id: i64,
}

#[async_trait]
pub trait GetPaymentStatusUseCase: Send + Sync {
    async fn execute(&self, params: GetPaymentStatusParams) -> Resource<PaymentStatus>;
}
