use async_trait::async_trait;

use super::model::{PaymentOrder, PaymentStatus};
use crate::domain::resource::Resource;

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn create_payment(&self, order_id: i64) -> Resource<PaymentOrder>;
    async fn payment_status(&self, order_id: i64) -> Resource<PaymentStatus>;
}
