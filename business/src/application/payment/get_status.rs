use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::payment::errors::PaymentError;
use crate::domain::payment::model::PaymentStatus;
use crate::domain::payment::repository::PaymentRepository;
use crate::domain::payment::use_cases::get_status::{
    GetPaymentStatusParams, GetPaymentStatusUseCase,
};
use crate::domain::resource::Resource;

pub struct GetPaymentStatusUseCaseImpl {
    pub repository: Arc<dyn PaymentRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetPaymentStatusUseCase for GetPaymentStatusUseCaseImpl {
    async fn execute(&self, params: GetPaymentStatusParams) -> Resource<PaymentStatus> {
        if params.order_id <= 0 {
            return Resource::error(PaymentError::InvalidOrderId(params.order_id).to_string());
        }

        self.logger
            .debug(&format!("Checking payment status of order {}", params.order_id));
        self.repository.payment_status(params.order_id).await
    }
}
