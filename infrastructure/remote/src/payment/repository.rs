use std::sync::Arc;

use async_trait::async_trait;

use business::domain::payment::model::{PaymentOrder, PaymentStatus};
use business::domain::payment::repository::PaymentRepository;
use business::domain::resource::Resource;

use crate::endpoints::Access;
use crate::payment::dto::CreatePaymentRequest;
use crate::payment::service::PaymentService;
use crate::response::ResponseHandler;

pub struct PaymentRepositoryHttp {
    service: Arc<dyn PaymentService>,
    responses: Arc<ResponseHandler>,
}

impl PaymentRepositoryHttp {
    pub fn new(service: Arc<dyn PaymentService>, responses: Arc<ResponseHandler>) -> Self {
        Self { service, responses }
    }
}

#[async_trait]
impl PaymentRepository for PaymentRepositoryHttp {
    async fn create_payment(&self, order_id: i64) -> Resource<PaymentOrder> {
        let result = self
            .service
            .create_zalopay(&CreatePaymentRequest { order_id })
            .await;
        let outcome = self
            .responses
            .interpret("create payment", result)
            .map(|dto| dto.into_domain(order_id));
        self.responses.finish(Access::Authenticated, outcome).await
    }

    async fn payment_status(&self, order_id: i64) -> Resource<PaymentStatus> {
        let result = self.service.payment_status(order_id).await;
        let outcome = self
            .responses
            .interpret("check payment status", result)
            .map(|dto| dto.into_domain(order_id));
        self.responses.finish(Access::Authenticated, outcome).await
    }
}
