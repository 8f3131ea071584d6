use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::payment::errors::PaymentError;
use crate::domain::payment::model::PaymentOrder;
use crate::domain::payment::repository::PaymentRepository;
use crate::domain::payment::use_cases::create::{CreatePaymentParams, CreatePaymentUseCase};
use crate::domain::resource::Resource;

pub struct CreatePaymentUseCaseImpl {
    pub repository: Arc<dyn PaymentRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreatePaymentUseCase for CreatePaymentUseCaseImpl {
    async fn execute(&self, params: CreatePaymentParams) -> Resource<PaymentOrder> {
        if params.order_id <= 0 {
            return Resource::error(PaymentError::InvalidOrderId(params.order_id).to_string());
        }

        self.logger
            .info(&format!("Creating payment for order {}", params.order_id));
        self.repository.create_payment(params.order_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::model::PaymentStatus;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub PaymentRepo {}

        #[async_trait]
        impl PaymentRepository for PaymentRepo {
            async fn create_payment(&self, order_id: i64) -> Resource<PaymentOrder>;
            async fn payment_status(&self, order_id: i64) -> Resource<PaymentStatus>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_create_payment_for_valid_order() {
        let mut mock_repo = MockPaymentRepo::new();
        mock_repo
            .expect_create_payment()
            .with(eq(12))
            .times(1)
            .returning(|order_id| {
                Resource::Success(PaymentOrder {
                    order_id,
                    order_url: "https://sb-openapi.zalopay.vn/pay/abc".to_string(),
                    app_trans_id: Some("241017_12".to_string()),
                    zp_trans_token: None,
                })
            });

        let use_case = CreatePaymentUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(CreatePaymentParams { order_id: 12 }).await;

        assert!(result.is_success());
    }

    #[tokio::test]
    async fn should_reject_non_positive_order_id() {
        let mut mock_repo = MockPaymentRepo::new();
        mock_repo.expect_create_payment().times(0);

        let use_case = CreatePaymentUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(CreatePaymentParams { order_id: -1 }).await;

        assert_eq!(result.message(), Some("Invalid order id: -1"));
    }
}
