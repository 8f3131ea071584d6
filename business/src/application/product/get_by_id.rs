use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductDetail;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{
    GetProductDetailParams, GetProductDetailUseCase,
};
use crate::domain::resource::Resource;

pub struct GetProductDetailUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductDetailUseCase for GetProductDetailUseCaseImpl {
    async fn execute(&self, params: GetProductDetailParams) -> Resource<ProductDetail> {
        if params.id <= 0 {
            return Resource::error(ProductError::InvalidId(params.id).to_string());
        }

        self.logger
            .info(&format!("Fetching product by id: {}", params.id));
        self.repository.product_detail(params.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::ProductSummary;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn home_products(&self) -> Resource<Vec<ProductSummary>>;
            async fn product_detail(&self, id: i64) -> Resource<ProductDetail>;
            async fn search(&self, keyword: &str) -> Resource<Vec<ProductSummary>>;
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
    async fn should_return_product_when_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_product_detail()
            .with(eq(5))
            .times(1)
            .returning(|id| {
                Resource::Success(ProductDetail {
                    id,
                    name: "Galaxy S24".to_string(),
                    description: None,
                    brand: Some("Samsung".to_string()),
                    images: vec![],
                    attributes: vec![],
                })
            });

        let use_case = GetProductDetailUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetProductDetailParams { id: 5 }).await;

        assert_eq!(result.data().map(|p| p.name.as_str()), Some("Galaxy S24"));
    }

    #[tokio::test]
    async fn should_pass_not_found_through() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_product_detail().returning(|_| {
            Resource::error("Could not load product: the requested item was not found.")
        });

        let use_case = GetProductDetailUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetProductDetailParams { id: 404 }).await;

        assert!(result.is_error());
    }

    #[tokio::test]
    async fn should_reject_zero_id() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_product_detail().times(0);

        let use_case = GetProductDetailUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetProductDetailParams { id: 0 }).await;

        assert_eq!(result.message(), Some("Invalid product id: 0"));
    }
}
