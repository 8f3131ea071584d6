use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::resource::Resource;

pub struct AddCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Resource<CartItem> {
        if params.product_att_id <= 0 {
            return Resource::error(CartError::InvalidAttribute.to_string());
        }

        self.logger.info(&format!(
            "Adding product attribute {} to cart",
            params.product_att_id
        ));
        self.repository.add_item(params.product_att_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::Cart;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn add_item(&self, product_att_id: i64) -> Resource<CartItem>;
            async fn view_cart(&self) -> Resource<Cart>;
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
    async fn should_add_item_when_attribute_valid() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_add_item()
            .with(eq(42))
            .times(1)
            .returning(|att_id| {
                Resource::Success(CartItem {
                    id: 7,
                    product_att_id: att_id,
                    product_name: "iPhone 15".to_string(),
                    color: Some("Black".to_string()),
                    image: None,
                    price: 20_000_000,
                    quantity: 1,
                })
            });

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams { product_att_id: 42 })
            .await;

        assert_eq!(result.data().map(|item| item.id), Some(7));
    }

    #[tokio::test]
    async fn should_reject_non_positive_attribute_without_calling_repository() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_add_item().times(0);

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams { product_att_id: 0 })
            .await;

        assert!(result.is_error());
    }
}
