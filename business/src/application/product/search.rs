use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductSummary;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};
use crate::domain::resource::Resource;
use crate::domain::session::store::SearchHistoryStore;

pub struct SearchProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub history: Arc<dyn SearchHistoryStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, params: SearchProductsParams) -> Resource<Vec<ProductSummary>> {
        let keyword = params.keyword.trim();
        if keyword.is_empty() {
            return Resource::error(ProductError::KeywordEmpty.to_string());
        }

        // History is best effort: a storage failure must not block the search.
        if let Err(err) = self.history.record(keyword).await {
            self.logger
                .warn(&format!("Could not record search keyword: {}", err));
        }

        self.logger
            .info(&format!("Searching products for: {}", keyword));
        self.repository.search(keyword).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::StorageError;
    use crate::domain::product::model::ProductDetail;
    use mockall::mock;

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
        pub History {}

        #[async_trait]
        impl SearchHistoryStore for History {
            async fn recent(&self) -> Result<Vec<String>, StorageError>;
            async fn record(&self, keyword: &str) -> Result<(), StorageError>;
            async fn clear(&self) -> Result<(), StorageError>;
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
    async fn should_record_trimmed_keyword_then_search() {
        let mut history = MockHistory::new();
        history
            .expect_record()
            .withf(|keyword| keyword == "iphone")
            .times(1)
            .returning(|_| Ok(()));
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_search()
            .withf(|keyword| keyword == "iphone")
            .times(1)
            .returning(|_| Resource::Success(vec![]));

        let use_case = SearchProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            history: Arc::new(history),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SearchProductsParams {
                keyword: "  iphone ".to_string(),
            })
            .await;

        assert!(result.is_success());
    }

    #[tokio::test]
    async fn should_search_even_when_history_write_fails() {
        let mut history = MockHistory::new();
        history
            .expect_record()
            .returning(|_| Err(StorageError::Io("disk full".to_string())));
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_search()
            .times(1)
            .returning(|_| Resource::Success(vec![]));

        let use_case = SearchProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            history: Arc::new(history),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SearchProductsParams {
                keyword: "case".to_string(),
            })
            .await;

        assert!(result.is_success());
    }

    #[tokio::test]
    async fn should_reject_blank_keyword_without_side_effects() {
        let mut history = MockHistory::new();
        history.expect_record().times(0);
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_search().times(0);

        let use_case = SearchProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            history: Arc::new(history),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SearchProductsParams {
                keyword: "   ".to_string(),
            })
            .await;

        assert_eq!(result.message(), Some("Please enter a search keyword."));
    }
}
