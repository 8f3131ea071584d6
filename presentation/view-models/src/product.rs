use std::sync::Arc;

use tokio::sync::watch;

use business::domain::product::model::{ProductDetail, ProductSummary};
use business::domain::product::use_cases::get_by_id::{
    GetProductDetailParams, GetProductDetailUseCase,
};
use business::domain::product::use_cases::get_home::GetHomeProductsUseCase;
use business::domain::product::use_cases::recent_searches::{
    ClearRecentSearchesUseCase, GetRecentSearchesUseCase,
};
use business::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};
use business::domain::resource::Resource;

use crate::message_bus::MessageBus;
use crate::state::LoadState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductState {
    pub home: LoadState<Vec<ProductSummary>>,
    pub detail: LoadState<ProductDetail>,
    pub search_results: LoadState<Vec<ProductSummary>>,
    pub recent_searches: Vec<String>,
}

pub struct ProductViewModel {
    get_home: Arc<dyn GetHomeProductsUseCase>,
    get_detail: Arc<dyn GetProductDetailUseCase>,
    search: Arc<dyn SearchProductsUseCase>,
    get_recent: Arc<dyn GetRecentSearchesUseCase>,
    clear_recent: Arc<dyn ClearRecentSearchesUseCase>,
    bus: MessageBus,
    state: watch::Sender<ProductState>,
}

impl ProductViewModel {
    pub fn new(
        get_home: Arc<dyn GetHomeProductsUseCase>,
        get_detail: Arc<dyn GetProductDetailUseCase>,
        search: Arc<dyn SearchProductsUseCase>,
        get_recent: Arc<dyn GetRecentSearchesUseCase>,
        clear_recent: Arc<dyn ClearRecentSearchesUseCase>,
        bus: MessageBus,
    ) -> Self {
        Self {
            get_home,
            get_detail,
            search,
            get_recent,
            clear_recent,
            bus,
            state: watch::Sender::new(ProductState::default()),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ProductState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> ProductState {
        self.state.borrow().clone()
    }

    pub async fn load_home(&self) {
        self.state.send_modify(|s| s.home = LoadState::Loading);
        let result = self.get_home.execute().await;
        self.publish_error(&result);
        self.state.send_modify(|s| s.home = result.into());
    }

    pub async fn load_detail(&self, id: i64) {
        self.state.send_modify(|s| s.detail = LoadState::Loading);
        let result = self.get_detail.execute(GetProductDetailParams { id }).await;
        self.publish_error(&result);
        self.state.send_modify(|s| s.detail = result.into());
    }

    /// Runs the search and refreshes the recent-search list, which the search
    /// itself has just updated.
    pub async fn search(&self, keyword: &str) {
        self.state
            .send_modify(|s| s.search_results = LoadState::Loading);
        let result = self
            .search
            .execute(SearchProductsParams {
                keyword: keyword.to_string(),
            })
            .await;
        self.publish_error(&result);
        self.state.send_modify(|s| s.search_results = result.into());
        self.load_recent_searches().await;
    }

    pub async fn load_recent_searches(&self) {
        match self.get_recent.execute().await {
            Resource::Success(keywords) => {
                self.state.send_modify(|s| s.recent_searches = keywords)
            }
            other => self.publish_error(&other),
        }
    }

    pub async fn clear_recent_searches(&self) {
        match self.clear_recent.execute().await {
            Resource::Success(()) => self.state.send_modify(|s| s.recent_searches.clear()),
            other => self.publish_error(&other),
        }
    }

    fn publish_error<T>(&self, result: &Resource<T>) {
        if let Some(message) = result.message() {
            self.bus.error(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub Home {}

        #[async_trait]
        impl GetHomeProductsUseCase for Home {
            async fn execute(&self) -> Resource<Vec<ProductSummary>>;
        }
    }

    mock! {
        pub Detail {}

        #[async_trait]
        impl GetProductDetailUseCase for Detail {
            async fn execute(&self, params: GetProductDetailParams) -> Resource<ProductDetail>;
        }
    }

    mock! {
        pub Search {}

        #[async_trait]
        impl SearchProductsUseCase for Search {
            async fn execute(&self, params: SearchProductsParams) -> Resource<Vec<ProductSummary>>;
        }
    }

    mock! {
        pub Recent {}

        #[async_trait]
        impl GetRecentSearchesUseCase for Recent {
            async fn execute(&self) -> Resource<Vec<String>>;
        }
    }

    mock! {
        pub ClearRecent {}

        #[async_trait]
        impl ClearRecentSearchesUseCase for ClearRecent {
            async fn execute(&self) -> Resource<()>;
        }
    }

    fn summary(id: i64, name: &str) -> ProductSummary {
        ProductSummary {
            id,
            name: name.to_string(),
            image: None,
            price: 1000,
            brand: None,
        }
    }

    fn view_model(
        home: MockHome,
        search: MockSearch,
        recent: MockRecent,
        clear: MockClearRecent,
    ) -> ProductViewModel {
        ProductViewModel::new(
            Arc::new(home),
            Arc::new(MockDetail::new()),
            Arc::new(search),
            Arc::new(recent),
            Arc::new(clear),
            MessageBus::default(),
        )
    }

    #[tokio::test]
    async fn should_load_home_products() {
        let mut home = MockHome::new();
        home.expect_execute()
            .returning(|| Resource::Success(vec![summary(1, "iPhone 15")]));

        let vm = view_model(home, MockSearch::new(), MockRecent::new(), MockClearRecent::new());
        vm.load_home().await;

        assert_eq!(vm.state().home.data().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn should_refresh_recent_searches_after_search() {
        let mut search = MockSearch::new();
        search
            .expect_execute()
            .withf(|params| params.keyword == "iphone")
            .returning(|_| Resource::Success(vec![summary(1, "iPhone 15")]));
        let mut recent = MockRecent::new();
        recent
            .expect_execute()
            .times(1)
            .returning(|| Resource::Success(vec!["iphone".to_string(), "case".to_string()]));

        let vm = view_model(MockHome::new(), search, recent, MockClearRecent::new());
        vm.search("iphone").await;

        let state = vm.state();
        assert_eq!(state.search_results.data().map(Vec::len), Some(1));
        assert_eq!(state.recent_searches, vec!["iphone", "case"]);
    }

    #[tokio::test]
    async fn should_show_search_validation_error() {
        let mut search = MockSearch::new();
        search
            .expect_execute()
            .returning(|_| Resource::error("Please enter a search keyword."));
        let mut recent = MockRecent::new();
        recent.expect_execute().returning(|| Resource::Success(vec![]));

        let vm = view_model(MockHome::new(), search, recent, MockClearRecent::new());
        vm.search("   ").await;

        assert_eq!(
            vm.state().search_results.error(),
            Some("Please enter a search keyword.")
        );
    }

    #[tokio::test]
    async fn should_empty_recent_list_on_clear() {
        let mut clear = MockClearRecent::new();
        clear
            .expect_execute()
            .times(1)
            .returning(|| Resource::Success(()));

        let vm = view_model(MockHome::new(), MockSearch::new(), MockRecent::new(), clear);
        vm.state
            .send_modify(|s| s.recent_searches = vec!["case".to_string()]);
        vm.clear_recent_searches().await;

        assert!(vm.state().recent_searches.is_empty());
    }
}
