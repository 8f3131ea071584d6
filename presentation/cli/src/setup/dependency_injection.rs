use std::sync::Arc;

use logger::TracingLogger;
use preferences::{
    FilePreferenceStore, FileSearchHistoryStore, MemoryPreferenceStore, MemorySearchHistoryStore,
};
use remote::auth::repository::AuthRepositoryHttp;
use remote::auth::service::AuthServiceHttp;
use remote::cart::repository::CartRepositoryHttp;
use remote::cart::service::CartServiceHttp;
use remote::client::ApiClient;
use remote::notification::repository::NotificationRepositoryHttp;
use remote::notification::service::NotificationServiceHttp;
use remote::order::repository::OrderRepositoryHttp;
use remote::payment::repository::PaymentRepositoryHttp;
use remote::payment::service::PaymentServiceHttp;
use remote::product::repository::ProductRepositoryHttp;
use remote::product::service::ProductServiceHttp;
use remote::response::ResponseHandler;
use remote::user::repository::UserRepositoryHttp;
use remote::user::service::UserServiceHttp;

use business::application::auth::complete_onboarding::CompleteOnboardingUseCaseImpl;
use business::application::auth::login::LoginUseCaseImpl;
use business::application::auth::logout::LogoutUseCaseImpl;
use business::application::auth::register::RegisterUseCaseImpl;
use business::application::auth::resolve_start::ResolveStartUseCaseImpl;
use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::get_cart::GetCartUseCaseImpl;
use business::application::notification::device_token::{
    RegisterDeviceTokenUseCaseImpl, RemoveDeviceTokenUseCaseImpl,
};
use business::application::notification::get_all::GetNotificationsUseCaseImpl;
use business::application::notification::mark_read::MarkNotificationReadUseCaseImpl;
use business::application::order::get_mine::GetMyOrdersUseCaseImpl;
use business::application::order::place::PlaceOrderUseCaseImpl;
use business::application::payment::create::CreatePaymentUseCaseImpl;
use business::application::payment::get_status::GetPaymentStatusUseCaseImpl;
use business::application::product::get_by_id::GetProductDetailUseCaseImpl;
use business::application::product::get_home::GetHomeProductsUseCaseImpl;
use business::application::product::recent_searches::{
    ClearRecentSearchesUseCaseImpl, GetRecentSearchesUseCaseImpl,
};
use business::application::product::search::SearchProductsUseCaseImpl;
use business::application::user::get_profile::GetProfileUseCaseImpl;
use business::application::user::update_profile::UpdateProfileUseCaseImpl;
use business::domain::session::store::{PreferenceStore, SearchHistoryStore};

use view_models::auth::AuthViewModel;
use view_models::cart::CartViewModel;
use view_models::message_bus::MessageBus;
use view_models::notification::NotificationViewModel;
use view_models::payment::PaymentViewModel;
use view_models::product::ProductViewModel;
use view_models::profile::ProfileViewModel;

use crate::config::app_config::AppConfig;

/// Owns every view-model. The preference store and the message bus are
/// created once here and shared by everything below.
pub struct DependencyContainer {
    pub bus: MessageBus,
    pub auth: AuthViewModel,
    pub products: ProductViewModel,
    pub cart: CartViewModel,
    pub payment: PaymentViewModel,
    pub profile: ProfileViewModel,
    pub notifications: NotificationViewModel,
}

impl DependencyContainer {
    /// `ephemeral` keeps the session in memory instead of the data directory.
    pub async fn new(config: &AppConfig, ephemeral: bool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let bus = MessageBus::default();

        // Local stores
        let preferences: Arc<dyn PreferenceStore>;
        let history: Arc<dyn SearchHistoryStore>;
        if ephemeral {
            preferences = Arc::new(MemoryPreferenceStore::new());
            history = Arc::new(MemorySearchHistoryStore::new());
        } else {
            preferences = Arc::new(FilePreferenceStore::open(config.storage.preferences_path()).await?);
            history =
                Arc::new(FileSearchHistoryStore::open(config.storage.search_history_path()).await?);
        }

        // Infrastructure adapters
        let client = Arc::new(ApiClient::new(
            &config.api.client_config()?,
            preferences.clone(),
        )?);
        let responses = Arc::new(ResponseHandler::new(
            preferences.clone(),
            config.api.success_code,
        ));

        let cart_service = Arc::new(CartServiceHttp::new(client.clone()));
        let auth_repository = Arc::new(AuthRepositoryHttp::new(
            Arc::new(AuthServiceHttp::new(client.clone())),
            preferences.clone(),
            responses.clone(),
        ));
        let product_repository = Arc::new(ProductRepositoryHttp::new(
            Arc::new(ProductServiceHttp::new(client.clone())),
            responses.clone(),
        ));
        let cart_repository = Arc::new(CartRepositoryHttp::new(
            cart_service.clone(),
            responses.clone(),
        ));
        let order_repository = Arc::new(OrderRepositoryHttp::new(cart_service, responses.clone()));
        let payment_repository = Arc::new(PaymentRepositoryHttp::new(
            Arc::new(PaymentServiceHttp::new(client.clone())),
            responses.clone(),
        ));
        let user_repository = Arc::new(UserRepositoryHttp::new(
            Arc::new(UserServiceHttp::new(client.clone())),
            responses.clone(),
        ));
        let notification_repository = Arc::new(NotificationRepositoryHttp::new(
            Arc::new(NotificationServiceHttp::new(client)),
            responses,
        ));

        // Auth
        let auth = AuthViewModel::new(
            Arc::new(LoginUseCaseImpl {
                repository: auth_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(RegisterUseCaseImpl {
                repository: auth_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(LogoutUseCaseImpl {
                repository: auth_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(ResolveStartUseCaseImpl {
                preferences: preferences.clone(),
                repository: auth_repository,
                logger: logger.clone(),
            }),
            Arc::new(CompleteOnboardingUseCaseImpl {
                preferences,
                logger: logger.clone(),
            }),
            bus.clone(),
        );

        // Catalog
        let products = ProductViewModel::new(
            Arc::new(GetHomeProductsUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetProductDetailUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(SearchProductsUseCaseImpl {
                repository: product_repository,
                history: history.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetRecentSearchesUseCaseImpl {
                history: history.clone(),
                logger: logger.clone(),
            }),
            Arc::new(ClearRecentSearchesUseCaseImpl {
                history,
                logger: logger.clone(),
            }),
            bus.clone(),
        );

        // Cart and orders
        let cart = CartViewModel::new(
            Arc::new(AddCartItemUseCaseImpl {
                repository: cart_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetCartUseCaseImpl {
                repository: cart_repository,
                logger: logger.clone(),
            }),
            Arc::new(PlaceOrderUseCaseImpl {
                repository: order_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetMyOrdersUseCaseImpl {
                repository: order_repository,
                logger: logger.clone(),
            }),
            bus.clone(),
        );

        // Payment
        let payment = PaymentViewModel::new(
            Arc::new(CreatePaymentUseCaseImpl {
                repository: payment_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetPaymentStatusUseCaseImpl {
                repository: payment_repository,
                logger: logger.clone(),
            }),
            config.payment.policy(),
            bus.clone(),
        );

        // Profile
        let profile = ProfileViewModel::new(
            Arc::new(GetProfileUseCaseImpl {
                repository: user_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateProfileUseCaseImpl {
                repository: user_repository,
                logger: logger.clone(),
            }),
            bus.clone(),
        );

        // Notifications
        let notifications = NotificationViewModel::new(
            Arc::new(GetNotificationsUseCaseImpl {
                repository: notification_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(MarkNotificationReadUseCaseImpl {
                repository: notification_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(RegisterDeviceTokenUseCaseImpl {
                repository: notification_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(RemoveDeviceTokenUseCaseImpl {
                repository: notification_repository,
                logger,
            }),
            bus.clone(),
        );

        Ok(Self {
            bus,
            auth,
            products,
            cart,
            payment,
            profile,
            notifications,
        })
    }
}
