use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::model::LoginCredentials;
use crate::domain::auth::repository::AuthRepository;
use crate::domain::auth::use_cases::resolve_start::ResolveStartUseCase;
use crate::domain::errors::StorageError;
use crate::domain::logger::Logger;
use crate::domain::resource::Resource;
use crate::domain::session::model::StartDestination;
use crate::domain::session::store::PreferenceStore;

pub struct ResolveStartUseCaseImpl {
    pub preferences: Arc<dyn PreferenceStore>,
    pub repository: Arc<dyn AuthRepository>,
    pub logger: Arc<dyn Logger>,
}

impl ResolveStartUseCaseImpl {
    async fn resolve(&self) -> Result<StartDestination, StorageError> {
        if self.preferences.is_first_launch().await? {
            return Ok(StartDestination::Onboarding);
        }
        if self.preferences.access_token().await?.is_some() {
            return Ok(StartDestination::Home);
        }

        let Some(saved) = self.preferences.saved_credentials().await? else {
            return Ok(StartDestination::Login);
        };
        let Ok(credentials) = LoginCredentials::new(saved.phone_number, saved.password) else {
            return Ok(StartDestination::Login);
        };

        self.logger.info("Restoring session from saved credentials");
        match self.repository.login(&credentials, true).await {
            Resource::Success(_) => Ok(StartDestination::Home),
            other => {
                self.logger.warn(&format!(
                    "Silent login failed: {}",
                    other.message().unwrap_or("unknown")
                ));
                Ok(StartDestination::Login)
            }
        }
    }
}

#[async_trait]
impl ResolveStartUseCase for ResolveStartUseCaseImpl {
    async fn execute(&self) -> Resource<StartDestination> {
        let destination = self.resolve().await;
        if let Ok(destination) = &destination {
            self.logger
                .debug(&format!("Start destination: {}", destination));
        }
        destination.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::model::Registration;
    use crate::domain::session::model::{SavedCredentials, Session};
    use crate::domain::user::model::UserProfile;
    use mockall::mock;

    mock! {
        pub AuthRepo {}

        #[async_trait]
        impl AuthRepository for AuthRepo {
            async fn login(&self, credentials: &LoginCredentials, remember: bool) -> Resource<Session>;
            async fn register(&self, registration: &Registration) -> Resource<UserProfile>;
            async fn logout(&self) -> Resource<()>;
        }
    }

    mock! {
        pub Prefs {}

        #[async_trait]
        impl PreferenceStore for Prefs {
            async fn access_token(&self) -> Result<Option<String>, StorageError>;
            async fn save_access_token(&self, token: &str) -> Result<(), StorageError>;
            async fn clear_access_token(&self) -> Result<(), StorageError>;
            async fn saved_credentials(&self) -> Result<Option<SavedCredentials>, StorageError>;
            async fn save_credentials(&self, credentials: &SavedCredentials) -> Result<(), StorageError>;
            async fn clear_credentials(&self) -> Result<(), StorageError>;
            async fn is_first_launch(&self) -> Result<bool, StorageError>;
            async fn set_first_launch(&self, first_launch: bool) -> Result<(), StorageError>;
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

    fn use_case(prefs: MockPrefs, repo: MockAuthRepo) -> ResolveStartUseCaseImpl {
        ResolveStartUseCaseImpl {
            preferences: Arc::new(prefs),
            repository: Arc::new(repo),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_go_to_onboarding_on_first_launch() {
        let mut prefs = MockPrefs::new();
        prefs.expect_is_first_launch().returning(|| Ok(true));

        let result = use_case(prefs, MockAuthRepo::new()).execute().await;

        assert_eq!(result, Resource::Success(StartDestination::Onboarding));
    }

    #[tokio::test]
    async fn should_go_home_when_token_stored() {
        let mut prefs = MockPrefs::new();
        prefs.expect_is_first_launch().returning(|| Ok(false));
        prefs
            .expect_access_token()
            .returning(|| Ok(Some("jwt".to_string())));
        let mut repo = MockAuthRepo::new();
        repo.expect_login().times(0);

        let result = use_case(prefs, repo).execute().await;

        assert_eq!(result, Resource::Success(StartDestination::Home));
    }

    #[tokio::test]
    async fn should_restore_session_silently_from_saved_credentials() {
        let mut prefs = MockPrefs::new();
        prefs.expect_is_first_launch().returning(|| Ok(false));
        prefs.expect_access_token().returning(|| Ok(None));
        prefs.expect_saved_credentials().returning(|| {
            Ok(Some(SavedCredentials {
                phone_number: "0912345678".to_string(),
                password: "pw".to_string(),
            }))
        });
        let mut repo = MockAuthRepo::new();
        repo.expect_login().times(1).returning(|_, _| {
            Resource::Success(Session {
                token: "fresh".to_string(),
                credentials: None,
            })
        });

        let result = use_case(prefs, repo).execute().await;

        assert_eq!(result, Resource::Success(StartDestination::Home));
    }

    #[tokio::test]
    async fn should_go_to_login_when_silent_login_fails() {
        let mut prefs = MockPrefs::new();
        prefs.expect_is_first_launch().returning(|| Ok(false));
        prefs.expect_access_token().returning(|| Ok(None));
        prefs.expect_saved_credentials().returning(|| {
            Ok(Some(SavedCredentials {
                phone_number: "0912345678".to_string(),
                password: "old".to_string(),
            }))
        });
        let mut repo = MockAuthRepo::new();
        repo.expect_login()
            .returning(|_, _| Resource::error("Incorrect phone number or password."));

        let result = use_case(prefs, repo).execute().await;

        assert_eq!(result, Resource::Success(StartDestination::Login));
    }

    #[tokio::test]
    async fn should_report_storage_failure() {
        let mut prefs = MockPrefs::new();
        prefs
            .expect_is_first_launch()
            .returning(|| Err(StorageError::Io("permission denied".to_string())));

        let result = use_case(prefs, MockAuthRepo::new()).execute().await;

        assert_eq!(
            result.message(),
            Some("Could not access local storage: permission denied")
        );
    }
}
