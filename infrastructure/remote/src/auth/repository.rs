use std::sync::Arc;

use async_trait::async_trait;

use business::domain::auth::model::{LoginCredentials, Registration};
use business::domain::auth::repository::AuthRepository;
use business::domain::errors::RepositoryError;
use business::domain::resource::Resource;
use business::domain::session::model::{SavedCredentials, Session};
use business::domain::session::store::PreferenceStore;
use business::domain::user::model::UserProfile;

use crate::auth::dto::{LoginRequest, LoginResponseDto, RegisterRequest};
use crate::auth::service::AuthService;
use crate::endpoints::Access;
use crate::response::ResponseHandler;
use crate::user::dto::UserDto;

pub struct AuthRepositoryHttp {
    service: Arc<dyn AuthService>,
    preferences: Arc<dyn PreferenceStore>,
    responses: Arc<ResponseHandler>,
}

impl AuthRepositoryHttp {
    pub fn new(
        service: Arc<dyn AuthService>,
        preferences: Arc<dyn PreferenceStore>,
        responses: Arc<ResponseHandler>,
    ) -> Self {
        Self {
            service,
            preferences,
            responses,
        }
    }

    async fn store_session(
        &self,
        response: LoginResponseDto,
        credentials: &LoginCredentials,
        remember: bool,
    ) -> Result<Session, RepositoryError> {
        if response.token.trim().is_empty() {
            return Err(RepositoryError::empty_response("log in"));
        }

        // The token is written last: a failed credential write leaves no session.
        let stored = if remember {
            let saved = SavedCredentials {
                phone_number: credentials.identifier.clone(),
                password: credentials.password.clone(),
            };
            self.preferences
                .save_credentials(&saved)
                .await
                .map(|_| Some(saved))
        } else {
            self.preferences.clear_credentials().await.map(|_| None)
        };
        let saved = stored.map_err(|e| RepositoryError::unexpected(e.to_string()))?;

        self.preferences
            .save_access_token(&response.token)
            .await
            .map_err(|e| RepositoryError::unexpected(e.to_string()))?;

        Ok(Session {
            token: response.token,
            credentials: saved,
        })
    }
}

#[async_trait]
impl AuthRepository for AuthRepositoryHttp {
    async fn login(&self, credentials: &LoginCredentials, remember: bool) -> Resource<Session> {
        let result = self.service.login(&LoginRequest::from(credentials)).await;

        // A rejected login is a credential problem, not an expired session.
        let outcome = match self.responses.interpret("log in", result) {
            Err(RepositoryError::SessionExpired) => Err(RepositoryError::InvalidCredentials),
            Ok(response) if !response.authenticated => Err(RepositoryError::InvalidCredentials),
            other => other,
        };
        let outcome = match outcome {
            Ok(response) => self.store_session(response, credentials, remember).await,
            Err(err) => Err(err),
        };

        self.responses.finish(Access::Public, outcome).await
    }

    async fn register(&self, registration: &Registration) -> Resource<UserProfile> {
        let result = self
            .service
            .register(&RegisterRequest::from(registration))
            .await;
        let outcome = self
            .responses
            .interpret("create account", result)
            .map(UserDto::into_domain);
        self.responses.finish(Access::Public, outcome).await
    }

    async fn logout(&self) -> Resource<()> {
        let cleared = match self.preferences.clear_access_token().await {
            Ok(()) => self.preferences.clear_credentials().await,
            Err(err) => Err(err),
        };
        if cleared.is_ok() {
            tracing::info!("Local session cleared");
        }
        cleared.into()
    }
}
