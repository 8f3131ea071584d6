use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::model::LoginCredentials;
use crate::domain::auth::repository::AuthRepository;
use crate::domain::auth::use_cases::login::{LoginParams, LoginUseCase};
use crate::domain::logger::Logger;
use crate::domain::resource::Resource;
use crate::domain::session::model::Session;

pub struct LoginUseCaseImpl {
    pub repository: Arc<dyn AuthRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Resource<Session> {
        let credentials = match LoginCredentials::new(params.identifier, params.password) {
            Ok(credentials) => credentials,
            Err(err) => {
                self.logger.warn(&format!("Login rejected: {}", err));
                return Resource::error(err.to_string());
            }
        };

        self.logger
            .info(&format!("Logging in as: {}", credentials.identifier));

        let result = self.repository.login(&credentials, params.remember).await;
        if let Some(message) = result.message() {
            self.logger.warn(&format!("Login failed: {}", message));
        }
        result
    }
}
