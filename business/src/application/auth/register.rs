use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::model::{NewRegistrationProps, Registration};
use crate::domain::auth::repository::AuthRepository;
use crate::domain::auth::use_cases::register::{RegisterParams, RegisterUseCase};
use crate::domain::logger::Logger;
use crate::domain::resource::Resource;
use crate::domain::user::model::UserProfile;

pub struct RegisterUseCaseImpl {
    pub repository: Arc<dyn AuthRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUseCase for RegisterUseCaseImpl {
    async fn execute(&self, params: RegisterParams) -> Resource<UserProfile> {
        let registration = match Registration::new(NewRegistrationProps {
            full_name: params.full_name,
            email: params.email,
            phone_number: params.phone_number,
            password: params.password,
        }) {
            Ok(registration) => registration,
            Err(err) => return Resource::error(err.to_string()),
        };

        self.logger
            .info(&format!("Registering account: {}", registration.email));
        self.repository.register(&registration).await
    }
}
