use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::resource::Resource;
use crate::domain::user::model::{ProfileUpdate, UserProfile};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::update_profile::{UpdateProfileParams, UpdateProfileUseCase};

pub struct UpdateProfileUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProfileUseCase for UpdateProfileUseCaseImpl {
    async fn execute(&self, params: UpdateProfileParams) -> Resource<UserProfile> {
        let update = ProfileUpdate {
            full_name: params.full_name,
            phone_number: params.phone_number,
            address: params.address,
            avatar: params.avatar,
            date_of_birth: params.date_of_birth,
        };
        let update = match update.validated() {
            Ok(update) => update,
            Err(err) => return Resource::error(err.to_string()),
        };

        self.logger.info("Updating profile");
        self.repository.update_profile(&update).await
    }
}
