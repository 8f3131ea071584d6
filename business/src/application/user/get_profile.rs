use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::resource::Resource;
use crate::domain::user::model::UserProfile;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_profile::GetProfileUseCase;

pub struct GetProfileUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProfileUseCase for GetProfileUseCaseImpl {
    async fn execute(&self) -> Resource<UserProfile> {
        self.logger.info("Fetching profile");
        self.repository.my_profile().await
    }
}
