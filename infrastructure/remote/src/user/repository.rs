use std::sync::Arc;

use async_trait::async_trait;

use business::domain::resource::Resource;
use business::domain::user::model::{ProfileUpdate, UserProfile};
use business::domain::user::repository::UserRepository;

use crate::endpoints::Access;
use crate::response::ResponseHandler;
use crate::user::dto::{UpdateProfileRequest, UserDto};
use crate::user::service::UserService;

pub struct UserRepositoryHttp {
    service: Arc<dyn UserService>,
    responses: Arc<ResponseHandler>,
}

impl UserRepositoryHttp {
    pub fn new(service: Arc<dyn UserService>, responses: Arc<ResponseHandler>) -> Self {
        Self { service, responses }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryHttp {
    async fn my_profile(&self) -> Resource<UserProfile> {
        let result = self.service.my_info().await;
        let outcome = self
            .responses
            .interpret("load profile", result)
            .map(UserDto::into_domain);
        self.responses.finish(Access::Authenticated, outcome).await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Resource<UserProfile> {
        let result = self
            .service
            .update_profile(&UpdateProfileRequest::from(update))
            .await;
        let outcome = self
            .responses
            .interpret("update profile", result)
            .map(UserDto::into_domain);
        self.responses.finish(Access::Authenticated, outcome).await
    }
}
