use std::sync::Arc;

use async_trait::async_trait;

use crate::client::ApiClient;
use crate::endpoints::Endpoint;
use crate::envelope::ApiResult;
use crate::user::dto::{UpdateProfileRequest, UserDto};

#[async_trait]
pub trait UserService: Send + Sync {
    async fn my_info(&self) -> ApiResult<UserDto>;
    async fn update_profile(&self, request: &UpdateProfileRequest) -> ApiResult<UserDto>;
}

pub struct UserServiceHttp {
    client: Arc<ApiClient>,
}

impl UserServiceHttp {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserService for UserServiceHttp {
    async fn my_info(&self) -> ApiResult<UserDto> {
        self.client.call(Endpoint::my_info()).await
    }

    async fn update_profile(&self, request: &UpdateProfileRequest) -> ApiResult<UserDto> {
        self.client
            .call_with_body(Endpoint::update_profile(), request)
            .await
    }
}
