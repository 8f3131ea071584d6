use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::dto::{LoginRequest, LoginResponseDto, RegisterRequest};
use crate::client::ApiClient;
use crate::endpoints::Endpoint;
use crate::envelope::ApiResult;
use crate::user::dto::UserDto;

#[async_trait]
pub trait AuthService: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponseDto>;
    async fn register(&self, request: &RegisterRequest) -> ApiResult<UserDto>;
}

pub struct AuthServiceHttp {
    client: Arc<ApiClient>,
}

impl AuthServiceHttp {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthService for AuthServiceHttp {
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponseDto> {
        self.client.call_with_body(Endpoint::login(), request).await
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<UserDto> {
        self.client.call_with_body(Endpoint::register(), request).await
    }
}
