use async_trait::async_trait;

use crate::domain::resource::Resource;
use crate::domain::session::model::Session;

pub struct LoginParams {
    pub identifier: String,
    pub password: String,
    pub remember: bool,
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, params: LoginParams) -> Resource<Session>;
}
