use async_trait::async_trait;

use crate::domain::resource::Resource;
use crate::domain::user::model::UserProfile;

pub struct RegisterParams {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

#[async_trait]
pub trait RegisterUseCase: Send + Sync {
    async fn execute(&self, params: RegisterParams) -> Resource<UserProfile>;
}
