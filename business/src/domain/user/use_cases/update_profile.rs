use async_trait::async_trait;

use crate::domain::resource::Resource;
use crate::domain::user::model::UserProfile;

#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParams {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub avatar: Option<String>,
    pub date_of_birth: Option<String>,
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProfileParams) -> Resource<UserProfile>;
}
