use async_trait::async_trait;

use crate::domain::resource::Resource;
use crate::domain::user::model::UserProfile;

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self) -> Resource<UserProfile>;
}
