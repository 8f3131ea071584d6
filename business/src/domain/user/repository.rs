use async_trait::async_trait;

use super::model::{ProfileUpdate, UserProfile};
use crate::domain::resource::Resource;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn my_profile(&self) -> Resource<UserProfile>;
    async fn update_profile(&self, update: &ProfileUpdate) -> Resource<UserProfile>;
}
