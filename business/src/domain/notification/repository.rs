use async_trait::async_trait;

use super::model::Notification;
use crate::domain::resource::Resource;

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn my_notifications(&self) -> Resource<Vec<Notification>>;
    async fn mark_as_read(&self, id: i64) -> Resource<()>;
    async fn register_device_token(&self, token: &str) -> Resource<()>;
    async fn remove_device_token(&self, token: &str) -> Resource<()>;
}
