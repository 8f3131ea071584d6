use async_trait::async_trait;

use crate::domain::notification::model::Notification;
use crate::domain::resource::Resource;

#[async_trait]
pub trait GetNotificationsUseCase: Send + Sync {
    async fn execute(&self) -> Resource<Vec<Notification>>;
}
