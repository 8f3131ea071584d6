use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::notification::model::Notification;
use crate::domain::notification::repository::NotificationRepository;
use crate::domain::notification::use_cases::get_all::GetNotificationsUseCase;
use crate::domain::resource::Resource;

pub struct GetNotificationsUseCaseImpl {
    pub repository: Arc<dyn NotificationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetNotificationsUseCase for GetNotificationsUseCaseImpl {
    async fn execute(&self) -> Resource<Vec<Notification>> {
        self.logger.info("Fetching notifications");
        self.repository.my_notifications().await
    }
}
