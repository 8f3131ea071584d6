use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::repository::NotificationRepository;
use crate::domain::notification::use_cases::mark_read::{
    MarkNotificationReadParams, MarkNotificationReadUseCase,
};
use crate::domain::resource::Resource;

pub struct MarkNotificationReadUseCaseImpl {
    pub repository: Arc<dyn NotificationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl MarkNotificationReadUseCase for MarkNotificationReadUseCaseImpl {
    async fn execute(&self, params: MarkNotificationReadParams) -> Resource<()> {
        if params.id <= 0 {
            return Resource::error(NotificationError::InvalidId(params.id).to_string());
        }

        self.logger
            .debug(&format!("Marking notification {} as read", params.id));
        self.repository.mark_as_read(params.id).await
    }
}
