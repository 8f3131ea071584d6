use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::repository::NotificationRepository;
use crate::domain::notification::use_cases::device_token::{
    DeviceTokenParams, RegisterDeviceTokenUseCase, RemoveDeviceTokenUseCase,
};
use crate::domain::resource::Resource;
use crate::domain::shared::validation::is_blank;

pub struct RegisterDeviceTokenUseCaseImpl {
    pub repository: Arc<dyn NotificationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterDeviceTokenUseCase for RegisterDeviceTokenUseCaseImpl {
    async fn execute(&self, params: DeviceTokenParams) -> Resource<()> {
        if is_blank(&params.token) {
            return Resource::error(NotificationError::DeviceTokenEmpty.to_string());
        }

        self.logger.info("Registering device for push notifications");
        self.repository
            .register_device_token(params.token.trim())
            .await
    }
}

pub struct RemoveDeviceTokenUseCaseImpl {
    pub repository: Arc<dyn NotificationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveDeviceTokenUseCase for RemoveDeviceTokenUseCaseImpl {
    async fn execute(&self, params: DeviceTokenParams) -> Resource<()> {
        if is_blank(&params.token) {
            return Resource::error(NotificationError::DeviceTokenEmpty.to_string());
        }

        self.logger.info("Unregistering device from push notifications");
        self.repository.remove_device_token(params.token.trim()).await
    }
}
