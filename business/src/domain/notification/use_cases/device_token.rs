use async_trait::async_trait;

use crate::domain::resource::Resource;

pub struct DeviceTokenParams {
    pub token: String,
}

#[async_trait]
pub trait RegisterDeviceTokenUseCase: Send + Sync {
    async fn execute(&self, params: DeviceTokenParams) -> Resource<()>;
}

#[async_trait]
pub trait RemoveDeviceTokenUseCase: Send + Sync {
    async fn execute(&self, params: DeviceTokenParams) -> Resource<()>;
}
