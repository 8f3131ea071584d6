use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::client::ApiClient;
use crate::endpoints::Endpoint;
use crate::envelope::ApiResult;
use crate::notification::dto::{DeviceTokenRequest, NotificationDto};

/// Calls answering with a payload the client ignores return `Value`.
#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn notifications(&self) -> ApiResult<Vec<NotificationDto>>;
    async fn mark_read(&self, id: i64) -> ApiResult<Value>;
    async fn register_device_token(&self, request: &DeviceTokenRequest) -> ApiResult<Value>;
    async fn remove_device_token(&self, request: &DeviceTokenRequest) -> ApiResult<Value>;
}

pub struct NotificationServiceHttp {
    client: Arc<ApiClient>,
}

impl NotificationServiceHttp {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NotificationService for NotificationServiceHttp {
    async fn notifications(&self) -> ApiResult<Vec<NotificationDto>> {
        self.client.call(Endpoint::notifications()).await
    }

    async fn mark_read(&self, id: i64) -> ApiResult<Value> {
        self.client.call(Endpoint::mark_notification_read(id)).await
    }

    async fn register_device_token(&self, request: &DeviceTokenRequest) -> ApiResult<Value> {
        self.client
            .call_with_body(Endpoint::register_device_token(), request)
            .await
    }

    async fn remove_device_token(&self, request: &DeviceTokenRequest) -> ApiResult<Value> {
        self.client
            .call_with_body(Endpoint::remove_device_token(), request)
            .await
    }
}
