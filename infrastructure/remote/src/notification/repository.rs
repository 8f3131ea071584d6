use std::sync::Arc;

use async_trait::async_trait;

use business::domain::notification::model::Notification;
use business::domain::notification::repository::NotificationRepository;
use business::domain::resource::Resource;

use crate::endpoints::Access;
use crate::notification::dto::{DeviceTokenRequest, NotificationDto};
use crate::notification::service::NotificationService;
use crate::response::ResponseHandler;

pub struct NotificationRepositoryHttp {
    service: Arc<dyn NotificationService>,
    responses: Arc<ResponseHandler>,
}

impl NotificationRepositoryHttp {
    pub fn new(service: Arc<dyn NotificationService>, responses: Arc<ResponseHandler>) -> Self {
        Self { service, responses }
    }
}

#[async_trait]
impl NotificationRepository for NotificationRepositoryHttp {
    async fn my_notifications(&self) -> Resource<Vec<Notification>> {
        let result = self.service.notifications().await;
        let outcome = self
            .responses
            .interpret("load notifications", result)
            .map(|list| list.into_iter().map(NotificationDto::into_domain).collect());
        self.responses.finish(Access::Authenticated, outcome).await
    }

    async fn mark_as_read(&self, id: i64) -> Resource<()> {
        let result = self.service.mark_read(id).await;
        let outcome = self
            .responses
            .interpret_empty("mark notification as read", result);
        self.responses.finish(Access::Authenticated, outcome).await
    }

    async fn register_device_token(&self, token: &str) -> Resource<()> {
        let request = DeviceTokenRequest {
            token: token.to_string(),
        };
        let result = self.service.register_device_token(&request).await;
        let outcome = self
            .responses
            .interpret_empty("register device", result);
        self.responses.finish(Access::Authenticated, outcome).await
    }

    async fn remove_device_token(&self, token: &str) -> Resource<()> {
        let request = DeviceTokenRequest {
            token: token.to_string(),
        };
        let result = self.service.remove_device_token(&request).await;
        let outcome = self
            .responses
            .interpret_empty("unregister device", result);
        self.responses.finish(Access::Authenticated, outcome).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::{ApiResponse, ApiResult};
    use mockall::mock;
    use preferences::MemoryPreferenceStore;
    use serde_json::Value;

    mock! {
        pub Service {}

        #[async_trait]
        impl NotificationService for Service {
            async fn notifications(&self) -> ApiResult<Vec<NotificationDto>>;
            async fn mark_read(&self, id: i64) -> ApiResult<Value>;
            async fn register_device_token(&self, request: &DeviceTokenRequest) -> ApiResult<Value>;
            async fn remove_device_token(&self, request: &DeviceTokenRequest) -> ApiResult<Value>;
        }
    }

    fn repository(service: MockService) -> NotificationRepositoryHttp {
        NotificationRepositoryHttp::new(
            Arc::new(service),
            Arc::new(ResponseHandler::new(
                Arc::new(MemoryPreferenceStore::new()),
                1000,
            )),
        )
    }

    #[tokio::test]
    async fn should_succeed_when_mark_read_returns_no_payload() {
        let mut service = MockService::new();
        service
            .expect_mark_read()
            .withf(|id| *id == 4)
            .times(1)
            .returning(|_| Ok(ApiResponse::empty(200)));

        let result = repository(service).mark_as_read(4).await;

        assert_eq!(result, Resource::Success(()));
    }

    #[tokio::test]
    async fn should_send_token_in_body() {
        let mut service = MockService::new();
        service
            .expect_register_device_token()
            .withf(|request| request.token == "fcm-1")
            .times(1)
            .returning(|_| Ok(ApiResponse::ok(Value::Null)));

        let result = repository(service).register_device_token("fcm-1").await;

        assert!(result.is_success());
    }

    #[tokio::test]
    async fn should_map_notification_list() {
        let mut service = MockService::new();
        service.expect_notifications().returning(|| {
            Ok(ApiResponse::ok(vec![NotificationDto {
                id: 1,
                title: "Order confirmed".to_string(),
                body: "Order #88 was confirmed".to_string(),
                is_read: false,
                order_id: Some(88),
                created_at: None,
            }]))
        });

        let result = repository(service).my_notifications().await;

        assert_eq!(result.into_data().unwrap()[0].order_id, Some(88));
    }
}
