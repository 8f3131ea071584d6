use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::notification::model::Notification;

use crate::serde_helpers::optional_timestamp;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "content", alias = "message")]
    pub body: String,
    #[serde(default, alias = "read")]
    pub is_read: bool,
    pub order_id: Option<i64>,
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl NotificationDto {
    pub fn into_domain(self) -> Notification {
        Notification {
            id: self.id,
            title: self.title,
            body: self.body,
            is_read: self.is_read,
            order_id: self.order_id,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeviceTokenRequest {
    pub token: String,
}
