use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub is_read: bool,
    pub order_id: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}
