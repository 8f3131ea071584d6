#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NotificationError {
    #[error("Invalid notification id: {0}")]
    InvalidId(i64),
    #[error("Device token cannot be empty.")]
    DeviceTokenEmpty,
}
