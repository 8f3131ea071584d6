#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PaymentError {
    #[error("Invalid order id: {0}")]
    InvalidOrderId(i64),
}
