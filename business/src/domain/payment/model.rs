/// Payment session opened with the ZaloPay gateway for an order.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentOrder {
    pub order_id: i64,
    pub order_url: String,
    pub app_trans_id: Option<String>,
    pub zp_trans_token: Option<String>,
}

/// Interpretation of the numeric payment status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentState {
    Pending,
    Paid,
    /// Any other code reported by the backend; treated as final.
    Other(i32),
}

impl PaymentState {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => PaymentState::Pending,
            1 => PaymentState::Paid,
            other => PaymentState::Other(other),
        }
    }

    pub fn is_final(self) -> bool {
        !matches!(self, PaymentState::Pending)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentStatus {
    pub order_id: i64,
    pub status: i32,
    pub message: Option<String>,
}

impl PaymentStatus {
    pub fn state(&self) -> PaymentState {
        PaymentState::from_code(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_interpret_status_codes() {
        assert_eq!(PaymentState::from_code(0), PaymentState::Pending);
        assert_eq!(PaymentState::from_code(1), PaymentState::Paid);
        assert_eq!(PaymentState::from_code(-2), PaymentState::Other(-2));
    }

    #[test]
    fn should_only_keep_pending_open() {
        assert!(!PaymentState::Pending.is_final());
        assert!(PaymentState::Paid.is_final());
        assert!(PaymentState::Other(2).is_final());
    }
}
