use serde::{Deserialize, Serialize};

/// Order discriminant as sent on the wire: 0 for a purchase, 1 for a repair
/// request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    Purchase,
    Repair,
}

impl OrderType {
    pub fn code(self) -> i32 {
        match self {
            OrderType::Purchase => 0,
            OrderType::Repair => 1,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(OrderType::Purchase),
            1 => Some(OrderType::Repair),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderType::Purchase => write!(f, "purchase"),
            OrderType::Repair => write!(f, "repair"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_known_codes() {
        assert_eq!(OrderType::from_code(0), Some(OrderType::Purchase));
        assert_eq!(OrderType::from_code(1), Some(OrderType::Repair));
        assert_eq!(OrderType::Repair.code(), 1);
    }

    #[test]
    fn should_reject_unknown_code() {
        assert_eq!(OrderType::from_code(2), None);
        assert_eq!(OrderType::from_code(-1), None);
    }
}
