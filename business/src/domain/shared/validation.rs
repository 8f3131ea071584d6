use regex::Regex;

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// 9 to 11 digits, optionally prefixed with `+`.
const PHONE_PATTERN: &str = r"^\+?[0-9]{9,11}$";

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn is_valid_email(value: &str) -> bool {
    Regex::new(EMAIL_PATTERN)
        .map(|re| re.is_match(value.trim()))
        .unwrap_or(false)
}

pub fn is_valid_phone(value: &str) -> bool {
    Regex::new(PHONE_PATTERN)
        .map(|re| re.is_match(value.trim()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_compile_validation_patterns() {
        assert!(Regex::new(EMAIL_PATTERN).is_ok());
        assert!(Regex::new(PHONE_PATTERN).is_ok());
    }

    #[test]
    fn should_treat_whitespace_as_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \t"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn should_accept_well_formed_email() {
        assert!(is_valid_email("buyer@shop.vn"));
        assert!(!is_valid_email("buyer@shop"));
        assert!(!is_valid_email("buyer shop.vn"));
    }

    #[test]
    fn should_accept_phone_with_nine_to_eleven_digits() {
        assert!(is_valid_phone("0912345678"));
        assert!(is_valid_phone("+84912345678"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("09123abc78"));
    }
}
