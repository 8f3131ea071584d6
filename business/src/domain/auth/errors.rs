#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error("Please enter your phone number or email.")]
    IdentifierEmpty,
    #[error("Please enter your password.")]
    PasswordEmpty,
    #[error("Please enter your full name.")]
    FullNameEmpty,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
    #[error("Password must be at least {min} characters long.")]
    PasswordTooShort { min: usize },
}
