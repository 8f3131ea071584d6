use super::errors::AuthError;
use crate::domain::shared::validation::{is_blank, is_valid_email, is_valid_phone};

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Phone number or email plus password, as typed on the login screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub identifier: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(identifier: String, password: String) -> Result<Self, AuthError> {
        if is_blank(&identifier) {
            return Err(AuthError::IdentifierEmpty);
        }
        if is_blank(&password) {
            return Err(AuthError::PasswordEmpty);
        }

        Ok(Self {
            identifier: identifier.trim().to_string(),
            password,
        })
    }

    pub fn is_email(&self) -> bool {
        self.identifier.contains('@')
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

pub struct NewRegistrationProps {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

impl Registration {
    pub fn new(props: NewRegistrationProps) -> Result<Self, AuthError> {
        if is_blank(&props.full_name) {
            return Err(AuthError::FullNameEmpty);
        }
        if !is_valid_email(&props.email) {
            return Err(AuthError::InvalidEmail);
        }
        if !is_valid_phone(&props.phone_number) {
            return Err(AuthError::InvalidPhone);
        }
        if props.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }

        Ok(Self {
            full_name: props.full_name.trim().to_string(),
            email: props.email.trim().to_string(),
            phone_number: props.phone_number.trim().to_string(),
            password: props.password,
        })
    }
}
