use serde::{Deserialize, Serialize};

use business::domain::auth::model::{LoginCredentials, Registration};

/// The identifier goes in `email` when it looks like one, else in `phoneNumber`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub password: String,
}

impl From<&LoginCredentials> for LoginRequest {
    fn from(credentials: &LoginCredentials) -> Self {
        let (phone_number, email) = if credentials.is_email() {
            (None, Some(credentials.identifier.clone()))
        } else {
            (Some(credentials.identifier.clone()), None)
        };
        Self {
            phone_number,
            email,
            password: credentials.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponseDto {
    pub token: String,
    #[serde(default)]
    pub authenticated: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

impl From<&Registration> for RegisterRequest {
    fn from(registration: &Registration) -> Self {
        Self {
            full_name: registration.full_name.clone(),
            email: registration.email.clone(),
            phone_number: registration.phone_number.clone(),
            password: registration.password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_send_phone_identifier_as_phone_number() {
        let credentials =
            LoginCredentials::new("0912345678".to_string(), "pw".to_string()).unwrap();

        let body = serde_json::to_value(LoginRequest::from(&credentials)).unwrap();

        assert_eq!(body, json!({"phoneNumber": "0912345678", "password": "pw"}));
    }

    #[test]
    fn should_send_email_identifier_as_email() {
        let credentials =
            LoginCredentials::new("a@shop.vn".to_string(), "pw".to_string()).unwrap();

        let body = serde_json::to_value(LoginRequest::from(&credentials)).unwrap();

        assert_eq!(body, json!({"email": "a@shop.vn", "password": "pw"}));
    }
}
