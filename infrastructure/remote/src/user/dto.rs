use serde::{Deserialize, Serialize};

use business::domain::user::model::{ProfileUpdate, UserProfile};
use business::domain::user::value_objects::Role;

use crate::serde_helpers::id_as_string;

/// Role as sent by the backend: either a bare name or `{ "name": ... }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RoleDto {
    Name(String),
    Object { name: String },
}

impl RoleDto {
    pub fn name(&self) -> &str {
        match self {
            RoleDto::Name(name) => name,
            RoleDto::Object { name } => name,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub avatar: Option<String>,
    #[serde(alias = "dob")]
    pub date_of_birth: Option<String>,
    pub roles: Option<Vec<RoleDto>>,
}

impl UserDto {
    pub fn into_domain(self) -> UserProfile {
        let role_names: Option<Vec<&str>> = self
            .roles
            .as_ref()
            .map(|roles| roles.iter().map(RoleDto::name).collect());
        let roles = Role::from_server_list(role_names.as_deref());

        UserProfile {
            id: self.id,
            email: self.email,
            full_name: self.full_name,
            phone_number: self.phone_number,
            address: self.address,
            avatar: self.avatar,
            date_of_birth: self.date_of_birth,
            roles,
        }
    }
}

/// Partial profile update; absent fields are left unchanged by the server.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
}

impl From<&ProfileUpdate> for UpdateProfileRequest {
    fn from(update: &ProfileUpdate) -> Self {
        Self {
            full_name: update.full_name.clone(),
            phone_number: update.phone_number.clone(),
            address: update.address.clone(),
            avatar: update.avatar.clone(),
            dob: update.date_of_birth.clone(),
        }
    }
}
