use super::errors::UserError;
use super::value_objects::Role;
use crate::domain::shared::validation::{is_blank, is_valid_phone};

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub avatar: Option<String>,
    pub date_of_birth: Option<String>,
    pub roles: Vec<Role>,
}

impl UserProfile {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !is_blank(name))
            .unwrap_or(&self.email)
    }
}

/// Partial profile change; `None` fields are left as they are on the server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub avatar: Option<String>,
    pub date_of_birth: Option<String>,
}

impl ProfileUpdate {
    pub fn validated(self) -> Result<Self, UserError> {
        if self.full_name.is_none()
            && self.phone_number.is_none()
            && self.address.is_none()
            && self.avatar.is_none()
            && self.date_of_birth.is_none()
        {
            return Err(UserError::NothingToUpdate);
        }
        if self.full_name.as_deref().is_some_and(is_blank) {
            return Err(UserError::FullNameEmpty);
        }
        if self
            .phone_number
            .as_deref()
            .is_some_and(|phone| !is_valid_phone(phone))
        {
            return Err(UserError::InvalidPhone);
        }

        Ok(self)
    }
}
