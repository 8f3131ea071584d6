use serde::{Deserialize, Serialize};

/// Closed set of account roles. Values the client does not know map to
/// `Unknown` instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    EmployeeManager,
    ShopManager,
    User,
    Unknown,
}

impl Role {
    /// Parses a server role name, falling back to `Unknown`.
    pub fn from_server(value: &str) -> Self {
        value.parse().unwrap_or(Role::Unknown)
    }

    /// Maps the server's role list; missing or empty data means a plain user.
    pub fn from_server_list<S: AsRef<str>>(values: Option<&[S]>) -> Vec<Role> {
        match values {
            Some(values) if !values.is_empty() => values
                .iter()
                .map(|v| Role::from_server(v.as_ref()))
                .collect(),
            _ => vec![Role::User],
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "ADMIN"),
            Role::EmployeeManager => write!(f, "EMPLOYEE_MANAGER"),
            Role::ShopManager => write!(f, "SHOP_MANAGER"),
            Role::User => write!(f, "USER"),
            Role::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "EMPLOYEE_MANAGER" => Ok(Role::EmployeeManager),
            "SHOP_MANAGER" => Ok(Role::ShopManager),
            "USER" => Ok(Role::User),
            "UNKNOWN" => Ok(Role::Unknown),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_known_roles_case_insensitively() {
        assert_eq!(Role::from_server("admin"), Role::Admin);
        assert_eq!(Role::from_server("SHOP_MANAGER"), Role::ShopManager);
        assert_eq!(Role::from_server("Employee_Manager"), Role::EmployeeManager);
    }

    #[test]
    fn should_map_unrecognized_role_to_unknown() {
        assert_eq!(Role::from_server("SUPER_OWNER"), Role::Unknown);
    }

    #[test]
    fn should_default_to_user_when_roles_absent() {
        assert_eq!(Role::from_server_list::<String>(None), vec![Role::User]);
    }

    #[test]
    fn should_default_to_user_when_roles_empty() {
        let empty: Vec<String> = Vec::new();

        assert_eq!(Role::from_server_list(Some(empty.as_slice())), vec![Role::User]);
    }

    #[test]
    fn should_keep_unknown_entries_alongside_known_ones() {
        let roles = vec!["USER".to_string(), "GHOST".to_string()];

        assert_eq!(
            Role::from_server_list(Some(roles.as_slice())),
            vec![Role::User, Role::Unknown]
        );
    }

    #[test]
    fn should_round_trip_display_and_parse() {
        for role in [Role::Admin, Role::EmployeeManager, Role::ShopManager, Role::User] {
            assert_eq!(role.to_string().parse::<Role>(), Ok(role));
        }
    }
}
