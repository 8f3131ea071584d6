use serde::{Deserialize, Serialize};

/// Credentials remembered for silent re-authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCredentials {
    pub phone_number: String,
    pub password: String,
}

/// Authenticated session returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub credentials: Option<SavedCredentials>,
}

/// Where the front-end should land when the app starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartDestination {
    Onboarding,
    Login,
    Home,
}

impl std::fmt::Display for StartDestination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartDestination::Onboarding => write!(f, "onboarding"),
            StartDestination::Login => write!(f, "login"),
            StartDestination::Home => write!(f, "home"),
        }
    }
}
