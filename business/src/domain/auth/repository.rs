use async_trait::async_trait;

use super::model::{LoginCredentials, Registration};
use crate::domain::resource::Resource;
use crate::domain::session::model::Session;
use crate::domain::user::model::UserProfile;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Stores the issued token on success, plus the credentials when `remember`
    /// is set. A failed login leaves the stored session untouched.
    async fn login(&self, credentials: &LoginCredentials, remember: bool) -> Resource<Session>;
    async fn register(&self, registration: &Registration) -> Resource<UserProfile>;
    /// Drops the local session (token and remembered credentials).
    async fn logout(&self) -> Resource<()>;
}
