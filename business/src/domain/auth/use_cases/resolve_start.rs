use async_trait::async_trait;

use crate::domain::resource::Resource;
use crate::domain::session::model::StartDestination;

/// Decides the first screen: onboarding on first launch, home when a session
/// exists or can be restored silently, login otherwise.
#[async_trait]
pub trait ResolveStartUseCase: Send + Sync {
    async fn execute(&self) -> Resource<StartDestination>;
}
