use async_trait::async_trait;

use crate::domain::resource::Resource;

#[async_trait]
pub trait LogoutUseCase: Send + Sync {
    async fn execute(&self) -> Resource<()>;
}
