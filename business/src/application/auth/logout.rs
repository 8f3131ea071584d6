use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::repository::AuthRepository;
use crate::domain::auth::use_cases::logout::LogoutUseCase;
use crate::domain::logger::Logger;
use crate::domain::resource::Resource;

pub struct LogoutUseCaseImpl {
    pub repository: Arc<dyn AuthRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LogoutUseCase for LogoutUseCaseImpl {
    async fn execute(&self) -> Resource<()> {
        self.logger.info("Logging out");
        self.repository.logout().await
    }
}
