use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::use_cases::complete_onboarding::CompleteOnboardingUseCase;
use crate::domain::logger::Logger;
use crate::domain::resource::Resource;
use crate::domain::session::store::PreferenceStore;

pub struct CompleteOnboardingUseCaseImpl {
    pub preferences: Arc<dyn PreferenceStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CompleteOnboardingUseCase for CompleteOnboardingUseCaseImpl {
    async fn execute(&self) -> Resource<()> {
        let result = self.preferences.set_first_launch(false).await;
        if let Err(err) = &result {
            self.logger
                .error(&format!("Could not persist onboarding flag: {}", err));
        }
        result.into()
    }
}
