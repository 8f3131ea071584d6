use std::sync::Arc;

use tokio::sync::watch;

use business::domain::resource::Resource;
use business::domain::user::model::UserProfile;
use business::domain::user::use_cases::get_profile::GetProfileUseCase;
use business::domain::user::use_cases::update_profile::{
    UpdateProfileParams, UpdateProfileUseCase,
};

use crate::message_bus::MessageBus;
use crate::state::{BUSY_MESSAGE, InFlight, LoadState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileState {
    pub profile: LoadState<UserProfile>,
    pub is_saving: bool,
}

fn saving(state: &mut ProfileState) -> &mut bool {
    &mut state.is_saving
}

pub struct ProfileViewModel {
    get_profile: Arc<dyn GetProfileUseCase>,
    update_profile: Arc<dyn UpdateProfileUseCase>,
    bus: MessageBus,
    state: watch::Sender<ProfileState>,
}

impl ProfileViewModel {
    pub fn new(
        get_profile: Arc<dyn GetProfileUseCase>,
        update_profile: Arc<dyn UpdateProfileUseCase>,
        bus: MessageBus,
    ) -> Self {
        Self {
            get_profile,
            update_profile,
            bus,
            state: watch::Sender::new(ProfileState::default()),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ProfileState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> ProfileState {
        self.state.borrow().clone()
    }

    pub async fn load(&self) {
        self.state.send_modify(|s| s.profile = LoadState::Loading);
        let result = self.get_profile.execute().await;
        if let Some(message) = result.message() {
            self.bus.error(message);
        }
        self.state.send_modify(|s| s.profile = result.into());
    }

    /// Saves the changes; the profile shown is replaced by the server's copy.
    pub async fn update(&self, params: UpdateProfileParams) -> Resource<UserProfile> {
        let Some(_guard) = InFlight::acquire(&self.state, saving) else {
            return Resource::error(BUSY_MESSAGE);
        };

        let result = self.update_profile.execute(params).await;
        match &result {
            Resource::Success(profile) => {
                self.bus.info("Profile updated");
                let profile = profile.clone();
                self.state
                    .send_modify(|s| s.profile = LoadState::Loaded(profile));
            }
            other => {
                if let Some(message) = other.message() {
                    self.bus.error(message);
                }
            }
        }
        result
    }
}
