use std::sync::Arc;

use tokio::sync::watch;

use business::domain::auth::use_cases::complete_onboarding::CompleteOnboardingUseCase;
use business::domain::auth::use_cases::login::{LoginParams, LoginUseCase};
use business::domain::auth::use_cases::logout::LogoutUseCase;
use business::domain::auth::use_cases::register::{RegisterParams, RegisterUseCase};
use business::domain::auth::use_cases::resolve_start::ResolveStartUseCase;
use business::domain::resource::Resource;
use business::domain::session::model::{Session, StartDestination};
use business::domain::user::model::UserProfile;

use crate::message_bus::MessageBus;
use crate::state::{BUSY_MESSAGE, InFlight};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub is_loading: bool,
    pub destination: Option<StartDestination>,
    pub session: Option<Session>,
    pub error: Option<String>,
}

fn loading(state: &mut AuthState) -> &mut bool {
    &mut state.is_loading
}

pub struct AuthViewModel {
    login: Arc<dyn LoginUseCase>,
    register: Arc<dyn RegisterUseCase>,
    logout: Arc<dyn LogoutUseCase>,
    resolve_start: Arc<dyn ResolveStartUseCase>,
    complete_onboarding: Arc<dyn CompleteOnboardingUseCase>,
    bus: MessageBus,
    state: watch::Sender<AuthState>,
}

impl AuthViewModel {
    pub fn new(
        login: Arc<dyn LoginUseCase>,
        register: Arc<dyn RegisterUseCase>,
        logout: Arc<dyn LogoutUseCase>,
        resolve_start: Arc<dyn ResolveStartUseCase>,
        complete_onboarding: Arc<dyn CompleteOnboardingUseCase>,
        bus: MessageBus,
    ) -> Self {
        Self {
            login,
            register,
            logout,
            resolve_start,
            complete_onboarding,
            bus,
            state: watch::Sender::new(AuthState::default()),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub async fn resolve_start(&self) -> Resource<StartDestination> {
        let result = self.resolve_start.execute().await;
        match &result {
            Resource::Success(destination) => {
                let destination = *destination;
                self.state.send_modify(|s| s.destination = Some(destination));
            }
            other => self.report(other.message()),
        }
        result
    }

    pub async fn complete_onboarding(&self) -> Resource<()> {
        let result = self.complete_onboarding.execute().await;
        match &result {
            Resource::Success(()) => self
                .state
                .send_modify(|s| s.destination = Some(StartDestination::Login)),
            other => self.report(other.message()),
        }
        result
    }

    pub async fn login(&self, params: LoginParams) -> Resource<Session> {
        let Some(_guard) = InFlight::acquire(&self.state, loading) else {
            return Resource::error(BUSY_MESSAGE);
        };
        self.state.send_modify(|s| s.error = None);

        let result = self.login.execute(params).await;
        match &result {
            Resource::Success(session) => {
                let session = session.clone();
                self.state.send_modify(|s| {
                    s.session = Some(session);
                    s.destination = Some(StartDestination::Home);
                });
            }
            other => self.report(other.message()),
        }
        result
    }

    pub async fn register(&self, params: RegisterParams) -> Resource<UserProfile> {
        let Some(_guard) = InFlight::acquire(&self.state, loading) else {
            return Resource::error(BUSY_MESSAGE);
        };
        self.state.send_modify(|s| s.error = None);

        let result = self.register.execute(params).await;
        match &result {
            Resource::Success(profile) => {
                self.bus
                    .info(format!("Account created for {}. Please log in.", profile.email));
                self.state
                    .send_modify(|s| s.destination = Some(StartDestination::Login));
            }
            other => self.report(other.message()),
        }
        result
    }

    pub async fn logout(&self) -> Resource<()> {
        let Some(_guard) = InFlight::acquire(&self.state, loading) else {
            return Resource::error(BUSY_MESSAGE);
        };

        let result = self.logout.execute().await;
        match &result {
            Resource::Success(()) => self.state.send_modify(|s| {
                s.session = None;
                s.destination = Some(StartDestination::Login);
            }),
            other => self.report(other.message()),
        }
        result
    }

    fn report(&self, message: Option<&str>) {
        let Some(message) = message else {
            return;
        };
        self.bus.error(message);
        let message = message.to_string();
        self.state.send_modify(|s| s.error = Some(message));
    }
}
