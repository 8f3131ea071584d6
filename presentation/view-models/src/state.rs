use tokio::sync::watch;

use business::domain::resource::Resource;

/// Load status of one piece of screen data.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> From<Resource<T>> for LoadState<T> {
    fn from(resource: Resource<T>) -> Self {
        match resource {
            Resource::Success(data) => LoadState::Loaded(data),
            Resource::Error { message, .. } => LoadState::Error(message),
            Resource::Loading(_) => LoadState::Loading,
        }
    }
}

/// Shown when a mutating action is started while another one is running.
pub const BUSY_MESSAGE: &str = "Another request is still in progress.";

/// Holds a boolean "in flight" flag inside watched state for as long as it
/// lives. Dropping it (including when the owning future is cancelled)
/// clears the flag.
pub(crate) struct InFlight<'a, S> {
    state: &'a watch::Sender<S>,
    flag: fn(&mut S) -> &mut bool,
}

impl<'a, S> InFlight<'a, S> {
    /// Sets the flag, or returns `None` when it is already set.
    pub(crate) fn acquire(state: &'a watch::Sender<S>, flag: fn(&mut S) -> &mut bool) -> Option<Self> {
        let acquired = state.send_if_modified(|s| {
            let busy = flag(s);
            if *busy {
                false
            } else {
                *busy = true;
                true
            }
        });
        acquired.then_some(Self { state, flag })
    }
}

impl<S> Drop for InFlight<'_, S> {
    fn drop(&mut self) {
        let flag = self.flag;
        self.state.send_modify(|s| *flag(s) = false);
    }
}
