use std::sync::Arc;

use tokio::sync::{Mutex, watch};
use tokio::task::JoinSet;

use business::domain::notification::model::{Notification, unread_count};
use business::domain::notification::use_cases::device_token::{
    DeviceTokenParams, RegisterDeviceTokenUseCase, RemoveDeviceTokenUseCase,
};
use business::domain::notification::use_cases::get_all::GetNotificationsUseCase;
use business::domain::notification::use_cases::mark_read::{
    MarkNotificationReadParams, MarkNotificationReadUseCase,
};
use business::domain::resource::Resource;

use crate::message_bus::MessageBus;
use crate::state::LoadState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationState {
    pub notifications: LoadState<Vec<Notification>>,
    pub unread: usize,
}

/// Notification list with optimistic mark-as-read.
///
/// Mark-as-read flips the local flag first and sends the request from a
/// background task. A failed request is reported on the message bus but the
/// flag stays flipped. Pending requests are aborted when the view-model is
/// dropped.
pub struct NotificationViewModel {
    get_all: Arc<dyn GetNotificationsUseCase>,
    mark_read: Arc<dyn MarkNotificationReadUseCase>,
    register_token: Arc<dyn RegisterDeviceTokenUseCase>,
    remove_token: Arc<dyn RemoveDeviceTokenUseCase>,
    bus: MessageBus,
    state: watch::Sender<NotificationState>,
    pending: Mutex<JoinSet<()>>,
}

impl NotificationViewModel {
    pub fn new(
        get_all: Arc<dyn GetNotificationsUseCase>,
        mark_read: Arc<dyn MarkNotificationReadUseCase>,
        register_token: Arc<dyn RegisterDeviceTokenUseCase>,
        remove_token: Arc<dyn RemoveDeviceTokenUseCase>,
        bus: MessageBus,
    ) -> Self {
        Self {
            get_all,
            mark_read,
            register_token,
            remove_token,
            bus,
            state: watch::Sender::new(NotificationState::default()),
            pending: Mutex::new(JoinSet::new()),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<NotificationState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> NotificationState {
        self.state.borrow().clone()
    }

    pub async fn load(&self) {
        self.state
            .send_modify(|s| s.notifications = LoadState::Loading);
        let result = self.get_all.execute().await;
        if let Some(message) = result.message() {
            self.bus.error(message);
        }
        self.state.send_modify(|s| {
            s.notifications = result.into();
            s.unread = s.notifications.data().map_or(0, |list| unread_count(list));
        });
    }

    /// Returns `false` when the notification is unknown or already read; no
    /// request is sent in that case.
    pub async fn mark_as_read(&self, id: i64) -> bool {
        let flipped = self.state.send_if_modified(|s| {
            let Some(list) = s.notifications.data_mut() else {
                return false;
            };
            let Some(notification) = list.iter_mut().find(|n| n.id == id && !n.is_read) else {
                return false;
            };
            notification.is_read = true;
            s.unread = unread_count(list);
            true
        });
        if !flipped {
            return false;
        }

        let use_case = self.mark_read.clone();
        let bus = self.bus.clone();
        let mut pending = self.pending.lock().await;
        // Reap finished requests so the set does not grow unbounded.
        while pending.try_join_next().is_some() {}
        pending.spawn(async move {
            let result = use_case.execute(MarkNotificationReadParams { id }).await;
            if let Some(message) = result.message() {
                tracing::warn!(notification = id, "Mark as read failed: {}", message);
                bus.error(message);
            }
        });
        true
    }

    /// Waits for every background mark-as-read request to finish.
    pub async fn wait_pending(&self) {
        let mut pending = self.pending.lock().await;
        while pending.join_next().await.is_some() {}
    }

    pub async fn register_device_token(&self, token: &str) -> Resource<()> {
        let result = self
            .register_token
            .execute(DeviceTokenParams {
                token: token.to_string(),
            })
            .await;
        if let Some(message) = result.message() {
            self.bus.error(message);
        }
        result
    }

    pub async fn remove_device_token(&self, token: &str) -> Resource<()> {
        let result = self
            .remove_token
            .execute(DeviceTokenParams {
                token: token.to_string(),
            })
            .await;
        if let Some(message) = result.message() {
            self.bus.error(message);
        }
        result
    }
}
