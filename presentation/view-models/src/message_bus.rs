use tokio::sync::broadcast;

/// Transient, user-facing notice. How long it stays on screen is up to the
/// front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMessage {
    Info(String),
    Error(String),
}

impl UiMessage {
    pub fn text(&self) -> &str {
        match self {
            UiMessage::Info(text) | UiMessage::Error(text) => text,
        }
    }
}

/// Fan-out channel every view-model publishes its notices on.
#[derive(Debug, Clone)]
pub struct MessageBus {
    sender: broadcast::Sender<UiMessage>,
}

impl Default for MessageBus {
    fn default() -> Self {
        Self::new(64)
    }
}

impl MessageBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<UiMessage> {
        self.sender.subscribe()
    }

    pub fn info(&self, text: impl Into<String>) {
        self.publish(UiMessage::Info(text.into()));
    }

    pub fn error(&self, text: impl Into<String>) {
        self.publish(UiMessage::Error(text.into()));
    }

    pub fn publish(&self, message: UiMessage) {
        // No subscriber means nobody is looking; the message is dropped.
        if self.sender.send(message).is_err() {
            tracing::debug!("UI message published without subscribers");
        }
    }
}
