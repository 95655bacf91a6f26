// In memory implementation of the EventPublisher port.
//
// Purpose
// - Observe notifications in tests and simulate a transport outage.

use crate::shared::infrastructure::event_bus::{EventBusError, EventPublisher, NotificationMessage};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryEventPublisher {
    messages: Mutex<Vec<NotificationMessage>>,
    is_offline: AtomicBool,
}

impl InMemoryEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub async fn messages(&self) -> Vec<NotificationMessage> {
        self.messages.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl EventPublisher for InMemoryEventPublisher {
    async fn publish(&self, message: &NotificationMessage) -> Result<(), EventBusError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(EventBusError::Transport("Event bus offline".into()));
        }
        self.messages.lock().await.push(message.clone());
        Ok(())
    }
}
