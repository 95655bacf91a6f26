// Publisher selected when no event bus is configured. Drops every message.

use crate::shared::infrastructure::event_bus::{EventBusError, EventPublisher, NotificationMessage};

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for NoopEventPublisher {
    async fn publish(&self, message: &NotificationMessage) -> Result<(), EventBusError> {
        tracing::debug!(event_type = %message.event_type, "event bus not configured, dropping notification");
        Ok(())
    }
}
