// Best-effort notification of state changes.
//
// Purpose
// - Emit `{event_type, data, timestamp}` after a successful mutation.
//
// Responsibilities
// - Retry a few times, bounded by one overall timeout.
// - Never surface an error to the caller. Failures are logged and dropped.

use crate::shared::infrastructure::event_bus::noop::NoopEventPublisher;
use crate::shared::infrastructure::event_bus::{EventBusError, EventPublisher, NotificationMessage};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const RETRY_BACKOFF: Duration = Duration::from_millis(50);

#[derive(Clone)]
pub struct EventNotifier {
    publisher: Arc<dyn EventPublisher>,
    timeout: Duration,
    max_attempts: u32,
}

impl EventNotifier {
    pub fn new(publisher: Arc<dyn EventPublisher>, timeout: Duration, max_attempts: u32) -> Self {
        Self {
            publisher,
            timeout,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn disabled() -> Self {
        Self::new(Arc::new(NoopEventPublisher), DEFAULT_TIMEOUT, 1)
    }

    pub async fn notify<T>(&self, event_type: &str, data: &T)
    where
        T: Serialize + ?Sized,
    {
        let message = match NotificationMessage::new(event_type, data) {
            Ok(message) => message,
            Err(err) => {
                tracing::warn!(%event_type, error = %err, "could not build notification");
                return;
            }
        };

        match tokio::time::timeout(self.timeout, self.publish_with_retries(&message)).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                tracing::warn!(%event_type, error = %err, "notification dropped");
            }
            Err(_) => {
                tracing::warn!(%event_type, timeout = ?self.timeout, "notification timed out");
            }
        }
    }

    async fn publish_with_retries(&self, message: &NotificationMessage) -> Result<(), EventBusError> {
        let mut attempt = 1;
        loop {
            match self.publisher.publish(message).await {
                Ok(()) => return Ok(()),
                Err(err) if attempt < self.max_attempts => {
                    tracing::debug!(attempt, error = %err, "retrying notification");
                    tokio::time::sleep(RETRY_BACKOFF * attempt).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
