// Event bus port.
//
// Purpose
// - Describe the transport that carries state change notifications out of the service.
//
// Boundaries
// - Publishing is a side channel. Callers go through the EventNotifier, which swallows every
//   error returned here.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventBusError {
    #[error("transport unavailable: {0}")]
    Transport(String),

    #[error("event bus rejected the message with status {status}")]
    Rejected { status: u16 },

    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Wire shape of a notification. Identities inside `data` are canonical UUID strings and
/// timestamps are RFC 3339.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationMessage {
    pub event_type: String,
    pub data: serde_json::Value,
    pub timestamp: String,
}

impl NotificationMessage {
    pub fn new<T>(event_type: impl Into<String>, data: &T) -> Result<Self, EventBusError>
    where
        T: Serialize + ?Sized,
    {
        let data =
            serde_json::to_value(data).map_err(|e| EventBusError::Serialization(e.to_string()))?;
        Ok(Self {
            event_type: event_type.into(),
            data,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        })
    }
}

#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, message: &NotificationMessage) -> Result<(), EventBusError>;
}

pub mod in_memory;
pub mod noop;
pub mod pubsub;

#[cfg(test)]
mod notification_message_tests {
    use super::*;
    use chrono::DateTime;
    use rstest::rstest;
    use serde_json::json;
    use uuid::Uuid;

    #[derive(Serialize)]
    struct Sample {
        id: Uuid,
        at: DateTime<Utc>,
    }

    #[rstest]
    fn it_should_encode_identities_and_timestamps_as_text() {
        let at = DateTime::parse_from_rfc3339("2025-03-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let sample = Sample {
            id: Uuid::from_u128(1),
            at,
        };
        let message = NotificationMessage::new("WalkCreated", &sample).unwrap();
        assert_eq!(message.event_type, "WalkCreated");
        assert_eq!(
            message.data,
            json!({"id": "00000000-0000-0000-0000-000000000001", "at": "2025-03-01T10:00:00Z"})
        );
        assert!(DateTime::parse_from_rfc3339(&message.timestamp).is_ok());
    }
}
