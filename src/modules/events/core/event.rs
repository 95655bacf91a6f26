use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::core::resource::Resource;

/// Entry of a walk's event log. Events are never updated, only created and deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub walk_id: Uuid,
    pub event_type: String,
    pub occurred_at: DateTime<Utc>,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl Resource for Event {
    const KIND: &'static str = "Event";

    fn id(&self) -> Uuid {
        self.id
    }
}
