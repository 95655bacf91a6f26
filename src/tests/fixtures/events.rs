use crate::modules::events::core::event::Event;
use chrono::{TimeZone, Utc};
use serde_json::json;
use uuid::Uuid;

pub struct EventBuilder {
    inner: Event,
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventBuilder {
    pub fn new() -> Self {
        Self {
            inner: Event {
                id: Uuid::from_u128(0xe1),
                walk_id: Uuid::from_u128(0xa1),
                event_type: "walk_started".to_string(),
                occurred_at: Utc.with_ymd_and_hms(2025, 3, 1, 10, 5, 0).unwrap(),
                payload: json!({ "note": "picked up" }),
            },
        }
    }

    pub fn id_u128(mut self, v: u128) -> Self {
        self.inner.id = Uuid::from_u128(v);
        self
    }

    pub fn walk_id(mut self, v: Uuid) -> Self {
        self.inner.walk_id = v;
        self
    }

    pub fn event_type(mut self, v: impl Into<String>) -> Self {
        self.inner.event_type = v.into();
        self
    }

    pub fn build(self) -> Event {
        self.inner
    }
}
