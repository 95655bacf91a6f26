use serde::Deserialize;
use uuid::Uuid;

use crate::modules::events::core::event::Event;
use crate::shared::core::filter::{RecordFilter, empty_as_none, matches_eq};

/// Query string of `GET /events`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EventFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub walk_id: Option<Uuid>,
}

impl RecordFilter<Event> for EventFilter {
    fn matches(&self, event: &Event) -> bool {
        matches_eq(&self.walk_id, &event.walk_id)
    }
}
