use serde::Deserialize;
use uuid::Uuid;

use crate::modules::walks::core::walk::{Walk, WalkStatus};
use crate::shared::core::filter::{RecordFilter, empty_as_none, matches_eq};

/// Query string of `GET /walks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WalkFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub owner_id: Option<Uuid>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<WalkStatus>,
}

impl RecordFilter<Walk> for WalkFilter {
    fn matches(&self, walk: &Walk) -> bool {
        matches_eq(&self.owner_id, &walk.owner_id)
            && matches_eq(&self.city, &walk.city)
            && matches_eq(&self.status, &walk.status)
    }
}
