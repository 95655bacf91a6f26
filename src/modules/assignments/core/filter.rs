use serde::Deserialize;
use uuid::Uuid;

use crate::modules::assignments::core::assignment::{Assignment, AssignmentStatus};
use crate::shared::core::filter::{RecordFilter, empty_as_none, matches_eq};

/// Query string of `GET /assignments`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AssignmentFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub walker_id: Option<Uuid>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub walk_id: Option<Uuid>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<AssignmentStatus>,
}

impl RecordFilter<Assignment> for AssignmentFilter {
    fn matches(&self, assignment: &Assignment) -> bool {
        matches_eq(&self.walker_id, &assignment.walker_id)
            && matches_eq(&self.walk_id, &assignment.walk_id)
            && matches_eq(&self.status, &assignment.status)
    }
}
