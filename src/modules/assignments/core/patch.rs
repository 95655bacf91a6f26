use serde::Deserialize;
use uuid::Uuid;

use crate::modules::assignments::core::assignment::{Assignment, AssignmentStatus};
use crate::shared::core::patch::{MergePatch, apply, double_option, present};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssignmentPatch {
    #[serde(default, deserialize_with = "present")]
    pub walk_id: Option<Uuid>,
    #[serde(default, deserialize_with = "present")]
    pub walker_id: Option<Uuid>,
    #[serde(default, deserialize_with = "present")]
    pub status: Option<AssignmentStatus>,
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
}

impl MergePatch<Assignment> for AssignmentPatch {
    fn merge_into(self, mut assignment: Assignment) -> Assignment {
        apply(&mut assignment.walk_id, self.walk_id);
        apply(&mut assignment.walker_id, self.walker_id);
        apply(&mut assignment.status, self.status);
        apply(&mut assignment.notes, self.notes);
        assignment
    }

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
