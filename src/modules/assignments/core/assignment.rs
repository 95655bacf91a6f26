use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::assignments::core::patch::AssignmentPatch;
use crate::shared::core::resource::{Patchable, Resource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
    Completed,
    Cancelled,
}

/// A walker assigned to a walk. `walk_id` is not checked against the walk collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: Uuid,
    pub walk_id: Uuid,
    pub walker_id: Uuid,
    #[serde(default)]
    pub status: AssignmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Resource for Assignment {
    const KIND: &'static str = "Assignment";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Patchable for Assignment {
    type Patch = AssignmentPatch;
}
