use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::walks::core::patch::WalkPatch;
use crate::shared::core::resource::{Patchable, Resource};

/// Lifecycle of a walk request. Any status can be patched to any other status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkStatus {
    #[default]
    Requested,
    Assigned,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Walk {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub pet_name: String,
    pub city: String,
    #[serde(default)]
    pub address: Option<String>,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: u32,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: WalkStatus,
}

impl Resource for Walk {
    const KIND: &'static str = "Walk";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Patchable for Walk {
    type Patch = WalkPatch;
}
