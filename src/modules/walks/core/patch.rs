use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::walks::core::walk::{Walk, WalkStatus};
use crate::shared::core::patch::{MergePatch, apply, double_option, present};

/// PATCH body for a walk. There is no `id` field and unknown fields are rejected, so the
/// identity cannot be changed through an update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalkPatch {
    #[serde(default, deserialize_with = "present")]
    pub owner_id: Option<Uuid>,
    #[serde(default, deserialize_with = "present")]
    pub pet_name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub address: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "present")]
    pub duration_minutes: Option<u32>,
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub status: Option<WalkStatus>,
}

impl MergePatch<Walk> for WalkPatch {
    fn merge_into(self, mut walk: Walk) -> Walk {
        apply(&mut walk.owner_id, self.owner_id);
        apply(&mut walk.pet_name, self.pet_name);
        apply(&mut walk.city, self.city);
        apply(&mut walk.address, self.address);
        apply(&mut walk.scheduled_at, self.scheduled_at);
        apply(&mut walk.duration_minutes, self.duration_minutes);
        apply(&mut walk.notes, self.notes);
        apply(&mut walk.status, self.status);
        walk
    }

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
