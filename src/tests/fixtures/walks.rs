// Test builder for walks. Defaults are fixed so assertions can compare whole records.

use crate::modules::walks::core::walk::{Walk, WalkStatus};
use chrono::{TimeZone, Utc};
use uuid::Uuid;

pub struct WalkBuilder {
    inner: Walk,
}

impl Default for WalkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl WalkBuilder {
    pub fn new() -> Self {
        Self {
            inner: Walk {
                id: Uuid::from_u128(0xa1),
                owner_id: Uuid::from_u128(0xb1),
                pet_name: "Rex".to_string(),
                city: "NYC".to_string(),
                address: None,
                scheduled_at: Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap(),
                duration_minutes: 30,
                notes: None,
                status: WalkStatus::Requested,
            },
        }
    }

    pub fn id(mut self, v: Uuid) -> Self {
        self.inner.id = v;
        self
    }

    pub fn id_u128(self, v: u128) -> Self {
        self.id(Uuid::from_u128(v))
    }

    pub fn owner_id(mut self, v: Uuid) -> Self {
        self.inner.owner_id = v;
        self
    }

    pub fn pet_name(mut self, v: impl Into<String>) -> Self {
        self.inner.pet_name = v.into();
        self
    }

    pub fn city(mut self, v: impl Into<String>) -> Self {
        self.inner.city = v.into();
        self
    }

    pub fn address(mut self, v: impl Into<String>) -> Self {
        self.inner.address = Some(v.into());
        self
    }

    pub fn notes(mut self, v: impl Into<String>) -> Self {
        self.inner.notes = Some(v.into());
        self
    }

    pub fn status(mut self, v: WalkStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn build(self) -> Walk {
        self.inner
    }
}
