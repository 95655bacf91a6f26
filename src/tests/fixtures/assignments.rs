use crate::modules::assignments::core::assignment::{Assignment, AssignmentStatus};
use uuid::Uuid;

pub struct AssignmentBuilder {
    inner: Assignment,
}

impl Default for AssignmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AssignmentBuilder {
    pub fn new() -> Self {
        Self {
            inner: Assignment {
                id: Uuid::from_u128(0xd1),
                walk_id: Uuid::from_u128(0xa1),
                walker_id: Uuid::from_u128(0xc1),
                status: AssignmentStatus::Pending,
                notes: None,
            },
        }
    }

    pub fn id(mut self, v: Uuid) -> Self {
        self.inner.id = v;
        self
    }

    pub fn walk_id(mut self, v: Uuid) -> Self {
        self.inner.walk_id = v;
        self
    }

    pub fn walker_id(mut self, v: Uuid) -> Self {
        self.inner.walker_id = v;
        self
    }

    pub fn status(mut self, v: AssignmentStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn notes(mut self, v: impl Into<String>) -> Self {
        self.inner.notes = Some(v.into());
        self
    }

    pub fn build(self) -> Assignment {
        self.inner
    }
}
