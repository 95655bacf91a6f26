// Resources are the records owned by a keyed collection.
//
// Purpose
// - Give the store, the filter evaluator and the notifier one shape to work against.
//
// Boundaries
// - Identity is client-supplied and never changes after creation.
// - Only resources that implement Patchable can be partially updated.

use serde::Serialize;
use uuid::Uuid;

use crate::shared::core::patch::MergePatch;

pub trait Resource: Clone + Serialize + Send + Sync + 'static {
    /// Name used in error messages and notification event types, for example `Walk`.
    const KIND: &'static str;

    fn id(&self) -> Uuid;
}

pub trait Patchable: Resource {
    type Patch: MergePatch<Self> + Send + 'static;
}
