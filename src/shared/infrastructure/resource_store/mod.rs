// Resource store port.
//
// Purpose
// - The sole mutation surface for one resource type's collection.
//
// Responsibilities
// - Reject duplicate identities on create, report missing identities on every keyed operation.
// - Apply partial updates atomically so no half-merged record is ever observable.
//
// Boundaries
// - No referential checks between collections. Every resource type owns an independent store.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::shared::core::filter::RecordFilter;
use crate::shared::core::resource::{Patchable, Resource};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{kind} already exists")]
    DuplicateIdentity { kind: &'static str, id: Uuid },

    #[error("{kind} not found")]
    NotFound { kind: &'static str, id: Uuid },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ResourceStore<R: Resource>: Send + Sync {
    async fn create(&self, record: R) -> Result<R, StoreError>;
    async fn get(&self, id: Uuid) -> Result<R, StoreError>;
    async fn list(&self, filter: &dyn RecordFilter<R>) -> Result<Vec<R>, StoreError>;
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

#[async_trait]
pub trait PatchableStore<R: Patchable>: ResourceStore<R> {
    async fn update(&self, id: Uuid, patch: R::Patch) -> Result<R, StoreError>;
}

pub mod in_memory;
