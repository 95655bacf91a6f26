// In memory implementation of the ResourceStore port.
//
// Purpose
// - Back every collection of the service. State is lost on restart.
//
// Responsibilities
// - Key records by identity, remember insertion order for stable listings.
// - Hold the collection lock for exactly one operation, never across external I/O.

use crate::shared::core::filter::{RecordFilter, filter_records};
use crate::shared::core::patch::MergePatch;
use crate::shared::core::resource::{Patchable, Resource};
use crate::shared::infrastructure::resource_store::{PatchableStore, ResourceStore, StoreError};
use std::collections::HashMap;
use std::marker::PhantomData;
use tokio::sync::RwLock;
use uuid::Uuid;

struct Entry<R> {
    seq: u64,
    record: R,
}

struct Collection<R> {
    next_seq: u64,
    entries: HashMap<Uuid, Entry<R>>,
}

pub struct InMemoryResourceStore<R: Resource> {
    inner: RwLock<Collection<R>>,
    is_offline: bool,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Default for InMemoryResourceStore<R> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Collection {
                next_seq: 0,
                entries: HashMap::new(),
            }),
            is_offline: false,
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> InMemoryResourceStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend(format!("{} store offline", R::KIND)));
        }
        Ok(())
    }

    fn not_found(id: Uuid) -> StoreError {
        StoreError::NotFound { kind: R::KIND, id }
    }
}

#[async_trait::async_trait]
impl<R: Resource> ResourceStore<R> for InMemoryResourceStore<R> {
    async fn create(&self, record: R) -> Result<R, StoreError> {
        self.ensure_online()?;
        let id = record.id();
        let mut guard = self.inner.write().await;
        if guard.entries.contains_key(&id) {
            return Err(StoreError::DuplicateIdentity { kind: R::KIND, id });
        }
        let seq = guard.next_seq;
        guard.next_seq += 1;
        guard.entries.insert(
            id,
            Entry {
                seq,
                record: record.clone(),
            },
        );
        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<R, StoreError> {
        self.ensure_online()?;
        self.inner
            .read()
            .await
            .entries
            .get(&id)
            .map(|entry| entry.record.clone())
            .ok_or_else(|| Self::not_found(id))
    }

    async fn list(&self, filter: &dyn RecordFilter<R>) -> Result<Vec<R>, StoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        let mut ordered: Vec<&Entry<R>> = guard.entries.values().collect();
        ordered.sort_by_key(|entry| entry.seq);
        Ok(filter_records(
            ordered.into_iter().map(|entry| &entry.record),
            filter,
        ))
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.ensure_online()?;
        self.inner
            .write()
            .await
            .entries
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(id))
    }
}

#[async_trait::async_trait]
impl<R: Patchable> PatchableStore<R> for InMemoryResourceStore<R> {
    async fn update(&self, id: Uuid, patch: R::Patch) -> Result<R, StoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        let entry = guard.entries.get_mut(&id).ok_or_else(|| Self::not_found(id))?;
        let merged = patch.merge_into(entry.record.clone());
        entry.record = merged.clone();
        Ok(merged)
    }
}
