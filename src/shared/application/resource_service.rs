// Application handler for one resource type.
//
// Purpose
// - Run a store operation, then tell the outside world about it.
//
// Responsibilities
// - Notify only after the store returned, so the collection lock is never held while the
//   notifier talks to the event bus.
// - Keep the outcome of the store operation regardless of what the notifier does.

use crate::shared::application::notifier::EventNotifier;
use crate::shared::core::filter::RecordFilter;
use crate::shared::core::patch::MergePatch;
use crate::shared::core::resource::{Patchable, Resource};
use crate::shared::infrastructure::resource_store::{PatchableStore, ResourceStore, StoreError};
use serde_json::json;
use std::marker::PhantomData;
use std::sync::Arc;
use uuid::Uuid;

pub struct ResourceService<R, TStore>
where
    R: Resource,
    TStore: ResourceStore<R> + 'static,
{
    store: Arc<TStore>,
    notifier: EventNotifier,
    _resource: PhantomData<fn() -> R>,
}

impl<R, TStore> ResourceService<R, TStore>
where
    R: Resource,
    TStore: ResourceStore<R> + 'static,
{
    pub fn new(store: Arc<TStore>, notifier: EventNotifier) -> Self {
        Self {
            store,
            notifier,
            _resource: PhantomData,
        }
    }

    pub async fn create(&self, record: R) -> Result<R, StoreError> {
        let created = self.store.create(record).await?;
        tracing::info!(kind = R::KIND, id = %created.id(), "resource created");
        self.notifier
            .notify(&format!("{}Created", R::KIND), &created)
            .await;
        Ok(created)
    }

    pub async fn get(&self, id: Uuid) -> Result<R, StoreError> {
        self.store.get(id).await
    }

    pub async fn list(&self, filter: &dyn RecordFilter<R>) -> Result<Vec<R>, StoreError> {
        self.store.list(filter).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.store.delete(id).await?;
        tracing::info!(kind = R::KIND, %id, "resource deleted");
        self.notifier
            .notify(&format!("{}Deleted", R::KIND), &json!({ "id": id }))
            .await;
        Ok(())
    }
}

impl<R, TStore> ResourceService<R, TStore>
where
    R: Patchable,
    TStore: PatchableStore<R> + 'static,
{
    pub async fn update(&self, id: Uuid, patch: R::Patch) -> Result<R, StoreError> {
        if patch.is_empty() {
            tracing::debug!(kind = R::KIND, %id, "empty patch, record left unchanged");
        }
        let updated = self.store.update(id, patch).await?;
        tracing::info!(kind = R::KIND, %id, "resource updated");
        self.notifier
            .notify(&format!("{}Updated", R::KIND), &updated)
            .await;
        Ok(updated)
    }
}
