use crate::modules::assignments::core::assignment::Assignment;
use crate::modules::events::core::event::Event;
use crate::modules::walks::core::walk::Walk;
use crate::shared::application::notifier::EventNotifier;
use crate::shared::application::resource_service::ResourceService;
use crate::shared::infrastructure::database::DatabaseProbe;
use crate::shared::infrastructure::resource_store::in_memory::InMemoryResourceStore;
use std::sync::Arc;

pub type WalkService = ResourceService<Walk, InMemoryResourceStore<Walk>>;
pub type AssignmentService = ResourceService<Assignment, InMemoryResourceStore<Assignment>>;
pub type EventService = ResourceService<Event, InMemoryResourceStore<Event>>;

#[derive(Clone)]
pub struct AppState {
    pub walks: Arc<WalkService>,
    pub assignments: Arc<AssignmentService>,
    pub events: Arc<EventService>,
    pub database: Arc<dyn DatabaseProbe>,
}

impl AppState {
    /// Fresh, empty collections sharing one notifier.
    pub fn new(notifier: EventNotifier, database: Arc<dyn DatabaseProbe>) -> Self {
        Self {
            walks: Arc::new(ResourceService::new(
                Arc::new(InMemoryResourceStore::new()),
                notifier.clone(),
            )),
            assignments: Arc::new(ResourceService::new(
                Arc::new(InMemoryResourceStore::new()),
                notifier.clone(),
            )),
            events: Arc::new(ResourceService::new(
                Arc::new(InMemoryResourceStore::new()),
                notifier,
            )),
            database,
        }
    }
}
