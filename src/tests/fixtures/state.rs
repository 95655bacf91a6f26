use crate::shared::application::notifier::EventNotifier;
use crate::shared::infrastructure::database::{DatabaseProbe, ProbeError, UnconfiguredDatabase};
use crate::shared::infrastructure::event_bus::in_memory::InMemoryEventPublisher;
use crate::shell::state::AppState;
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;
use std::time::Duration;

/// State with fresh stores, a recording publisher and no database.
pub fn make_test_state() -> (AppState, Arc<InMemoryEventPublisher>) {
    let publisher = Arc::new(InMemoryEventPublisher::new());
    let notifier = EventNotifier::new(publisher.clone(), Duration::from_secs(1), 1);
    let state = AppState::new(notifier, Arc::new(UnconfiguredDatabase));
    (state, publisher)
}

/// Database that always answers with the same clock.
pub struct FixedClockDatabase {
    pub now: NaiveDateTime,
}

impl Default for FixedClockDatabase {
    fn default() -> Self {
        Self {
            now: NaiveDate::from_ymd_opt(2025, 3, 1)
                .and_then(|d| d.and_hms_opt(10, 0, 0))
                .unwrap(),
        }
    }
}

#[async_trait::async_trait]
impl DatabaseProbe for FixedClockDatabase {
    async fn server_time(&self) -> Result<NaiveDateTime, ProbeError> {
        Ok(self.now)
    }
}
