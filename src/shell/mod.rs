// Composition root of the walk service.
//
// Responsibilities
// - Read config from environment.
// - Pick the event bus transport and the database probe.
// - Wire stores and services into the HTTP router.

pub mod config;
pub mod error;
pub mod http;
pub mod state;
pub mod telemetry;

use std::sync::Arc;

use crate::shared::application::notifier::EventNotifier;
use crate::shared::infrastructure::database::mysql::MySqlProbe;
use crate::shared::infrastructure::database::{DatabaseProbe, UnconfiguredDatabase};
use crate::shared::infrastructure::event_bus::EventPublisher;
use crate::shared::infrastructure::event_bus::noop::NoopEventPublisher;
use crate::shared::infrastructure::event_bus::pubsub::PubSubEventPublisher;
use crate::shell::config::AppConfig;
use crate::shell::state::AppState;

pub fn build_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let publisher: Arc<dyn EventPublisher> = match &config.pubsub {
        Some(settings) => {
            tracing::info!(
                project = %settings.project_id,
                topic = %settings.topic_id,
                "publishing notifications to Pub/Sub"
            );
            Arc::new(PubSubEventPublisher::new(settings)?)
        }
        None => {
            tracing::info!("Pub/Sub not configured, notifications are disabled");
            Arc::new(NoopEventPublisher)
        }
    };
    let notifier = EventNotifier::new(
        publisher,
        config.notifier_timeout,
        config.notifier_max_attempts,
    );

    let database: Arc<dyn DatabaseProbe> = match &config.database {
        Some(settings) => Arc::new(MySqlProbe::connect_lazy(settings)),
        None => {
            tracing::info!("database not configured, /test-db will report unavailable");
            Arc::new(UnconfiguredDatabase)
        }
    };

    Ok(AppState::new(notifier, database))
}
