use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::assignments::inbound::http as assignments_http;
use crate::modules::events::inbound::http as events_http;
use crate::modules::system::inbound::http as system_http;
use crate::modules::walks::inbound::http as walks_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(system_http::root))
        .route("/test-db", get(system_http::test_db))
        .route("/walks", post(walks_http::create).get(walks_http::list))
        .route(
            "/walks/{walk_id}",
            get(walks_http::get)
                .patch(walks_http::update)
                .delete(walks_http::delete),
        )
        .route(
            "/assignments",
            post(assignments_http::create).get(assignments_http::list),
        )
        .route(
            "/assignments/{assignment_id}",
            get(assignments_http::get)
                .patch(assignments_http::update)
                .delete(assignments_http::delete),
        )
        .route("/events", post(events_http::create).get(events_http::list))
        .route(
            "/events/{event_id}",
            get(events_http::get).delete(events_http::delete),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
