use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::build_state;
use crate::shell::config::AppConfig;
use crate::shell::http::router;
use crate::tests::fixtures::state::make_test_state;

const W1: &str = "00000000-0000-0000-0000-000000000a01";
const O1: &str = "00000000-0000-0000-0000-000000000b01";
const A1: &str = "00000000-0000-0000-0000-000000000d01";
const K1: &str = "00000000-0000-0000-0000-000000000c01";

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn walk_and_assignment_lifecycle() {
    let (state, publisher) = make_test_state();
    let app = router(state);

    let response = send(
        &app,
        "POST",
        "/walks",
        Some(json!({
            "id": W1,
            "owner_id": O1,
            "pet_name": "Rex",
            "city": "NYC",
            "scheduled_at": "2025-03-01T10:00:00Z",
            "duration_minutes": 45,
            "status": "requested"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(
        &app,
        "POST",
        "/assignments",
        Some(json!({ "id": A1, "walk_id": W1, "walker_id": K1, "status": "pending" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(
        &app,
        "PATCH",
        &format!("/assignments/{A1}"),
        Some(json!({ "status": "accepted" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let assignment = body_json(send(&app, "GET", &format!("/assignments/{A1}"), None).await).await;
    assert_eq!(assignment["status"], "accepted");
    assert_eq!(assignment["walker_id"], K1);

    let response = send(&app, "DELETE", &format!("/walks/{W1}"), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = send(&app, "GET", &format!("/walks/{W1}"), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let walks = body_json(send(&app, "GET", "/walks?city=NYC", None).await).await;
    assert_eq!(walks, json!([]));

    // the assignment outlives its walk
    let response = send(&app, "GET", &format!("/assignments/{A1}"), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let types: Vec<_> = publisher
        .messages()
        .await
        .into_iter()
        .map(|message| message.event_type)
        .collect();
    assert_eq!(
        types,
        vec![
            "WalkCreated",
            "AssignmentCreated",
            "AssignmentUpdated",
            "WalkDeleted"
        ]
    );
}

#[tokio::test]
async fn deleted_identity_can_be_created_again() {
    let (state, _) = make_test_state();
    let app = router(state);
    let event = json!({
        "id": "00000000-0000-0000-0000-000000000e01",
        "walk_id": W1,
        "event_type": "walk_started",
        "occurred_at": "2025-03-01T10:05:00Z"
    });

    assert_eq!(
        send(&app, "POST", "/events", Some(event.clone())).await.status(),
        StatusCode::CREATED
    );
    assert_eq!(
        send(&app, "POST", "/events", Some(event.clone())).await.status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        send(&app, "DELETE", "/events/00000000-0000-0000-0000-000000000e01", None)
            .await
            .status(),
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        send(&app, "POST", "/events", Some(event)).await.status(),
        StatusCode::CREATED
    );
}

#[tokio::test]
async fn update_succeeds_during_an_event_bus_outage() {
    let (state, publisher) = make_test_state();
    let app = router(state);
    send(
        &app,
        "POST",
        "/assignments",
        Some(json!({ "id": A1, "walk_id": W1, "walker_id": K1 })),
    )
    .await;

    publisher.toggle_offline();
    let response = send(
        &app,
        "PATCH",
        &format!("/assignments/{A1}"),
        Some(json!({ "status": "declined" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "declined");
    assert_eq!(publisher.messages().await.len(), 1);
}

#[tokio::test]
async fn offline_configuration_serves_requests() {
    let config = AppConfig::from_lookup(|_| None).unwrap();
    let app = router(build_state(&config).unwrap());

    let response = send(&app, "GET", "/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = send(&app, "GET", "/test-db", None).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let response = send(&app, "GET", "/walks", None).await;
    assert_eq!(body_json(response).await, json!([]));
}
