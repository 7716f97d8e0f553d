use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use naviguard::api;
use naviguard::infrastructure::{AppState, GeminiClient};
use tower::util::ServiceExt; // for `oneshot`

// The navigation endpoint never talks to the upstream; any base URL works
fn test_app() -> Router {
    let generator = Arc::new(GeminiClient::with_base_url(
        "test-key".to_string(),
        "http://127.0.0.1:9".to_string(),
    ));
    api::api_router(AppState::new(generator))
}

async fn post_navigation(payload: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let req = Request::builder()
        .uri("/navigation")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap();

    let response = test_app().oneshot(req).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn test_navigation_defaults() {
    let (status, body) =
        post_navigation(serde_json::json!({ "destination": "Hospital General" })).await;

    assert_eq!(status, StatusCode::OK);
    let route = &body["route"];
    assert_eq!(route["origin"], "Current Location");
    assert_eq!(route["destination"], "Hospital General");
    assert_eq!(route["estimated_time"], "25 minutes");
    assert_eq!(route["distance"], "12.3 km");
    // Caller casing is preserved in the command token
    assert_eq!(
        route["map_command"],
        "MAP_SCREEN:destination=Hospital General;mode=driving"
    );
}

#[tokio::test]
async fn test_navigation_honors_location_and_mode() {
    let (status, body) = post_navigation(serde_json::json!({
        "destination": "City Park",
        "current_location": "Central Station",
        "preferences": { "mode": "walking" }
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    let route = &body["route"];
    assert_eq!(route["origin"], "Central Station");
    assert_eq!(
        route["map_command"],
        "MAP_SCREEN:destination=City Park;mode=walking"
    );
}

#[tokio::test]
async fn test_navigation_missing_destination_is_rejected() {
    let (status, body) = post_navigation(serde_json::json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({ "error": "Destination is required" }));
}

#[tokio::test]
async fn test_navigation_empty_destination_is_rejected() {
    let (status, body) = post_navigation(serde_json::json!({ "destination": "" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({ "error": "Destination is required" }));
}
