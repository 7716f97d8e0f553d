use std::collections::HashMap;

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;

use crate::domain::ChatbotError;
use crate::navigation::mock_route;

#[derive(Deserialize)]
pub struct NavigationRequest {
    pub destination: Option<String>,
    pub current_location: Option<String>,
    pub preferences: Option<HashMap<String, String>>,
}

#[utoipa::path(
    post,
    path = "/navigation",
    responses(
        (status = 200, description = "Mock route for the destination"),
        (status = 400, description = "Destination is missing"),
        (status = 500, description = "Navigation request failed")
    )
)]
pub async fn navigation(Json(payload): Json<NavigationRequest>) -> impl IntoResponse {
    let destination = payload.destination.unwrap_or_default();

    match mock_route(
        &destination,
        payload.current_location.as_deref(),
        payload.preferences.as_ref(),
    ) {
        Ok(route) => (StatusCode::OK, Json(json!({ "route": route }))).into_response(),
        Err(ChatbotError::Validation(_)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Destination is required" })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Error (navigation): {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "An error occurred processing navigation request" })),
            )
                .into_response()
        }
    }
}
