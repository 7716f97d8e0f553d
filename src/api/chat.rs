use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;

use crate::domain::ChatbotError;
use crate::infrastructure::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    // Optional so a missing field reaches the validation path below
    // instead of a framework 422.
    pub prompt: Option<String>,
}

#[utoipa::path(
    post,
    path = "/text_to_text_chat",
    responses(
        (status = 200, description = "Generated reply with navigation flag"),
        (status = 400, description = "Prompt is missing or empty"),
        (status = 500, description = "Text generation failed")
    )
)]
pub async fn text_to_text_chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> impl IntoResponse {
    let prompt = payload.prompt.unwrap_or_default();

    match state.chat.handle_chat(&prompt).await {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(ChatbotError::Validation(_)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Prompt is required" })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Error (text_to_text_chat): {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "An error occurred during text generation" })),
            )
                .into_response()
        }
    }
}
