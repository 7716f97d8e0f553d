use axum::Json;
use serde_json::{Value, json};

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message")
    )
)]
pub async fn home() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the NaviGuard AI Chatbot!"
    }))
}
