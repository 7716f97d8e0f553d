pub mod chat;
pub mod health;
pub mod home;
pub mod navigation;

use axum::{
    Router,
    routing::{get, post},
};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Welcome & health
        .route("/", get(home::home))
        .route("/health", get(health::health_check))
        // Chat
        .route("/text_to_text_chat", post(chat::text_to_text_chat))
        // Navigation
        .route("/navigation", post(navigation::navigation))
        .with_state(state)
}
