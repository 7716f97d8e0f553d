//! Application state containing the chat service and shared resources

use std::sync::Arc;

use crate::chatbot::ChatService;
use crate::domain::TextGenerator;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Chat orchestration over the injected text-generation collaborator
    pub chat: ChatService,
}

impl AppState {
    /// Create a new AppState around a text-generation collaborator
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            chat: ChatService::new(generator),
        }
    }
}
