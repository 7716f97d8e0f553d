pub mod api;
pub mod api_docs;
pub mod chatbot;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod navigation;

// Re-exports for the binary and integration tests
pub use infrastructure::AppState;
