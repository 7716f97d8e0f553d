//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Gemini generateContent client (gemini)
//! - Application state (state)

pub mod gemini;
pub mod state;

pub use gemini::GeminiClient;
pub use state::AppState;
