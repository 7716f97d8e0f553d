//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

#[derive(Debug)]
pub enum ChatbotError {
    /// Required field missing or empty
    Validation(String),
    /// Text-generation collaborator failed or was unreachable
    Upstream(String),
}

impl fmt::Display for ChatbotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatbotError::Validation(msg) => write!(f, "Validation error: {}", msg),
            ChatbotError::Upstream(msg) => write!(f, "Upstream error: {}", msg),
        }
    }
}

impl std::error::Error for ChatbotError {}
