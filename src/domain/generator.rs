//! Text-generation collaborator boundary
//!
//! The service depends on a single upstream capability: submit one
//! historyless text turn, receive text or failure. Implementations live
//! in the infrastructure layer.

use async_trait::async_trait;

use super::ChatbotError;

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Submit a single prompt as a fresh conversational turn.
    ///
    /// `Ok(None)` means the upstream answered without a usable text
    /// payload; the caller decides how to render that.
    async fn generate(&self, prompt: &str) -> Result<Option<String>, ChatbotError>;
}
