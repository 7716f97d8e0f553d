use serde::Serialize;

/// Outcome of a single chat turn after intent post-processing
#[derive(Debug, Serialize)]
pub struct ChatOutcome {
    pub result: String,
    pub is_navigation: bool,
}
