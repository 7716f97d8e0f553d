//! Chat orchestration: generation, intent classification, augmentation

use std::sync::Arc;

use crate::chatbot::intent;
use crate::chatbot::models::ChatOutcome;
use crate::domain::{ChatbotError, TextGenerator};

/// Fixed assistant instructions prepended to every user prompt
const SYSTEM_PROMPT: &str = "\
You are an AI assistant for the NaviGuard application, which provides road safety, emergency response, accident reporting assistance, and navigation features.
Your role is to:
- Guide users on reporting accidents and verifying reports.
- Provide real-time weather updates, including temperature, precipitation, visibility, and road safety recommendations based on current conditions.
- Retrieve and summarize the latest accident reports, including location, severity, and rerouting suggestions.
- Explain how to use the dashcam feature and retrieve footage.
- Assist in finding nearby hospitals, blood banks, and emergency services.
- Help officers (police, hospital management, fire department, blood bank) understand their dashboard functions.
- Provide information about NaviGuard coins and how users are rewarded.
- Offer detailed navigation assistance, including:
- Suggesting optimal routes based on current traffic conditions.
- Providing turn-by-turn directions with landmarks.
- Estimating arrival times considering traffic and weather.
- Recommending alternative routes to avoid congestion or hazards.
- Identifying nearby amenities (gas stations, rest areas, restaurants).
- Supporting voice navigation commands for hands-free operation.
- When a navigation-related query is detected, instruct the app to open the map screen with appropriate coordinates and settings.
- Include specific app navigation commands in your response when relevant (e.g., \"MAP_SCREEN:destination=Hospital General;mode=driving\").
- Ensure responses are concise (max 120 tokens) and focus strictly on NaviGuards functionalities.
- Redirect unrelated queries back to relevant NaviGuard features.";

/// Placeholder returned with a 200 when the upstream yields no usable text
const SOFT_FAIL_TEXT: &str = "Error: Unable to generate response.";

#[derive(Clone)]
pub struct ChatService {
    generator: Arc<dyn TextGenerator>,
}

impl ChatService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Run one chat turn: generate a reply, classify the prompt, augment
    /// the reply with a map command when it names a known destination.
    pub async fn handle_chat(&self, prompt: &str) -> Result<ChatOutcome, ChatbotError> {
        if prompt.is_empty() {
            return Err(ChatbotError::Validation("Prompt is required".to_string()));
        }

        // Every turn is a fresh context; no history is carried between
        // requests.
        let full_prompt = format!("{}\n\nUser: {}", SYSTEM_PROMPT, prompt);

        let generated = self
            .generator
            .generate(&full_prompt)
            .await?
            .unwrap_or_else(|| SOFT_FAIL_TEXT.to_string());

        // Intent is decided on the user's prompt, not the generated text.
        let is_navigation = intent::is_navigation(prompt);
        let result = if is_navigation {
            intent::augment_response(&generated, prompt)
        } else {
            generated
        };

        tracing::debug!("chat response: {}", result);

        Ok(ChatOutcome {
            result,
            is_navigation,
        })
    }
}
