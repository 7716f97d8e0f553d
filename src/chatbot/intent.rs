//! Keyword-based navigation intent detection and response augmentation

/// Ordered keyword set for navigation intent. Matching is raw substring
/// containment on the lowercased prompt, no word boundaries ("roadmap"
/// matches "map").
const NAVIGATION_KEYWORDS: [&str; 14] = [
    "navigate",
    "directions",
    "route",
    "map",
    "go to",
    "find way",
    "nearby",
    "fastest way",
    "shortest path",
    "turn-by-turn",
    "how to get to",
    "take me to",
    "drive to",
    "location of",
];

/// Destinations the augmenter recognizes; scanned in this order, first
/// hit wins.
const KNOWN_DESTINATIONS: [&str; 4] = [
    "hospital",
    "police station",
    "blood bank",
    "emergency services",
];

/// Whether a free-text prompt is navigation-related
pub fn is_navigation(prompt: &str) -> bool {
    let prompt = prompt.to_lowercase();
    NAVIGATION_KEYWORDS
        .iter()
        .any(|keyword| prompt.contains(keyword))
}

/// Build the command token the companion map client parses.
///
/// Values are substituted verbatim: the token grammar has no escaping
/// rule, so a destination or mode containing ';' or '=' corrupts the
/// token on the consumer side.
pub fn map_command(destination: &str, mode: &str) -> String {
    format!("MAP_SCREEN:destination={};mode={}", destination, mode)
}

/// Append a map command when the prompt names a known destination.
///
/// Mode is fixed to "driving" on this path; only the /navigation
/// endpoint honors a caller-supplied mode.
pub fn augment_response(generated_text: &str, prompt: &str) -> String {
    let prompt = prompt.to_lowercase();

    match KNOWN_DESTINATIONS
        .iter()
        .find(|dest| prompt.contains(**dest))
    {
        Some(destination) => format!(
            "{}\n\n{}",
            generated_text,
            map_command(destination, "driving")
        ),
        None => generated_text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_navigation_keywords_case_insensitive() {
        assert!(is_navigation("Please NAVIGATE home"));
        assert!(is_navigation("take me to the airport"));
        assert!(is_navigation("What is the fastest way downtown?"));
        assert!(is_navigation("turn-by-turn please"));
    }

    #[test]
    fn substring_matching_has_false_positives() {
        // "map" inside "roadmap" counts as a hit
        assert!(is_navigation("show me the product roadmap"));
    }

    #[test]
    fn non_navigation_prompts_are_rejected() {
        assert!(!is_navigation(""));
        assert!(!is_navigation("hello there"));
        assert!(!is_navigation("what are NaviGuard coins?"));
    }

    #[test]
    fn augments_with_first_matching_destination() {
        // "hospital" is scanned before "police station"
        let out = augment_response("Sure.", "police station or hospital?");
        assert_eq!(
            out,
            "Sure.\n\nMAP_SCREEN:destination=hospital;mode=driving"
        );
    }

    #[test]
    fn augments_known_destination() {
        let out = augment_response("On my way.", "Take me to the Blood Bank");
        assert!(out.ends_with("MAP_SCREEN:destination=blood bank;mode=driving"));
    }

    #[test]
    fn leaves_text_unchanged_without_destination() {
        let out = augment_response("Generated reply.", "navigate to the office");
        assert_eq!(out, "Generated reply.");
    }

    #[test]
    fn map_command_substitutes_verbatim() {
        // Delimiters pass through unescaped
        assert_eq!(
            map_command("A;B=C", "driving"),
            "MAP_SCREEN:destination=A;B=C;mode=driving"
        );
    }
}
