//! Mock route builder
//!
//! Stands in for a real routing engine: estimated time and distance are
//! fixed literals and no geocoding or path computation happens here.

use std::collections::HashMap;

use serde::Serialize;

use crate::chatbot::intent::map_command;
use crate::domain::ChatbotError;

const MOCK_ESTIMATED_TIME: &str = "25 minutes";
const MOCK_DISTANCE: &str = "12.3 km";
const DEFAULT_ORIGIN: &str = "Current Location";
const DEFAULT_MODE: &str = "driving";

#[derive(Debug, Serialize)]
pub struct NavigationRoute {
    pub origin: String,
    pub destination: String,
    pub estimated_time: String,
    pub distance: String,
    pub map_command: String,
}

/// Build a canned route for a destination.
///
/// The only recognized preference key is "mode".
pub fn mock_route(
    destination: &str,
    current_location: Option<&str>,
    preferences: Option<&HashMap<String, String>>,
) -> Result<NavigationRoute, ChatbotError> {
    if destination.is_empty() {
        return Err(ChatbotError::Validation(
            "Destination is required".to_string(),
        ));
    }

    let mode = preferences
        .and_then(|prefs| prefs.get("mode"))
        .map(String::as_str)
        .unwrap_or(DEFAULT_MODE);

    Ok(NavigationRoute {
        origin: current_location.unwrap_or(DEFAULT_ORIGIN).to_string(),
        destination: destination.to_string(),
        estimated_time: MOCK_ESTIMATED_TIME.to_string(),
        distance: MOCK_DISTANCE.to_string(),
        map_command: map_command(destination, mode),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_origin_and_mode() {
        let route = mock_route("Hospital General", None, None).unwrap();

        assert_eq!(route.origin, "Current Location");
        assert_eq!(route.destination, "Hospital General");
        assert_eq!(route.estimated_time, "25 minutes");
        assert_eq!(route.distance, "12.3 km");
        assert_eq!(
            route.map_command,
            "MAP_SCREEN:destination=Hospital General;mode=driving"
        );
    }

    #[test]
    fn honors_location_and_mode_preference() {
        let prefs = HashMap::from([("mode".to_string(), "walking".to_string())]);
        let route = mock_route("City Park", Some("Central Station"), Some(&prefs)).unwrap();

        assert_eq!(route.origin, "Central Station");
        assert_eq!(
            route.map_command,
            "MAP_SCREEN:destination=City Park;mode=walking"
        );
    }

    #[test]
    fn ignores_unrecognized_preference_keys() {
        let prefs = HashMap::from([("avoid_tolls".to_string(), "true".to_string())]);
        let route = mock_route("Airport", None, Some(&prefs)).unwrap();
        assert_eq!(route.map_command, "MAP_SCREEN:destination=Airport;mode=driving");
    }

    #[test]
    fn rejects_empty_destination() {
        let err = mock_route("", None, None).unwrap_err();
        assert!(matches!(err, ChatbotError::Validation(_)));
    }
}
