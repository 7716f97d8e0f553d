use std::env;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub google_api_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            // Not validated here: a missing key surfaces as an upstream
            // failure on the first chat request.
            google_api_key: env::var("GOOGLE_API_KEY").unwrap_or_default(),
        }
    }
}
