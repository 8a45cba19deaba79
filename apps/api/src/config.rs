use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The service credential is optional at startup: without it the process
/// still boots and serves the profile, and every generative task fails
/// with a configuration error instead of reaching the network.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub profile_path: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            profile_path: std::env::var("PROFILE_PATH")
                .unwrap_or_else(|_| "data/profile.json".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
