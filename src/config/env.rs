// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;

/// Default Places API Text Search endpoint
pub const DEFAULT_PLACES_ENDPOINT: &str = "https://places.googleapis.com/v1/places:searchText";

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup, immutable afterwards
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 8501)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Places API key, sent as X-Goog-Api-Key
    pub places_api_key: String,

    /// Text Search endpoint (overridable for local testing)
    pub places_endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_address: "127.0.0.1".to_string(),
            server_port: 8501,
            environment: "development".to_string(),
            log_level: "info".to_string(),
            places_api_key: String::new(),
            places_endpoint: DEFAULT_PLACES_ENDPOINT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        // Load .env file if it exists
        dotenv().ok();

        let defaults = Config::default();

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or(defaults.server_address),

            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(defaults.server_port),

            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),

            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),

            places_api_key: env::var("API_KEY").unwrap_or(defaults.places_api_key),

            places_endpoint: env::var("PLACES_ENDPOINT").unwrap_or(defaults.places_endpoint),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: A missing API key is not fatal; the upstream call
    /// will be rejected and reported like any other failure
    pub fn validate(&self) -> Result<(), String> {
        if self.places_endpoint.is_empty() {
            return Err("PLACES_ENDPOINT must not be empty".to_string());
        }

        if self.places_api_key.is_empty() {
            log::warn!("API_KEY not configured - searches will be rejected upstream");
        }

        Ok(())
    }
}
