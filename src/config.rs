// src/config.rs
use std::env;

/// Runtime configuration, overridable through the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the site binds to.
    /// Example: "127.0.0.1:3000"
    pub bind_addr: String,
    /// Base URL of the remote property API (no trailing slash).
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            api_base_url: "http://localhost:5000".to_string(),
        }
    }
}

impl AppConfig {
    /// Read config from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: env::var("ESTATE_BIND").unwrap_or(defaults.bind_addr),
            api_base_url: env::var("ESTATE_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
        }
    }
}
