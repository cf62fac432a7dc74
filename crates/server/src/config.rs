//! Server configuration loaded from environment variables.

use poster_client::{DEFAULT_API_BASE, DEFAULT_IMAGE_BASE, PLACEHOLDER_URL};
use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB API key (required; the only setting without a default)
    pub tmdb_api_key: String,

    /// Path to the similarity model artifact written by `cine-sim preprocess`
    #[serde(default = "default_model_path")]
    pub model_path: String,

    /// TMDB metadata API base URL
    #[serde(default = "default_api_base")]
    pub tmdb_api_base: String,

    /// Poster image CDN base URL
    #[serde(default = "default_image_base")]
    pub image_base: String,

    /// Image URL substituted when a poster cannot be resolved
    #[serde(default = "default_placeholder_url")]
    pub placeholder_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_model_path() -> String {
    "model.bin".to_string()
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_image_base() -> String {
    DEFAULT_IMAGE_BASE.to_string()
}

fn default_placeholder_url() -> String {
    PLACEHOLDER_URL.to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
