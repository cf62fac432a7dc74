//! Poster resolution client for the TMDB metadata API.
//!
//! This crate resolves a movie id to a poster image URL. It handles:
//! - The metadata GET request (api_key and language as query parameters)
//! - Extracting the optional `poster_path` field from the JSON response
//! - Falling back to a fixed placeholder image on every failure mode
//!
//! There is deliberately no retry, no caching, and no rate limiting: each
//! lookup is one synchronous-in-spirit network call, and a failed call
//! degrades to the placeholder rather than failing the caller.

use reqwest::Client as HttpClient;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Default TMDB API base URL
pub const DEFAULT_API_BASE: &str = "https://api.themoviedb.org/3";

/// Base URL that poster paths are appended to
pub const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

/// Returned whenever a poster cannot be resolved
pub const PLACEHOLDER_URL: &str = "https://via.placeholder.com/500x750.png?text=No+Image+Found";

/// Errors that can occur while resolving a poster.
///
/// These never escape `poster_url`; they exist so failures can be logged
/// with their cause before degrading to the placeholder.
#[derive(Error, Debug)]
pub enum PosterError {
    #[error("Metadata request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Metadata API returned status {0}")]
    BadStatus(reqwest::StatusCode),

    #[error("Metadata response has no poster_path")]
    MissingPosterPath,
}

/// Subset of the TMDB movie-details response this client cares about
#[derive(Debug, Deserialize)]
struct MovieDetails {
    poster_path: Option<String>,
}

/// Client for the TMDB movie metadata API.
#[derive(Debug, Clone)]
pub struct PosterClient {
    http_client: HttpClient,
    api_key: String,
    api_base: String,
    image_base: String,
    placeholder: String,
}

impl PosterClient {
    /// Create a client against the production TMDB endpoints.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoints(api_key, DEFAULT_API_BASE, DEFAULT_IMAGE_BASE, PLACEHOLDER_URL)
    }

    /// Create a client with explicit endpoints (configuration and tests).
    pub fn with_endpoints(
        api_key: impl Into<String>,
        api_base: impl Into<String>,
        image_base: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key: api_key.into(),
            api_base: api_base.into(),
            image_base: image_base.into(),
            placeholder: placeholder.into(),
        }
    }

    /// Resolve the poster URL for a movie id.
    ///
    /// Never fails: any network error, non-2xx status, undecodable body,
    /// or missing `poster_path` yields the placeholder URL instead.
    pub async fn poster_url(&self, movie_id: u32) -> String {
        match self.fetch_poster_path(movie_id).await {
            Ok(path) => {
                debug!(movie_id, %path, "Resolved poster path");
                self.image_url(&path)
            }
            Err(e) => {
                warn!(movie_id, "Poster lookup failed, using placeholder: {e}");
                self.placeholder.clone()
            }
        }
    }

    /// The image URL for a poster path, as served by the image CDN.
    pub fn image_url(&self, poster_path: &str) -> String {
        format!("{}{}", self.image_base, poster_path)
    }

    /// One metadata GET; every failure mode is an explicit error.
    async fn fetch_poster_path(&self, movie_id: u32) -> Result<String, PosterError> {
        let url = format!("{}/movie/{}", self.api_base, movie_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("language", "en-US")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PosterError::BadStatus(status));
        }

        let details: MovieDetails = response.json().await?;
        details.poster_path.ok_or(PosterError::MissingPosterPath)
    }
}
