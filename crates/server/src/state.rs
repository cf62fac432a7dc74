//! Shared application state.

use poster_client::PosterClient;
use recommender::SimilarityModel;
use std::sync::Arc;

/// Shared application state.
///
/// Everything here is read-only after startup: the model is loaded once
/// and never mutated, and the poster client is stateless, so no locking
/// is needed.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<SimilarityModel>,
    pub posters: PosterClient,
}

impl AppState {
    pub fn new(model: SimilarityModel, posters: PosterClient) -> Self {
        Self {
            model: Arc::new(model),
            posters,
        }
    }
}
