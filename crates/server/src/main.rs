//! Web server binary.
//!
//! Loads the configuration and the similarity model, then serves the two
//! routes. A missing or unreadable model artifact is fatal: there is no
//! partial-serving mode, so the process exits with a diagnostic instead.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use poster_client::PosterClient;
use recommender::SimilarityModel;
use server::{create_router, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("Loading server configuration")?;

    info!(model = %config.model_path, "Loading similarity model");
    let model = SimilarityModel::load(Path::new(&config.model_path)).with_context(|| {
        format!(
            "Failed to load model artifact '{}'. Run `cine-sim preprocess` first.",
            config.model_path
        )
    })?;
    info!(items = model.len(), "Similarity model ready");

    let posters = PosterClient::with_endpoints(
        config.tmdb_api_key.clone(),
        config.tmdb_api_base.clone(),
        config.image_base.clone(),
        config.placeholder_url.clone(),
    );

    let state = AppState::new(model, posters);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Binding {addr}"))?;
    info!("Server running on http://{addr}");

    axum::serve(listener, app).await.context("Serving HTTP")?;
    Ok(())
}
