//! Error types for the preprocessing pipeline.

use data_loader::MovieId;
use thiserror::Error;

/// Errors that can occur during feature extraction and vectorization
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A JSON-encoded list column could not be decoded.
    ///
    /// Policy: the owning record is dropped whole rather than partially
    /// processed; this error never aborts the batch.
    #[error("Malformed {field} JSON for movie {id}: {source}")]
    MalformedField {
        id: MovieId,
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Every record was dropped, leaving nothing to vectorize
    #[error("No records survived feature extraction")]
    EmptyCorpus,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, PipelineError>;
