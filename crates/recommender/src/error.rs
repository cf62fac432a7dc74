//! Error types for model persistence.

use thiserror::Error;

/// Errors that can occur while saving or loading the model artifact
#[derive(Error, Debug)]
pub enum ModelError {
    /// Artifact file missing or unreadable
    #[error("I/O error for model artifact: {0}")]
    IoError(#[from] std::io::Error),

    /// Artifact bytes did not decode as a model
    #[error("Failed to decode model artifact: {0}")]
    DecodeError(#[from] bincode::Error),

    /// Item table and matrix disagree about the item count
    #[error("Model is inconsistent: {items} items but a {matrix}x{matrix} matrix")]
    DimensionMismatch { items: usize, matrix: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ModelError>;
