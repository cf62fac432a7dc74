//! The persisted similarity model.
//!
//! The item table and the similarity matrix live in one artifact because
//! they share an index space: matrix row i scores item-table row i against
//! everything else. Persisting them separately would let the two drift,
//! so they are serialized together with bincode and validated on load.

use crate::error::{ModelError, Result};
use pipeline::{SimilarityMatrix, TaggedMovie};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Item table plus similarity matrix, the single source of truth for serving.
///
/// Immutable after construction; serving code only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityModel {
    movies: Vec<TaggedMovie>,
    matrix: SimilarityMatrix,
}

impl SimilarityModel {
    /// Assemble a model, checking that the matrix dimension matches the
    /// item count.
    pub fn new(movies: Vec<TaggedMovie>, matrix: SimilarityMatrix) -> Result<Self> {
        if movies.len() != matrix.len() {
            return Err(ModelError::DimensionMismatch {
                items: movies.len(),
                matrix: matrix.len(),
            });
        }
        Ok(Self { movies, matrix })
    }

    /// Serialize the model to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let bytes = bincode::serialize(self)?;
        std::fs::write(path, bytes)?;
        info!(
            path = %path.display(),
            items = self.movies.len(),
            "Saved similarity model"
        );
        Ok(())
    }

    /// Load and validate a model from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let model: SimilarityModel = bincode::deserialize(&bytes)?;
        if model.movies.len() != model.matrix.len() {
            return Err(ModelError::DimensionMismatch {
                items: model.movies.len(),
                matrix: model.matrix.len(),
            });
        }
        info!(
            path = %path.display(),
            items = model.movies.len(),
            "Loaded similarity model"
        );
        Ok(model)
    }

    /// Number of items in the model
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Item-table rows in index order
    pub fn movies(&self) -> &[TaggedMovie] {
        &self.movies
    }

    /// The similarity matrix (row order matches `movies()`)
    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    /// All titles in item-table row order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.movies.iter().map(|m| m.title.as_str())
    }

    /// All titles sorted alphabetically, for input assistance
    pub fn titles_sorted(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = self.titles().collect();
        titles.sort_unstable();
        titles
    }

    /// Exact, case-sensitive title membership check
    pub fn contains_title(&self, title: &str) -> bool {
        self.movies.iter().any(|m| m.title == title)
    }
}
