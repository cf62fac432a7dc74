//! Pairwise cosine similarity over count vectors.
//!
//! The matrix is square, symmetric, and stored flat in row-major order.
//! Only the upper triangle is computed; the lower triangle is mirrored so
//! symmetry holds bitwise, and the diagonal is set to 1.0 for every item
//! with a nonzero vector.

use crate::vocabulary::Vocabulary;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Vectors with a norm below this are treated as zero
const NORM_EPSILON: f32 = 1e-12;

/// Compute cosine similarity between two vectors.
///
/// ## Algorithm
/// cos(a, b) = (a . b) / (||a|| x ||b||)
///
/// # Returns
/// * Cosine similarity clamped to [0, 1] (count vectors are nonnegative)
/// * 0.0 when either vector has (near-)zero norm
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a < NORM_EPSILON || norm_b < NORM_EPSILON {
        return 0.0;
    }

    // Clamping absorbs floating point drift like 1.0000001
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// N x N similarity matrix; row i corresponds to item-table row i.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    n: usize,
    /// Row-major entries, length n * n
    data: Vec<f32>,
}

impl SimilarityMatrix {
    /// Build the matrix from one count vector per item.
    ///
    /// Upper-triangle entries are computed in parallel (one rayon task per
    /// row); each is then mirrored below the diagonal. The computation is
    /// deterministic: every entry is an independent fixed-order reduction.
    pub fn from_vectors(vectors: &[Vec<f32>]) -> Self {
        let n = vectors.len();

        let norms: Vec<f32> = vectors
            .iter()
            .map(|v| v.iter().map(|x| x * x).sum::<f32>().sqrt())
            .collect();

        // rows[i] holds entries (i, i+1..n)
        let rows: Vec<Vec<f32>> = (0..n)
            .into_par_iter()
            .map(|i| {
                ((i + 1)..n)
                    .map(|j| cosine_similarity(&vectors[i], &vectors[j]))
                    .collect()
            })
            .collect();

        let mut data = vec![0.0f32; n * n];
        for i in 0..n {
            data[i * n + i] = if norms[i] < NORM_EPSILON { 0.0 } else { 1.0 };
            for (offset, &score) in rows[i].iter().enumerate() {
                let j = i + 1 + offset;
                data[i * n + j] = score;
                data[j * n + i] = score;
            }
        }

        Self { n, data }
    }

    /// Vectorize every tag string against the vocabulary and build the
    /// matrix in one step.
    pub fn from_tag_strings<S: AsRef<str> + Sync>(corpus: &[S], vocab: &Vocabulary) -> Self {
        let vectors: Vec<Vec<f32>> = corpus
            .par_iter()
            .map(|tags| vocab.vectorize(tags.as_ref()))
            .collect();
        Self::from_vectors(&vectors)
    }

    /// Matrix dimension (the item count)
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarity scores of item `i` against every item, including itself
    ///
    /// # Panics
    /// Panics if `i >= len()`, like slice indexing.
    pub fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Single entry (i, j)
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.data[i * self.n + j]
    }
}
