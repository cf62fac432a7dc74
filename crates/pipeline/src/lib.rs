//! Offline preprocessing pipeline: joined records in, similarity model out.
//!
//! This crate provides:
//! - TagExtractor for deriving each movie's tag string
//! - Vocabulary for top-N token selection and count vectorization
//! - SimilarityMatrix for the pairwise cosine matrix
//!
//! ## Architecture
//! The pipeline processes the corpus in stages:
//! 1. TagExtractor turns joined records into tag strings (dropping
//!    malformed records)
//! 2. Vocabulary picks the top 5000 tokens and produces count vectors
//! 3. SimilarityMatrix computes every pairwise cosine score
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{SimilarityMatrix, TagExtractor, Vocabulary, DEFAULT_VOCAB_SIZE};
//!
//! let tagged = TagExtractor::new().extract_all(&records)?;
//! let tags: Vec<&str> = tagged.iter().map(|m| m.tags.as_str()).collect();
//! let vocab = Vocabulary::build(&tags, DEFAULT_VOCAB_SIZE);
//! let matrix = SimilarityMatrix::from_tag_strings(&tags, &vocab);
//! ```

pub mod error;
pub mod similarity;
pub mod tags;
pub mod vocabulary;

// Re-export main types
pub use error::{PipelineError, Result};
pub use similarity::{cosine_similarity, SimilarityMatrix};
pub use tags::{TagExtractor, TaggedMovie};
pub use vocabulary::{Vocabulary, DEFAULT_VOCAB_SIZE};
