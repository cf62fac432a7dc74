//! Similarity model persistence and nearest-neighbor lookup.
//!
//! This crate owns the artifact the two halves of the system meet at: the
//! preprocessing CLI writes a `SimilarityModel`, the web server loads it
//! and serves lookups from it.
//!
//! ## Main Components
//!
//! - **model**: SimilarityModel (item table + matrix), bincode save/load
//! - **lookup**: `recommend()` ranking and the Recommendation type
//! - **error**: Error types for persistence
//!
//! ## Example Usage
//!
//! ```ignore
//! use recommender::{SimilarityModel, DEFAULT_RECOMMENDATIONS};
//! use std::path::Path;
//!
//! let model = SimilarityModel::load(Path::new("model.bin"))?;
//! for rec in model.recommend("Avatar", DEFAULT_RECOMMENDATIONS) {
//!     println!("{} ({})", rec.title, rec.id);
//! }
//! ```

pub mod error;
pub mod lookup;
pub mod model;

// Re-export commonly used types for convenience
pub use error::{ModelError, Result};
pub use lookup::{Recommendation, DEFAULT_RECOMMENDATIONS};
pub use model::SimilarityModel;
