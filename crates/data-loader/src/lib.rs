//! # Data Loader Crate
//!
//! This crate handles loading and joining the TMDB 5000 dataset.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (RawMovie, RawCredits, MovieRecord)
//! - **loader**: Parse the two CSV files and inner-join them on movie id
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::load_records;
//! use std::path::Path;
//!
//! let records = load_records(
//!     Path::new("data/tmdb_5000_movies.csv"),
//!     Path::new("data/tmdb_5000_credits.csv"),
//! )?;
//!
//! println!("Loaded {} joined movie records", records.len());
//! ```

// Public modules
pub mod error;
pub mod loader;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use loader::load_records;
pub use types::{MovieId, MovieRecord, RawCredits, RawMovie};
