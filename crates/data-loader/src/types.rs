//! Core domain types for the TMDB 5000 dataset.
//!
//! The two source files split a movie's metadata between them:
//! `tmdb_5000_movies.csv` carries the textual columns (overview, genres,
//! keywords), `tmdb_5000_credits.csv` carries cast and crew. Both encode
//! their list-valued columns as JSON strings inside the CSV cell; decoding
//! those is the pipeline crate's job, so the types here keep them as `String`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a movie (the TMDB id)
pub type MovieId = u32;

/// One row of `tmdb_5000_movies.csv`, as deserialized by the CSV reader.
///
/// Optional fields reflect the raw data: some rows ship without an overview,
/// and those are dropped during the join rather than carried forward.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMovie {
    pub id: MovieId,
    pub title: String,
    pub overview: Option<String>,
    pub genres: Option<String>,
    pub keywords: Option<String>,
}

/// One row of `tmdb_5000_credits.csv`.
///
/// The credits file repeats the title column; it is ignored here and the
/// join runs on the movie id, which is the reliable key.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCredits {
    pub movie_id: MovieId,
    pub cast: Option<String>,
    pub crew: Option<String>,
}

/// A fully joined movie record, ready for feature extraction.
///
/// Every field is present and non-empty; rows that could not satisfy that
/// after the join were dropped. The list-valued fields are still
/// JSON-encoded strings exactly as they appear in the source CSVs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    pub overview: String,
    /// JSON list of `{"name": ...}` objects
    pub genres: String,
    /// JSON list of `{"name": ...}` objects
    pub keywords: String,
    /// JSON list of cast members, ordered by billing
    pub cast: String,
    /// JSON list of crew members, each with a `job` field
    pub crew: String,
}
