//! Loading and joining the two TMDB CSV files.
//!
//! The movies file and the credits file are parsed independently, then
//! inner-joined on the movie id. Rows missing a required field after the
//! join (most commonly the overview) are dropped in a single null-drop
//! pass; drops are counted in aggregate and logged, never reported
//! individually.

use crate::error::{DataLoadError, Result};
use crate::types::{MovieRecord, RawCredits, RawMovie};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Parse the movies CSV into raw rows.
pub fn parse_movies(path: &Path) -> Result<Vec<RawMovie>> {
    let mut reader = open_reader(path)?;
    let mut movies = Vec::new();
    for result in reader.deserialize() {
        let record: RawMovie = result.map_err(|e| DataLoadError::CsvError {
            file: path.display().to_string(),
            source: e,
        })?;
        movies.push(record);
    }
    Ok(movies)
}

/// Parse the credits CSV into raw rows.
pub fn parse_credits(path: &Path) -> Result<Vec<RawCredits>> {
    let mut reader = open_reader(path)?;
    let mut credits = Vec::new();
    for result in reader.deserialize() {
        let record: RawCredits = result.map_err(|e| DataLoadError::CsvError {
            file: path.display().to_string(),
            source: e,
        })?;
        credits.push(record);
    }
    Ok(credits)
}

/// Load both CSV files and inner-join them on the movie id.
///
/// Join rules:
/// - A movie without a matching credits row is dropped, and vice versa.
/// - Rows where any required field is missing or empty after the join are
///   dropped (the null-drop pass).
/// - The output preserves the row order of the movies file, which becomes
///   the index space shared with the similarity matrix downstream.
pub fn load_records(movies_path: &Path, credits_path: &Path) -> Result<Vec<MovieRecord>> {
    info!(
        movies = %movies_path.display(),
        credits = %credits_path.display(),
        "Loading TMDB dataset"
    );

    let movies = parse_movies(movies_path)?;
    let credits = parse_credits(credits_path)?;

    let credits_by_id: HashMap<_, _> = credits.into_iter().map(|c| (c.movie_id, c)).collect();

    let total = movies.len();
    let mut records = Vec::with_capacity(total);
    let mut dropped = 0usize;

    for movie in movies {
        match join_row(&movie, credits_by_id.get(&movie.id)) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    info!(
        loaded = records.len(),
        dropped, "Joined movie and credits datasets"
    );

    if records.is_empty() {
        return Err(DataLoadError::ValidationError(format!(
            "no usable records after joining {total} movie rows"
        )));
    }

    Ok(records)
}

/// Join a single movie row with its credits, applying the null-drop pass.
///
/// Returns `None` when the credits row is missing or any required field is
/// absent or empty.
fn join_row(movie: &RawMovie, credits: Option<&RawCredits>) -> Option<MovieRecord> {
    let credits = credits?;

    let overview = non_empty(movie.overview.as_deref())?;
    let genres = non_empty(movie.genres.as_deref())?;
    let keywords = non_empty(movie.keywords.as_deref())?;
    let cast = non_empty(credits.cast.as_deref())?;
    let crew = non_empty(credits.crew.as_deref())?;

    if movie.title.is_empty() {
        debug!(id = movie.id, "Dropping row with empty title");
        return None;
    }

    Some(MovieRecord {
        id: movie.id,
        title: movie.title.clone(),
        overview,
        genres,
        keywords,
        cast,
        crew,
    })
}

fn non_empty(field: Option<&str>) -> Option<String> {
    match field {
        Some(s) if !s.trim().is_empty() => Some(s.to_string()),
        _ => None,
    }
}

fn open_reader(path: &Path) -> Result<csv::Reader<Box<dyn Read>>> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let file = std::fs::File::open(path)?;
    Ok(csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(Box::new(file) as Box<dyn Read>))
}
