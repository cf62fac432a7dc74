//! Tag-string extraction from joined movie records.
//!
//! A tag string is the textual fingerprint of a movie: overview words,
//! genre names, keyword names, the top-3 billed cast names, and the
//! director's name, space-joined, lowercased, and stemmed. Multi-word
//! names have their internal spaces removed first so each name-phrase
//! survives tokenization as a single token ("Tom Hanks" → "tomhank").

use crate::error::{PipelineError, Result};
use data_loader::{MovieId, MovieRecord};
use rayon::prelude::*;
use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// How many leading cast members contribute to the tag string
const TOP_CAST: usize = 3;

/// A movie reduced to the three columns the model persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedMovie {
    pub id: MovieId,
    pub title: String,
    pub tags: String,
}

/// An element of the genres/keywords/cast JSON lists
#[derive(Debug, Deserialize)]
struct NamedEntry {
    name: String,
}

/// An element of the crew JSON list
#[derive(Debug, Deserialize)]
struct CrewEntry {
    name: String,
    job: String,
}

/// Builds tag strings from joined records.
///
/// Holds the Snowball stemmer so it is constructed once per batch, not
/// once per record. The extractor is stateless otherwise and safe to share
/// across rayon workers.
pub struct TagExtractor {
    stemmer: Stemmer,
}

impl TagExtractor {
    /// Create a new extractor with an English stemmer.
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Extract the tag string for a single record.
    ///
    /// # Returns
    /// * `Ok(TaggedMovie)` - The record with its derived tag string
    /// * `Err(PipelineError::MalformedField)` - Any JSON list column failed
    ///   to decode; the caller drops the record
    pub fn extract(&self, record: &MovieRecord) -> Result<TaggedMovie> {
        let genres = parse_names(record.id, "genres", &record.genres)?;
        let keywords = parse_names(record.id, "keywords", &record.keywords)?;
        let cast = parse_top_cast(record.id, &record.cast)?;
        let director = parse_director(record.id, &record.crew)?;

        // Overview is split on whitespace with no decoding; names have
        // already had their internal spaces squashed.
        let mut parts: Vec<&str> = record.overview.split_whitespace().collect();
        parts.extend(genres.iter().map(String::as_str));
        parts.extend(keywords.iter().map(String::as_str));
        parts.extend(cast.iter().map(String::as_str));
        parts.extend(director.iter().map(String::as_str));

        let joined = parts.join(" ").to_lowercase();
        let tags = self.stem_words(&joined);

        Ok(TaggedMovie {
            id: record.id,
            title: record.title.clone(),
            tags,
        })
    }

    /// Extract tag strings for a whole batch, dropping malformed records.
    ///
    /// Drops are counted in aggregate and logged; individual failures are
    /// only visible at debug level.
    pub fn extract_all(&self, records: &[MovieRecord]) -> Result<Vec<TaggedMovie>> {
        let results: Vec<Result<TaggedMovie>> =
            records.par_iter().map(|r| self.extract(r)).collect();

        let mut tagged = Vec::with_capacity(results.len());
        let mut dropped = 0usize;
        for result in results {
            match result {
                Ok(movie) => tagged.push(movie),
                Err(e) => {
                    debug!("Dropping record: {e}");
                    dropped += 1;
                }
            }
        }

        info!(tagged = tagged.len(), dropped, "Extracted tag strings");

        if tagged.is_empty() {
            return Err(PipelineError::EmptyCorpus);
        }
        Ok(tagged)
    }

    /// Replace every whitespace-delimited word with its English stem.
    fn stem_words(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|word| self.stemmer.stem(word).into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for TagExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a JSON list of `{"name": ...}` objects into squashed names,
/// preserving the original order.
fn parse_names(id: MovieId, field: &'static str, json: &str) -> Result<Vec<String>> {
    let entries: Vec<NamedEntry> =
        serde_json::from_str(json).map_err(|source| PipelineError::MalformedField {
            id,
            field,
            source,
        })?;
    Ok(entries.into_iter().map(|e| squash(&e.name)).collect())
}

/// Decode the cast list, keeping only the first three names.
fn parse_top_cast(id: MovieId, json: &str) -> Result<Vec<String>> {
    let entries: Vec<NamedEntry> =
        serde_json::from_str(json).map_err(|source| PipelineError::MalformedField {
            id,
            field: "cast",
            source,
        })?;
    Ok(entries
        .into_iter()
        .take(TOP_CAST)
        .map(|e| squash(&e.name))
        .collect())
}

/// Decode the crew list and pick the first entry whose job is "Director".
///
/// Returns an empty Vec when no director is credited; the tag string simply
/// gains no director token in that case.
fn parse_director(id: MovieId, json: &str) -> Result<Vec<String>> {
    let entries: Vec<CrewEntry> =
        serde_json::from_str(json).map_err(|source| PipelineError::MalformedField {
            id,
            field: "crew",
            source,
        })?;
    Ok(entries
        .into_iter()
        .find(|e| e.job == "Director")
        .map(|e| vec![squash(&e.name)])
        .unwrap_or_default())
}

/// Remove internal spaces so a multi-word name becomes a single token.
fn squash(name: &str) -> String {
    name.replace(' ', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> MovieRecord {
        MovieRecord {
            id: 19995,
            title: "Avatar".to_string(),
            overview: "In the 22nd century a paraplegic Marine is dispatched".to_string(),
            genres: r#"[{"name": "Action"}, {"name": "Science Fiction"}]"#.to_string(),
            keywords: r#"[{"name": "culture clash"}, {"name": "future"}]"#.to_string(),
            cast: r#"[
                {"name": "Sam Worthington"},
                {"name": "Zoe Saldana"},
                {"name": "Sigourney Weaver"},
                {"name": "Stephen Lang"}
            ]"#
            .to_string(),
            crew: r#"[
                {"name": "Stephen E. Rivkin", "job": "Editor"},
                {"name": "James Cameron", "job": "Director"}
            ]"#
            .to_string(),
        }
    }

    #[test]
    fn test_names_are_squashed_and_lowercased() {
        let tagged = TagExtractor::new().extract(&sample_record()).unwrap();
        assert!(tagged.tags.contains("samworthington"));
        assert!(tagged.tags.contains("jamescameron"));
        assert!(tagged.tags.contains("sciencefict") || tagged.tags.contains("sciencefiction"));
        // No multi-word phrase survives as separate tokens
        assert!(!tagged.tags.contains("sam worthington"));
    }

    #[test]
    fn test_cast_capped_at_three() {
        let tagged = TagExtractor::new().extract(&sample_record()).unwrap();
        // Stephen Lang is billed fourth and must not appear
        assert!(!tagged.tags.contains("stephenlang"));
        assert!(tagged.tags.contains("sigourneyweav") || tagged.tags.contains("sigourneyweaver"));
    }

    #[test]
    fn test_director_selection() {
        let tagged = TagExtractor::new().extract(&sample_record()).unwrap();
        // The editor is not the director
        assert!(!tagged.tags.to_lowercase().contains("rivkin"));
    }

    #[test]
    fn test_missing_director_is_not_an_error() {
        let mut record = sample_record();
        record.crew = r#"[{"name": "Someone", "job": "Editor"}]"#.to_string();
        let tagged = TagExtractor::new().extract(&record).unwrap();
        // No director token is contributed, and the editor is still excluded
        assert!(!tagged.tags.contains("someone"));
    }

    #[test]
    fn test_stemming_applied() {
        let mut record = sample_record();
        record.overview = "running jumps happily".to_string();
        let tagged = TagExtractor::new().extract(&record).unwrap();
        assert!(tagged.tags.starts_with("run jump happili"));
    }

    #[test]
    fn test_malformed_json_drops_record() {
        let mut record = sample_record();
        record.genres = "not json at all".to_string();
        let err = TagExtractor::new().extract(&record).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MalformedField { field: "genres", .. }
        ));
    }

    #[test]
    fn test_extract_all_drops_only_bad_records() {
        let good = sample_record();
        let mut bad = sample_record();
        bad.id = 1;
        bad.cast = "[broken".to_string();

        let tagged = TagExtractor::new()
            .extract_all(&[good.clone(), bad])
            .unwrap();
        assert_eq!(tagged.len(), 1);
        assert_eq!(tagged[0].id, good.id);
    }
}
