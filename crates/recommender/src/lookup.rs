//! Nearest-neighbor title lookup against the similarity model.

use crate::model::SimilarityModel;
use pipeline::TaggedMovie;
use serde::Serialize;
use tracing::debug;

/// Default number of neighbors returned
pub const DEFAULT_RECOMMENDATIONS: usize = 5;

/// One recommended item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub id: u32,
    pub title: String,
}

impl From<&TaggedMovie> for Recommendation {
    fn from(movie: &TaggedMovie) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
        }
    }
}

impl SimilarityModel {
    /// Return up to `k` neighbors of the given title, best first.
    ///
    /// ## Algorithm
    /// 1. Find the first item-table row whose title equals the query
    ///    exactly (case-sensitive, no normalization)
    /// 2. Stable-sort all row indices by that row's similarity scores,
    ///    descending; equal scores keep their original row order
    /// 3. Skip the first ranked row (the query itself at similarity 1.0
    ///    by construction) and take the next `k`
    ///
    /// An unknown title yields an empty Vec; the caller distinguishes
    /// "not found" from "no neighbors" by checking membership first.
    pub fn recommend(&self, title: &str, k: usize) -> Vec<Recommendation> {
        let Some(query_index) = self.movies().iter().position(|m| m.title == title) else {
            debug!(title, "Title not found in item table");
            return Vec::new();
        };

        let scores = self.matrix().row(query_index);

        let mut ranked: Vec<usize> = (0..self.len()).collect();
        ranked.sort_by(|&a, &b| {
            scores[b]
                .partial_cmp(&scores[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        ranked
            .into_iter()
            .skip(1)
            .take(k)
            .map(|i| Recommendation::from(&self.movies()[i]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SimilarityModel;
    use pipeline::{SimilarityMatrix, Vocabulary};

    fn tagged(id: u32, title: &str, tags: &str) -> TaggedMovie {
        TaggedMovie {
            id,
            title: title.to_string(),
            tags: tags.to_string(),
        }
    }

    /// Avatar shares two tokens with Titanic and one with Alien, so its
    /// neighbor ranking is Titanic then Alien.
    fn scenario_model() -> SimilarityModel {
        let movies = vec![
            tagged(1, "Avatar", "epic ocean alien spectacle"),
            tagged(2, "Titanic", "epic ocean romance disaster"),
            tagged(3, "Alien", "alien horror spaceship dread"),
        ];
        let tags: Vec<&str> = movies.iter().map(|m| m.tags.as_str()).collect();
        let vocab = Vocabulary::build(&tags, 100);
        let matrix = SimilarityMatrix::from_tag_strings(&tags, &vocab);
        SimilarityModel::new(movies, matrix).unwrap()
    }

    #[test]
    fn test_ranking_excludes_query() {
        let model = scenario_model();
        let recs = model.recommend("Avatar", 5);

        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].title, "Titanic");
        assert_eq!(recs[1].title, "Alien");
        assert!(recs.iter().all(|r| r.title != "Avatar"));
    }

    #[test]
    fn test_unknown_title_is_empty() {
        let model = scenario_model();
        assert!(model.recommend("Tatanic", 5).is_empty());
        // Case-sensitive: lowercase does not match
        assert!(model.recommend("avatar", 5).is_empty());
    }

    #[test]
    fn test_k_caps_result_length() {
        let model = scenario_model();
        assert_eq!(model.recommend("Avatar", 1).len(), 1);
        assert_eq!(model.recommend("Avatar", 0).len(), 0);
        // k larger than the catalog: everything but the query
        assert_eq!(model.recommend("Avatar", 100).len(), 2);
    }

    #[test]
    fn test_ties_keep_row_order() {
        // Three items with identical scores against the query: their
        // relative order must match the item-table order.
        let movies = vec![
            tagged(10, "Query", "shared"),
            tagged(11, "First", "shared alpha"),
            tagged(12, "Second", "shared alpha"),
            tagged(13, "Third", "shared alpha"),
        ];
        let tags: Vec<&str> = movies.iter().map(|m| m.tags.as_str()).collect();
        let vocab = Vocabulary::build(&tags, 100);
        let matrix = SimilarityMatrix::from_tag_strings(&tags, &vocab);
        let model = SimilarityModel::new(movies, matrix).unwrap();

        let recs = model.recommend("Query", 5);
        let titles: Vec<&str> = recs.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_returns_at_most_five_by_default() {
        let mut movies: Vec<TaggedMovie> = (0..8)
            .map(|i| tagged(i, &format!("Movie {i}"), "common token set"))
            .collect();
        movies[0].tags = "common token set query".to_string();

        let tags: Vec<&str> = movies.iter().map(|m| m.tags.as_str()).collect();
        let vocab = Vocabulary::build(&tags, 100);
        let matrix = SimilarityMatrix::from_tag_strings(&tags, &vocab);
        let model = SimilarityModel::new(movies, matrix).unwrap();

        let recs = model.recommend("Movie 0", DEFAULT_RECOMMENDATIONS);
        assert_eq!(recs.len(), 5);
    }
}
