//! Vocabulary construction and count vectorization.
//!
//! The vocabulary is the top-N tokens across all tag strings by corpus-wide
//! frequency, after removing English stop words. Selection is deterministic:
//! ties at the cutoff are broken lexicographically, so two runs over the
//! same corpus always produce the same vocabulary and therefore the same
//! similarity matrix.

use std::collections::{HashMap, HashSet};

/// Default vocabulary size, matching the model this system reproduces
pub const DEFAULT_VOCAB_SIZE: usize = 5000;

/// A fixed token-to-position mapping built once per preprocessing run.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Tokens in index order; position defines the vector dimension
    terms: Vec<String>,
    /// Reverse lookup from token to vector position
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary from a corpus of tag strings.
    ///
    /// # Arguments
    /// * `corpus` - One tag string per item
    /// * `max_terms` - Keep at most this many tokens (top by frequency)
    ///
    /// ## Algorithm
    /// 1. Tokenize every tag string on whitespace
    /// 2. Drop English stop words
    /// 3. Count corpus-wide token frequencies
    /// 4. Keep the `max_terms` most frequent tokens, ties broken by token
    ///    (ascending) for determinism
    pub fn build<S: AsRef<str>>(corpus: &[S], max_terms: usize) -> Self {
        let stop_words: HashSet<String> = stop_words::get(stop_words::LANGUAGE::English)
            .into_iter()
            .collect();

        let mut counts: HashMap<&str, u64> = HashMap::new();
        for tags in corpus {
            for token in tags.as_ref().split_whitespace() {
                if stop_words.contains(token) {
                    continue;
                }
                *counts.entry(token).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(&str, u64)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(max_terms);

        let terms: Vec<String> = ranked.into_iter().map(|(t, _)| t.to_string()).collect();
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();

        Self { terms, index }
    }

    /// Produce the count vector for one tag string.
    ///
    /// Tokens outside the vocabulary contribute nothing; absent vocabulary
    /// tokens stay at 0.
    pub fn vectorize(&self, tags: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.terms.len()];
        for token in tags.split_whitespace() {
            if let Some(&i) = self.index.get(token) {
                vector[i] += 1.0;
            }
        }
        vector
    }

    /// Number of tokens in the vocabulary (the vector dimension)
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether a token made it into the vocabulary
    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_n_by_frequency() {
        let corpus = vec![
            "alien alien alien ship",
            "alien ship ship crew",
            "crew alien",
        ];
        let vocab = Vocabulary::build(&corpus, 2);

        assert_eq!(vocab.len(), 2);
        assert!(vocab.contains("alien")); // 5 occurrences
        assert!(vocab.contains("ship")); // 3 occurrences
        assert!(!vocab.contains("crew")); // 2, below the cutoff
    }

    #[test]
    fn test_stop_words_excluded() {
        let corpus = vec!["the the the the alien", "a an of alien"];
        let vocab = Vocabulary::build(&corpus, 10);

        assert!(vocab.contains("alien"));
        assert!(!vocab.contains("the"));
        assert!(!vocab.contains("of"));
    }

    #[test]
    fn test_vectorize_counts() {
        let corpus = vec!["alien ship", "ship crew"];
        let vocab = Vocabulary::build(&corpus, 10);

        let v = vocab.vectorize("ship ship alien unknown");
        let total: f32 = v.iter().sum();
        // "unknown" is out of vocabulary and contributes nothing
        assert_eq!(total, 3.0);
        assert!(v.iter().any(|&c| c == 2.0)); // ship counted twice
    }

    #[test]
    fn test_deterministic_tie_break() {
        let corpus = vec!["zebra apple", "zebra apple"];
        let a = Vocabulary::build(&corpus, 1);
        let b = Vocabulary::build(&corpus, 1);

        // Equal counts: the lexicographically smaller token wins, every run
        assert!(a.contains("apple"));
        assert!(!a.contains("zebra"));
        assert_eq!(a.len(), b.len());
        assert!(b.contains("apple"));
    }

    #[test]
    fn test_empty_corpus() {
        let corpus: Vec<&str> = Vec::new();
        let vocab = Vocabulary::build(&corpus, 100);
        assert!(vocab.is_empty());
        assert!(vocab.vectorize("anything").is_empty());
    }
}
