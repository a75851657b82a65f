//! Core data types for the word-frequency pipeline
//!
//! This module provides the count maps flowing through the map and reduce
//! steps and the ranked entries produced by top-N selection. Count maps use
//! `FxHashMap` for fast lookups during counting.

use std::fmt;

use rustc_hash::FxHashMap;

/// Mapping from lowercased word to occurrence count.
///
/// Produced once per chunk by the map step; the reduce step merges the
/// per-chunk maps into a single global map of the same type.
pub type WordCounts = FxHashMap<String, u64>;

/// A word and its global occurrence count, produced by top-N selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedWord {
    /// The lowercased word.
    pub word: String,
    /// How many times the word occurs across the whole corpus.
    pub count: u64,
}

impl RankedWord {
    /// Create a ranked entry.
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl fmt::Display for RankedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, self.count)
    }
}

/// The ranked prefix of the global counts: at most N entries, sorted by
/// count descending. Entries with equal counts are unordered relative to
/// each other.
pub type TopWords = Vec<RankedWord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_word_display() {
        assert_eq!(RankedWord::new("the", 3).to_string(), "the: 3");
    }

    #[test]
    fn test_ranked_word_equality() {
        assert_eq!(RankedWord::new("cat", 2), RankedWord::new("cat", 2));
        assert_ne!(RankedWord::new("cat", 2), RankedWord::new("cat", 3));
        assert_ne!(RankedWord::new("cat", 2), RankedWord::new("mat", 2));
    }
}
