//! Per-chunk word counting, the map step
//!
//! Each worker runs [`WordCounter::count`] over its own chunk. The counter
//! is a pure function of the chunk text: no shared state, no side effects,
//! so any number of counters can run concurrently.

use crate::nlp::tokenizer::WordTokenizer;
use crate::types::WordCounts;

/// Counts word occurrences within a single chunk.
#[derive(Debug, Clone, Default)]
pub struct WordCounter {
    tokenizer: WordTokenizer,
}

impl WordCounter {
    /// Create a counter with the standard tokenizer.
    pub fn new() -> Self {
        Self {
            tokenizer: WordTokenizer::new(),
        }
    }

    /// Tally every token of `chunk` into a fresh count map.
    ///
    /// An empty or delimiter-only chunk produces an empty map.
    pub fn count(&self, chunk: &str) -> WordCounts {
        let mut counts = WordCounts::default();
        for token in self.tokenizer.tokens(chunk) {
            *counts.entry(token).or_insert(0) += 1;
        }
        counts
    }
}
