//! Top-N selection
//!
//! Picks the N highest-count words from the global map, count descending.

use crate::types::{RankedWord, TopWords, WordCounts};

/// Select the `n` highest-count entries, sorted by count descending.
///
/// The sort is stable, so equal-count words keep whatever order the
/// underlying map yields; callers must not rely on tie order. Fewer than
/// `n` distinct words returns all of them, and an empty map returns an
/// empty list.
pub fn top_n(counts: &WordCounts, n: usize) -> TopWords {
    let mut ranked: TopWords = counts
        .iter()
        .map(|(word, &count)| RankedWord::new(word.clone(), count))
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> WordCounts {
        pairs
            .iter()
            .map(|&(word, count)| (word.to_string(), count))
            .collect()
    }

    #[test]
    fn test_orders_by_count_descending() {
        let top = top_n(&counts(&[("a", 1), ("b", 5), ("c", 3)]), 3);
        let ordered: Vec<(&str, u64)> = top
            .iter()
            .map(|entry| (entry.word.as_str(), entry.count))
            .collect();
        assert_eq!(ordered, vec![("b", 5), ("c", 3), ("a", 1)]);
    }

    #[test]
    fn test_truncates_to_n() {
        let top = top_n(&counts(&[("a", 1), ("b", 5), ("c", 3), ("d", 4)]), 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0], RankedWord::new("b", 5));
        assert_eq!(top[1], RankedWord::new("d", 4));
    }

    #[test]
    fn test_fewer_words_than_n_returns_all() {
        let top = top_n(&counts(&[("a", 2), ("b", 1)]), 10);
        assert_eq!(top.len(), 2);
    }

    #[test]
    fn test_empty_counts_returns_empty_list() {
        assert!(top_n(&WordCounts::default(), 10).is_empty());
    }

    #[test]
    fn test_ties_stay_within_rank_band() {
        // a is the clear winner; b and c tie and may come out in either order.
        let top = top_n(&counts(&[("a", 2), ("b", 1), ("c", 1)]), 2);
        assert_eq!(top[0], RankedWord::new("a", 2));
        assert_eq!(top[1].count, 1);
        assert!(["b", "c"].contains(&top[1].word.as_str()));
    }
}
