//! Count aggregation: shuffle and reduce
//!
//! The shuffle groups every word's per-chunk contributions; the reduce sums
//! each group into the global count. Summation is associative and
//! commutative, so merge order never matters as long as every chunk's map
//! is consumed exactly once.

use rustc_hash::FxHashMap;

use crate::types::WordCounts;

/// Group per-chunk counts by word.
///
/// Chunks that do not contain a word contribute nothing to its group, not a
/// zero, so a group's length is the number of chunks the word appears in.
pub fn group_by_word(parts: Vec<WordCounts>) -> FxHashMap<String, Vec<u64>> {
    let mut groups: FxHashMap<String, Vec<u64>> = FxHashMap::default();
    for part in parts {
        for (word, count) in part {
            groups.entry(word).or_default().push(count);
        }
    }
    groups
}

/// Sum each word's grouped contributions into its global count.
pub fn sum_groups(groups: FxHashMap<String, Vec<u64>>) -> WordCounts {
    groups
        .into_iter()
        .map(|(word, counts)| (word, counts.iter().sum()))
        .collect()
}

/// Merge per-chunk counts into the global map: shuffle, then reduce.
pub fn merge_counts(parts: Vec<WordCounts>) -> WordCounts {
    sum_groups(group_by_word(parts))
}
