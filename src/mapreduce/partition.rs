//! Corpus partitioning
//!
//! Divides the corpus into one contiguous chunk per worker. Boundaries are
//! computed by character arithmetic and returned as byte ranges, so slicing
//! never lands inside a multi-byte UTF-8 sequence. The split depends only on
//! the character count and the worker count, never on the text content.

use std::ops::Range;

/// Split `text` into `workers` contiguous byte ranges.
///
/// Every chunk but the last spans `floor(char_count / workers)` characters;
/// the last chunk absorbs the remainder. The ranges cover `text` exactly
/// once, in order. When `workers` exceeds the character count every chunk
/// but the last is empty. Empty text (or `workers == 0`) yields no chunks.
pub fn chunk_ranges(text: &str, workers: usize) -> Vec<Range<usize>> {
    if text.is_empty() || workers == 0 {
        return Vec::new();
    }

    let char_count = text.chars().count();
    let chunk_size = char_count / workers;

    // Byte offset where each chunk starts, found by walking char positions.
    let mut starts = Vec::with_capacity(workers);
    starts.push(0);

    if chunk_size == 0 {
        // More workers than characters: empty leading chunks, the final
        // chunk takes the whole text.
        starts.resize(workers, 0);
    } else {
        let mut next_cut = chunk_size;
        for (position, (byte_idx, _)) in text.char_indices().enumerate() {
            if starts.len() == workers {
                break;
            }
            if position == next_cut {
                starts.push(byte_idx);
                next_cut += chunk_size;
            }
        }
    }

    (0..workers)
        .map(|i| {
            let start = starts[i];
            let end = if i + 1 < workers {
                starts[i + 1]
            } else {
                text.len()
            };
            start..end
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_covers_exactly(text: &str, ranges: &[Range<usize>]) {
        assert_eq!(ranges.first().map(|r| r.start), Some(0));
        assert_eq!(ranges.last().map(|r| r.end), Some(text.len()));
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].end, pair[1].start, "chunks must be contiguous");
        }
        let rebuilt: String = ranges.iter().map(|r| &text[r.clone()]).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_single_worker_takes_everything() {
        let text = "the cat sat on the mat";
        assert_eq!(chunk_ranges(text, 1), vec![0..text.len()]);
    }

    #[test]
    fn test_covers_text_for_assorted_worker_counts() {
        let text = "The quick brown fox jumps over the lazy dog";
        for workers in [1, 2, 3, 4, 7, 16] {
            let ranges = chunk_ranges(text, workers);
            assert_eq!(ranges.len(), workers);
            assert_covers_exactly(text, &ranges);
        }
    }

    #[test]
    fn test_remainder_goes_to_last_chunk() {
        // 10 chars over 4 workers: 2 + 2 + 2 + 4.
        let ranges = chunk_ranges("abcdefghij", 4);
        let sizes: Vec<usize> = ranges.iter().map(|r| r.end - r.start).collect();
        assert_eq!(sizes, vec![2, 2, 2, 4]);
    }

    #[test]
    fn test_more_workers_than_chars() {
        let ranges = chunk_ranges("ab", 5);
        assert_eq!(ranges.len(), 5);
        for range in &ranges[..4] {
            assert!(range.is_empty());
        }
        assert_eq!(ranges[4], 0..2);
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        assert!(chunk_ranges("", 4).is_empty());
    }

    #[test]
    fn test_boundaries_respect_utf8() {
        let text = "héllo wörld, naïve café beaux";
        for workers in [2, 3, 5] {
            let ranges = chunk_ranges(text, workers);
            for range in &ranges {
                assert!(text.is_char_boundary(range.start));
                assert!(text.is_char_boundary(range.end));
            }
            assert_covers_exactly(text, &ranges);
        }
    }

    #[test]
    fn test_deterministic() {
        let text = "some words repeated some words";
        assert_eq!(chunk_ranges(text, 3), chunk_ranges(text, 3));
    }
}
