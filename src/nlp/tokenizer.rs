//! Word tokenization
//!
//! Splits text into lowercase word tokens. A token is a maximal run of word
//! characters (letters, digits, underscore); everything between tokens is a
//! delimiter and never appears in the output.

use regex::Regex;

/// Pattern matching a maximal run of word characters.
const WORD_PATTERN: &str = r"\w+";

/// Splits text into lowercase word tokens.
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    word_re: Regex,
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl WordTokenizer {
    /// Create a tokenizer with the standard word pattern.
    pub fn new() -> Self {
        Self {
            word_re: Regex::new(WORD_PATTERN).expect("word pattern compiles"),
        }
    }

    /// Iterate over the lowercase tokens of `text`.
    ///
    /// Tokens come out in document order. No normalization is applied beyond
    /// lowercasing; empty or delimiter-only input yields nothing.
    pub fn tokens<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        self.word_re
            .find_iter(text)
            .map(|found| found.as_str().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens_of(text: &str) -> Vec<String> {
        WordTokenizer::new().tokens(text).collect()
    }

    #[test]
    fn test_lowercases_tokens() {
        assert_eq!(tokens_of("The CAT Sat"), vec!["the", "cat", "sat"]);
    }

    #[test]
    fn test_punctuation_is_delimiter() {
        assert_eq!(tokens_of("cat, mat. ran!"), vec!["cat", "mat", "ran"]);
    }

    #[test]
    fn test_digits_and_underscore_are_word_characters() {
        assert_eq!(
            tokens_of("chapter_2 begins 42 times"),
            vec!["chapter_2", "begins", "42", "times"]
        );
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(tokens_of("").is_empty());
    }

    #[test]
    fn test_delimiter_only_input_yields_nothing() {
        assert!(tokens_of("... --- !!! \n\t").is_empty());
    }

    #[test]
    fn test_accented_words() {
        assert_eq!(tokens_of("Élan & Würde"), vec!["élan", "würde"]);
    }
}
