//! Text tokenization utilities.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

// Runs of word characters, or runs of anything that is neither a word
// character nor whitespace.
static WORD_PUNCT: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\w+|[^\w\s]+").expect("word/punct pattern is valid"));

// Words of at least two word characters.
static COUNT_TOKEN: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("count token pattern is valid"));

/// Split text into word tokens and punctuation tokens.
///
/// Punctuation is kept: `"can't stop."` yields `["can", "'", "t", "stop", "."]`.
/// Case is left untouched.
///
/// `\w` follows Unicode and includes every combining mark, unlike Python's
/// `re`, where a mark is neither a word character nor alphanumeric. A
/// decomposed `"cafe\u{301}"` therefore stays one token instead of splitting
/// into `"cafe"` and the accent.
pub fn wordpunct_tokenize(text: &str) -> Vec<&str> {
  WORD_PUNCT.find_iter(text).map(|m| m.as_str()).collect()
}

/// Split text into the words a count vectorizer considers.
///
/// Single characters and punctuation are dropped. Case is left untouched, so
/// callers that want case-insensitive counts must lowercase first.
pub fn count_tokenize(text: &str) -> Vec<&str> {
  COUNT_TOKEN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Calculate term frequencies for a text, using [`count_tokenize`].
pub fn term_frequencies(text: &str) -> HashMap<&str, usize> {
  let mut freqs = HashMap::new();

  for token in count_tokenize(text) {
    *freqs.entry(token).or_insert(0) += 1;
  }

  freqs
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_wordpunct_tokenize() {
    let tokens = wordpunct_tokenize("Hello, World! This isn't a test...");
    assert_eq!(
      tokens,
      vec!["Hello", ",", "World", "!", "This", "isn", "'", "t", "a", "test", "..."]
    );
  }

  #[test]
  fn test_wordpunct_keeps_combining_marks_in_words() {
    assert_eq!(wordpunct_tokenize("cafe\u{301} x"), vec!["cafe\u{301}", "x"]);
    assert_eq!(wordpunct_tokenize("हिंदी!"), vec!["हिंदी", "!"]);
  }

  #[test]
  fn test_wordpunct_keeps_digits_and_underscores_in_words() {
    let tokens = wordpunct_tokenize("x_1 2024 ;-)");
    assert_eq!(tokens, vec!["x_1", "2024", ";-)"]);
  }

  #[test]
  fn test_wordpunct_empty() {
    assert!(wordpunct_tokenize("").is_empty());
    assert!(wordpunct_tokenize("  \n\t ").is_empty());
  }

  #[test]
  fn test_count_tokenize_drops_short_tokens() {
    let tokens = count_tokenize("a cat, an owl & I");
    assert_eq!(tokens, vec!["cat", "an", "owl"]);
  }

  #[test]
  fn test_count_tokenize_splits_on_punctuation() {
    let tokens = count_tokenize("state-of-the-art e.g. don't");
    assert_eq!(tokens, vec!["state", "of", "the", "art", "don"]);
  }

  #[test]
  fn test_term_frequencies() {
    let freqs = term_frequencies("the quick brown fox jumps over the lazy dog");
    assert_eq!(freqs.get("the"), Some(&2));
    assert_eq!(freqs.get("quick"), Some(&1));
    assert_eq!(freqs.get("brown"), Some(&1));
  }
}
