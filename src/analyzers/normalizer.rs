//! Normalizes raw text into a string of stemmed tokens.

use crate::analyzers::porter::PorterStemmer;
use crate::analyzers::tokenizer::wordpunct_tokenize;
use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::Hash;

/// Tokens shorter than this many characters are dropped.
pub const MIN_TOKEN_CHARS: usize = 3;

/// Normalize `text` into a space-joined string of stemmed tokens.
///
/// The pipeline, in order:
///
/// 1. split into word and punctuation tokens ([`wordpunct_tokenize`]),
/// 2. drop tokens found verbatim in `stop_list`,
/// 3. lowercase, keeping only purely alphabetic tokens of at least
///    [`MIN_TOKEN_CHARS`] characters,
/// 4. stem with the [`PorterStemmer`],
/// 5. join with single spaces.
///
/// Stop words are matched before lowercasing, so `"The"` survives a stop list
/// that only contains `"the"`.
///
/// "Alphabetic" is Unicode's `Alphabetic` property, which is wider than
/// Python's `str.isalpha`: marks that carry it, such as Devanagari vowel
/// signs, count as letters, so `"हिंदी"` is kept whole.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use textdtm::prelude::*;
///
/// let stop: HashSet<&str> = ["the"].into_iter().collect();
/// assert_eq!(processtext("The Cat sat", &stop), "the cat sat");
/// assert_eq!(processtext("a bb ccc", &HashSet::<&str>::new()), "ccc");
/// ```
pub fn processtext<S>(text: &str, stop_list: &HashSet<S>) -> String
where
  S: Borrow<str> + Eq + Hash,
{
  crate::announce();

  let stemmer = PorterStemmer::new();

  wordpunct_tokenize(text)
    .into_iter()
    .filter(|token| !stop_list.contains(*token))
    .filter_map(|token| {
      let lower = token.to_lowercase();
      if token.chars().count() >= MIN_TOKEN_CHARS && lower.chars().all(char::is_alphabetic) {
        Some(stemmer.stem(&lower))
      } else {
        None
      }
    })
    .collect::<Vec<_>>()
    .join(" ")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::analyzers::stopwords;

  fn no_stops() -> HashSet<&'static str> {
    HashSet::new()
  }

  #[test]
  fn test_case_sensitive_stop_list() {
    let stop: HashSet<&str> = ["the"].into_iter().collect();
    assert_eq!(processtext("The Cat sat", &stop), "the cat sat");
  }

  #[test]
  fn test_lowercase_stop_word_removed() {
    let stop: HashSet<String> = ["the".to_string()].into_iter().collect();
    assert_eq!(processtext("the cat", &stop), "cat");
  }

  #[test]
  fn test_short_tokens_dropped() {
    assert_eq!(processtext("a bb ccc", &no_stops()), "ccc");
  }

  #[test]
  fn test_punctuation_and_digits_dropped() {
    assert_eq!(processtext("cats, 2024 dogs!!! abc123 ...", &no_stops()), "cat dog");
  }

  #[test]
  fn test_stems_tokens() {
    assert_eq!(
      processtext("The dogs were running, and the cats jumped!", &stopwords::english()),
      "the dog run cat jump"
    );
  }

  #[test]
  fn test_porter_forms() {
    assert_eq!(processtext("Quickly generous fairly", &no_stops()), "quickli gener fairli");
    assert_eq!(
      processtext("Generously and fairly", &stopwords::english()),
      "gener fairli"
    );
  }

  #[test]
  fn test_alphabetic_marks_are_letters() {
    assert_eq!(processtext("हिंदी bar", &no_stops()), "हिंदी bar");
  }

  #[test]
  fn test_contractions_split() {
    // "don't" splits into "don", "'", "t"; only "don" is long enough.
    assert_eq!(processtext("don't", &no_stops()), "don");
    assert_eq!(processtext("don't", &stopwords::english()), "");
  }

  #[test]
  fn test_empty_input() {
    assert_eq!(processtext("", &no_stops()), "");
    assert_eq!(processtext("   ", &stopwords::english()), "");
  }

  #[test]
  fn test_deterministic() {
    let text = "Running quickly through the connected gardens";
    let first = processtext(text, &no_stops());
    let second = processtext(text, &no_stops());
    assert_eq!(first, second);
  }

  #[test]
  fn test_idempotent_on_minimal_stems() {
    let once = processtext("cats dogs jumping", &no_stops());
    assert_eq!(once, "cat dog jump");
    assert_eq!(processtext(&once, &no_stops()), once);
  }
}
