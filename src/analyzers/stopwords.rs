//! The standard English stop-word list.
//!
//! This is the list shipped with the NLTK stopwords corpus. It is all
//! lower-case, so capitalized variants (a sentence-initial "The") are not
//! matched by [`processtext`](crate::analyzers::normalizer::processtext).

use std::collections::HashSet;

/// English stop words, lower-case.
pub const ENGLISH: &[&str] = &[
  "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
  "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
  "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
  "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
  "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
  "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
  "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
  "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
  "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
  "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
  "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
  "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
  "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
  "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
  "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
  "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
  "wouldn't",
];

/// Returns the English stop words as a set, ready to pass as a stop list.
pub fn english() -> HashSet<&'static str> {
  ENGLISH.iter().copied().collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_english_has_no_duplicates() {
    assert_eq!(ENGLISH.len(), 179);
    assert_eq!(english().len(), ENGLISH.len());
  }

  #[test]
  fn test_english_is_lowercase() {
    assert!(ENGLISH.iter().all(|w| w.to_lowercase() == *w));
    assert!(english().contains("the"));
    assert!(!english().contains("The"));
  }
}
