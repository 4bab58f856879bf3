//! Count vectorization: learn a vocabulary and count its terms per document.
//!
//! A [`CountVectorizer`] is the configuration. Fitting it on a corpus keeps the
//! terms whose document frequency lies within `[min_df, max_df]` and yields a
//! [`FittedCountVectorizer`], which turns documents into a dense
//! [`CountMatrix`].

use crate::analyzers::tokenizer::{count_tokenize, term_frequencies};
use crate::error::{DtmError, Result, TableError};
use crate::table::Table;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::{debug, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A document the vectorizer can read.
#[cfg(feature = "parallel")]
pub trait Document: AsRef<str> + Send + Sync {}
#[cfg(feature = "parallel")]
impl<T: AsRef<str> + Send + Sync> Document for T {}

/// A document the vectorizer can read.
#[cfg(not(feature = "parallel"))]
pub trait Document: AsRef<str> {}
#[cfg(not(feature = "parallel"))]
impl<T: AsRef<str>> Document for T {}

/// A document-frequency threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DocumentFrequency {
  /// A fraction of the corpus, in `[0, 1]`.
  Relative(f64),
  /// An absolute number of documents.
  Absolute(usize),
}

impl DocumentFrequency {
  fn validate(self) -> Result<()> {
    match self {
      Self::Relative(f) if !(0.0..=1.0).contains(&f) => Err(DtmError::InvalidDocumentFrequency(f)),
      _ => Ok(()),
    }
  }

  /// The threshold expressed as a number of documents out of `n_docs`.
  pub fn bound(self, n_docs: usize) -> f64 {
    match self {
      Self::Relative(f) => f * n_docs as f64,
      Self::Absolute(n) => n as f64,
    }
  }
}

impl From<f64> for DocumentFrequency {
  fn from(value: f64) -> Self {
    Self::Relative(value)
  }
}

impl From<usize> for DocumentFrequency {
  fn from(value: usize) -> Self {
    Self::Absolute(value)
  }
}

fn default_min_df() -> DocumentFrequency {
  DocumentFrequency::Absolute(1)
}

fn default_max_df() -> DocumentFrequency {
  DocumentFrequency::Relative(1.0)
}

fn default_lowercase() -> bool {
  true
}

/// Configuration for learning a vocabulary from a corpus.
///
/// Documents are lowercased (unless disabled) and split into words of two or
/// more word characters. A term enters the vocabulary when the number of
/// documents containing it is at least `min_df` and at most `max_df`.
///
/// # Examples
///
/// ```rust
/// use textdtm::prelude::*;
///
/// let counts = CountVectorizer::new()
///   .max_df(0.95)
///   .fit_transform(&["cat dog", "dog bird", "cat bird"])
///   .unwrap();
/// assert_eq!(counts.vocabulary(), &["bird", "cat", "dog"]);
/// assert_eq!(counts.rows()[0], vec![0, 1, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountVectorizer {
  /// Minimum document frequency for a term to be kept.
  #[serde(default = "default_min_df")]
  pub min_df: DocumentFrequency,
  /// Maximum document frequency for a term to be kept.
  #[serde(default = "default_max_df")]
  pub max_df: DocumentFrequency,
  /// Lowercase documents before tokenizing.
  #[serde(default = "default_lowercase")]
  pub lowercase: bool,
}

impl Default for CountVectorizer {
  fn default() -> Self {
    Self {
      min_df: default_min_df(),
      max_df: default_max_df(),
      lowercase: default_lowercase(),
    }
  }
}

impl CountVectorizer {
  /// Creates a vectorizer that keeps every term seen at least once.
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the minimum document frequency.
  pub fn min_df(mut self, min_df: impl Into<DocumentFrequency>) -> Self {
    self.min_df = min_df.into();
    self
  }

  /// Set the maximum document frequency.
  pub fn max_df(mut self, max_df: impl Into<DocumentFrequency>) -> Self {
    self.max_df = max_df.into();
    self
  }

  /// Enable or disable lowercasing.
  pub fn lowercase(mut self, lowercase: bool) -> Self {
    self.lowercase = lowercase;
    self
  }

  /// Learns the vocabulary of `documents`.
  ///
  /// # Errors
  ///
  /// * [`DtmError::InvalidDocumentFrequency`] if a relative threshold is outside `[0, 1]`.
  /// * [`DtmError::EmptyVocabulary`] if no document contains a single token.
  /// * [`DtmError::ThresholdsInverted`] if `max_df` allows fewer documents than `min_df`.
  /// * [`DtmError::NoTermsRemain`] if every term falls outside the thresholds.
  pub fn fit<S: Document>(&self, documents: &[S]) -> Result<FittedCountVectorizer> {
    self.min_df.validate()?;
    self.max_df.validate()?;

    let n_docs = documents.len();
    let doc_freq = self.document_frequencies(documents);
    if doc_freq.is_empty() {
      return Err(DtmError::EmptyVocabulary);
    }

    let low = self.min_df.bound(n_docs);
    let high = self.max_df.bound(n_docs);
    if high < low {
      return Err(DtmError::ThresholdsInverted);
    }

    let seen = doc_freq.len();
    let mut vocabulary: Vec<String> = doc_freq
      .into_iter()
      .filter(|(_, df)| (*df as f64) >= low && (*df as f64) <= high)
      .map(|(term, _)| term)
      .collect();

    if vocabulary.is_empty() {
      warn!(documents = n_docs, terms = seen, min = low, max = high, "all terms pruned");
      return Err(DtmError::NoTermsRemain);
    }

    vocabulary.sort_unstable();
    debug!(
      documents = n_docs,
      terms = seen,
      kept = vocabulary.len(),
      "fitted vocabulary"
    );

    Ok(FittedCountVectorizer::new(vocabulary, self.lowercase))
  }

  /// Fits on `documents` and counts the vocabulary in those same documents.
  pub fn fit_transform<S: Document>(&self, documents: &[S]) -> Result<CountMatrix> {
    Ok(self.fit(documents)?.transform(documents))
  }

  /// Number of documents each term occurs in.
  fn document_frequencies<S: Document>(&self, documents: &[S]) -> HashMap<String, usize> {
    let mut doc_freq: HashMap<String, usize> = HashMap::new();

    for document in documents {
      let text = prepare(document.as_ref(), self.lowercase);
      for term in term_frequencies(&text).into_keys() {
        match doc_freq.get_mut(term) {
          Some(df) => *df += 1,
          None => {
            doc_freq.insert(term.to_string(), 1);
          }
        }
      }
    }

    doc_freq
  }
}

fn prepare(document: &str, lowercase: bool) -> Cow<'_, str> {
  if lowercase {
    Cow::Owned(document.to_lowercase())
  } else {
    Cow::Borrowed(document)
  }
}

/// A learned vocabulary that can count its terms in any document.
#[derive(Debug, Clone)]
pub struct FittedCountVectorizer {
  vocabulary: Vec<String>,
  positions: HashMap<String, usize>,
  lowercase: bool,
}

impl FittedCountVectorizer {
  fn new(vocabulary: Vec<String>, lowercase: bool) -> Self {
    let positions = vocabulary
      .iter()
      .enumerate()
      .map(|(i, term)| (term.clone(), i))
      .collect();

    Self {
      vocabulary,
      positions,
      lowercase,
    }
  }

  /// The vocabulary in column order (ascending).
  pub fn vocabulary(&self) -> &[String] {
    &self.vocabulary
  }

  /// Number of vocabulary terms.
  pub fn n_terms(&self) -> usize {
    self.vocabulary.len()
  }

  /// Counts vocabulary terms in each document. Terms outside the vocabulary
  /// are ignored.
  pub fn transform<S: Document>(&self, documents: &[S]) -> CountMatrix {
    #[cfg(feature = "parallel")]
    let iter = documents.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = documents.iter();

    let rows: Vec<Vec<usize>> = iter.map(|doc| self.count_row(doc.as_ref())).collect();

    CountMatrix {
      vocabulary: self.vocabulary.clone(),
      rows,
    }
  }

  fn count_row(&self, document: &str) -> Vec<usize> {
    let mut row = vec![0; self.vocabulary.len()];
    let text = prepare(document, self.lowercase);

    for token in count_tokenize(&text) {
      if let Some(&col) = self.positions.get(token) {
        row[col] += 1;
      }
    }

    row
  }
}

/// Dense term counts: one row per document, one column per vocabulary term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountMatrix {
  vocabulary: Vec<String>,
  rows: Vec<Vec<usize>>,
}

impl CountMatrix {
  /// The column terms.
  pub fn vocabulary(&self) -> &[String] {
    &self.vocabulary
  }

  /// The count rows, in document order.
  pub fn rows(&self) -> &[Vec<usize>] {
    &self.rows
  }

  pub fn n_docs(&self) -> usize {
    self.rows.len()
  }

  pub fn n_terms(&self) -> usize {
    self.vocabulary.len()
  }

  /// Count of `term` in document `doc`.
  pub fn get(&self, doc: usize, term: &str) -> Option<usize> {
    let col = self.vocabulary.iter().position(|t| t == term)?;
    self.rows.get(doc).map(|row| row[col])
  }

  /// Converts the counts into a table with one integer column per term and a
  /// `0..n` index.
  pub fn into_table(self) -> Result<Table, TableError> {
    let mut table = Table::with_row_count(self.rows.len());
    for (col, term) in self.vocabulary.into_iter().enumerate() {
      let values = self
        .rows
        .iter()
        .map(|row| Value::from(row[col] as u64))
        .collect();
      table.push_column(term, values)?;
    }
    Ok(table)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_fit_sorts_vocabulary() {
    let fitted = CountVectorizer::new()
      .fit(&["zebra apple", "mango apple"])
      .unwrap();
    assert_eq!(fitted.vocabulary(), &["apple", "mango", "zebra"]);
    assert_eq!(fitted.n_terms(), 3);
  }

  #[test]
  fn test_transform_counts_repeats_and_ignores_unknown() {
    let fitted = CountVectorizer::new().fit(&["cat dog", "dog dog"]).unwrap();
    let counts = fitted.transform(&["dog cat dog owl"]);
    assert_eq!(counts.rows(), &[vec![1, 2]]);
    assert_eq!(counts.get(0, "dog"), Some(2));
    assert_eq!(counts.get(0, "owl"), None);
  }

  #[test]
  fn test_lowercase_by_default() {
    let counts = CountVectorizer::new().fit_transform(&["Cat CAT cat"]).unwrap();
    assert_eq!(counts.vocabulary(), &["cat"]);
    assert_eq!(counts.rows(), &[vec![3]]);

    let counts = CountVectorizer::new()
      .lowercase(false)
      .fit_transform(&["Cat cat"])
      .unwrap();
    assert_eq!(counts.vocabulary(), &["Cat", "cat"]);
  }

  #[test]
  fn test_relative_thresholds() {
    let docs = ["common rare", "common", "common", "common other"];
    let counts = CountVectorizer::new()
      .min_df(0.3)
      .max_df(0.9)
      .fit_transform(&docs);
    // "common" is in every document, "rare" and "other" in 25%.
    assert_eq!(counts, Err(DtmError::NoTermsRemain));

    let counts = CountVectorizer::new().max_df(0.9).fit_transform(&docs).unwrap();
    assert_eq!(counts.vocabulary(), &["other", "rare"]);
  }

  #[test]
  fn test_absolute_thresholds() {
    let docs = ["alpha beta", "alpha gamma", "alpha beta"];
    let counts = CountVectorizer::new()
      .min_df(DocumentFrequency::Absolute(2))
      .fit_transform(&docs)
      .unwrap();
    assert_eq!(counts.vocabulary(), &["alpha", "beta"]);
  }

  #[test]
  fn test_fit_errors() {
    let empty: [&str; 0] = [];
    assert_eq!(
      CountVectorizer::new().fit(&empty).unwrap_err(),
      DtmError::EmptyVocabulary
    );
    assert_eq!(
      CountVectorizer::new().fit(&["a", "? !"]).unwrap_err(),
      DtmError::EmptyVocabulary
    );
    assert_eq!(
      CountVectorizer::new()
        .min_df(0.8)
        .max_df(0.2)
        .fit(&["one two"])
        .unwrap_err(),
      DtmError::ThresholdsInverted
    );
    assert_eq!(
      CountVectorizer::new().max_df(1.5).fit(&["one"]).unwrap_err(),
      DtmError::InvalidDocumentFrequency(1.5)
    );
  }

  #[test]
  fn test_into_table() {
    let table = CountVectorizer::new()
      .fit_transform(&["cat dog", "dog"])
      .unwrap()
      .into_table()
      .unwrap();
    assert_eq!(table.column_names(), vec!["cat", "dog"]);
    assert_eq!(table.column("cat").unwrap(), &[json!(1), json!(0)]);
    assert_eq!(table.column("dog").unwrap(), &[json!(1), json!(1)]);
  }

  #[test]
  fn test_config_deserializes_with_defaults() {
    let vectorizer: CountVectorizer =
      serde_json::from_str(r#"{"max_df":{"Relative":0.95}}"#).unwrap();
    assert_eq!(vectorizer, CountVectorizer::new().max_df(0.95));
  }
}
