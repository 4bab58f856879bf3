//! Document-term matrix construction.

use crate::error::Result;
use crate::table::Table;
use crate::vectorizer::{CountVectorizer, Document};
use tracing::{debug, warn};

/// Minimum fraction of documents a term must appear in to become a column.
pub const DTM_MIN_DF: f64 = 0.05;
/// Maximum fraction of documents a term may appear in to become a column.
pub const DTM_MAX_DF: f64 = 0.95;

/// Builds a document-term matrix for `strings` and joins it to `metadata`.
///
/// The vocabulary holds every term found in at least [`DTM_MIN_DF`] and at
/// most [`DTM_MAX_DF`] of the documents. The result has one row per document:
/// the metadata's index as a leading column, then the metadata columns, then
/// one count column per term in ascending order.
///
/// Rows are matched to `metadata` by position; nothing checks that the two
/// line up. Metadata columns that share a name with a term are not renamed.
///
/// # Errors
///
/// Fails with [`DtmError::EmptyVocabulary`](crate::error::DtmError::EmptyVocabulary)
/// when `strings` is empty or holds no tokens, and with
/// [`DtmError::NoTermsRemain`](crate::error::DtmError::NoTermsRemain) when no
/// term falls within the thresholds, which is always the case for a single
/// document.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use textdtm::prelude::*;
///
/// let metadata = Table::from_columns(vec![
///   ("speaker", vec![json!("a"), json!("b"), json!("c")]),
/// ])
/// .unwrap();
/// let dtm = create_dtm(&["cat dog", "dog bird", "cat bird"], &metadata).unwrap();
///
/// assert_eq!(dtm.column_names(), vec!["index", "speaker", "bird", "cat", "dog"]);
/// assert_eq!(dtm.cell(0, "bird"), Some(&json!(0)));
/// assert_eq!(dtm.cell(0, "cat"), Some(&json!(1)));
/// ```
pub fn create_dtm<S: Document>(strings: &[S], metadata: &Table) -> Result<Table> {
  crate::announce();

  let vectorizer = CountVectorizer::new().min_df(DTM_MIN_DF).max_df(DTM_MAX_DF);
  let counts = vectorizer.fit_transform(strings)?;

  if metadata.n_rows() != counts.n_docs() {
    warn!(
      documents = counts.n_docs(),
      metadata_rows = metadata.n_rows(),
      "metadata row count differs from document count"
    );
  }
  debug!(
    documents = counts.n_docs(),
    terms = counts.n_terms(),
    "built document-term matrix"
  );

  let terms = counts.into_table()?;
  let dtm = metadata.reset_index()?.concat_columns(&terms)?;
  Ok(dtm)
}
