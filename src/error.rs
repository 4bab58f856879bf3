//! Error types for vocabulary fitting and table assembly.

use thiserror::Error;

/// Errors raised while assembling or aligning a [`Table`](crate::table::Table).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
  #[error("column `{column}` has {found} rows, expected {expected}")]
  LengthMismatch {
    column: String,
    expected: usize,
    found: usize,
  },
  #[error("index has {found} labels, expected {expected}")]
  IndexLength { expected: usize, found: usize },
  #[error("cannot align tables on an index with duplicate label {0}")]
  DuplicateIndex(String),
  #[error("cannot insert column `{0}`, already exists")]
  DuplicateColumn(String),
  #[error("record {0} does not serialize to an object")]
  NotARecord(usize),
  #[error("failed to serialize record: {0}")]
  Serialize(String),
}

/// Errors raised while fitting a vocabulary or building a document-term matrix.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DtmError {
  #[error("empty vocabulary; perhaps the documents only contain stop words")]
  EmptyVocabulary,
  #[error("after pruning, no terms remain; try a lower min_df or a higher max_df")]
  NoTermsRemain,
  #[error("max_df corresponds to fewer documents than min_df")]
  ThresholdsInverted,
  #[error("relative document frequency {0} is outside [0, 1]")]
  InvalidDocumentFrequency(f64),
  #[error("table error: {0}")]
  Table(#[from] TableError),
}

pub type Result<T, E = DtmError> = std::result::Result<T, E>;
