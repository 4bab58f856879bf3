//! textdtm - text normalization and document-term matrices.
//!
//! Two entry points cover the usual preprocessing step of a text analysis:
//!
//! - [`processtext`](analyzers::normalizer::processtext) turns a raw string
//!   into space-joined, lowercased, stemmed tokens with stop words removed.
//! - [`create_dtm`](dtm::create_dtm) counts terms across a set of documents
//!   and joins the counts to a metadata [`Table`](table::Table).
//!
//! ```rust
//! use serde_json::json;
//! use textdtm::prelude::*;
//!
//! let stop = stopwords::english();
//! let docs: Vec<String> = [
//!   "The cats were sleeping.",
//!   "Dogs chase cats!",
//!   "A dog and a bird.",
//! ]
//! .iter()
//! .map(|text| processtext(text, &stop))
//! .collect();
//! assert_eq!(docs[0], "the cat sleep");
//!
//! let metadata = Table::from_columns(vec![("id", vec![json!(7), json!(8), json!(9)])]).unwrap();
//! let dtm = create_dtm(&docs, &metadata).unwrap();
//! assert_eq!(dtm.cell(1, "cat"), Some(&json!(1)));
//! ```

use std::sync::Once;

pub mod analyzers;
pub mod dtm;
pub mod error;
pub mod table;
pub mod vectorizer;

pub mod prelude {
    //! Convenient re-exports for common types and functions.

    pub use crate::analyzers::stopwords;
    pub use crate::analyzers::tokenizer::{count_tokenize, wordpunct_tokenize};
    pub use crate::analyzers::normalizer::processtext;
    pub use crate::analyzers::porter::PorterStemmer;
    pub use crate::dtm::*;
    pub use crate::error::{DtmError, TableError};
    pub use crate::table::*;
    pub use crate::vectorizer::*;
}

pub use analyzers::normalizer::processtext;
pub use dtm::create_dtm;

static LOADED: Once = Once::new();

// Logged once per process, on first use of either entry point.
pub(crate) fn announce() {
  LOADED.call_once(|| tracing::info!("read in text preprocessing functions"));
}
