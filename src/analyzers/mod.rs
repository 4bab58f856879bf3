//! Text analysis building blocks: tokenizers, stop words and the normalizer.
//!
//! Two tokenizers live here on purpose. [`processtext`] splits on word and
//! punctuation runs, while the [`CountVectorizer`](crate::vectorizer::CountVectorizer)
//! uses the classic "two or more word characters" pattern. Feeding normalized
//! text to the vectorizer works either way; raw text gives different tokens.

/// Stems and filters raw text.
pub mod normalizer;
/// Porter suffix-stripping stemmer.
pub mod porter;
/// The English stop-word list.
pub mod stopwords;
/// Regex-based tokenizers.
pub mod tokenizer;

pub use normalizer::processtext;
pub use porter::PorterStemmer;
pub use tokenizer::{count_tokenize, wordpunct_tokenize};
