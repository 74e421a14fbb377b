//! Sparse lexical retrieval: TF-IDF weighting and a cosine similarity
//! index.

pub mod index;
pub mod vectorizer;

pub use index::{LexicalIndex, LexicalIndexStats};
pub use vectorizer::{TermVector, TfIdfVectorizer};
