//! # Javelin
//!
//! A hybrid lexical and vector retrieval engine for Rust.
//!
//! Javelin combines a sparse TF-IDF retriever and a dense embedding
//! retriever into one ranked result list via convex score fusion, and layers
//! a small retrieval-augmented question-answering facade on top.
//!
//! ## Features
//!
//! - Exact brute-force nearest-neighbor search over dense embeddings
//! - TF-IDF cosine similarity search with a pluggable analysis pipeline
//! - Deterministic score fusion with a single tunable weight
//! - Pluggable embedding and answer-generation providers
//! - Lock-free concurrent queries over immutable index snapshots
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use javelin::embedding::HashEmbedder;
//! use javelin::engine::{EngineConfig, RagEngine};
//! use javelin::generation::ExtractiveGenerator;
//!
//! # tokio_test::block_on(async {
//! let engine = RagEngine::new(
//!     EngineConfig::default(),
//!     Arc::new(HashEmbedder::default()),
//!     Arc::new(ExtractiveGenerator::new()),
//! )
//! .unwrap();
//!
//! engine
//!     .index_corpus(vec![
//!         "Aspirin treats headache".to_string(),
//!         "Ibuprofen treats pain".to_string(),
//!     ])
//!     .await
//!     .unwrap();
//!
//! let hits = engine.search("headache").await.unwrap();
//! assert_eq!(hits[0].doc_id, 0);
//! # });
//! ```

pub mod analysis;
pub mod cli;
pub mod embedding;
pub mod engine;
pub mod error;
pub mod eval;
pub mod generation;
pub mod hybrid;
pub mod lexical;
pub mod types;
pub mod vector;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::analysis::{Analyzer, StandardAnalyzer};
    pub use crate::embedding::{HashEmbedder, TextEmbedder};
    pub use crate::engine::{EngineConfig, RagEngine};
    pub use crate::error::{JavelinError, Result};
    pub use crate::generation::{AnswerGenerator, ExtractiveGenerator};
    pub use crate::hybrid::{HybridIndex, HybridRetriever, fuse};
    pub use crate::lexical::LexicalIndex;
    pub use crate::types::{Answer, DocId, Document, ScoredDoc, SearchHit};
    pub use crate::vector::VectorIndex;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
