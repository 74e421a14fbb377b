//! Core data types shared across the retrieval pipeline.
//!
//! Documents are identified by their position in the corpus at index build
//! time. Scores carry different semantics depending on which retriever
//! produced them (cosine similarity, distance-derived similarity, or a fused
//! combination), so each stage has its own result type.

use serde::{Deserialize, Serialize};

/// Identifier of a document: its position in the corpus at index build time.
pub type DocId = u64;

/// An immutable corpus entry: a stable identifier plus the original text.
///
/// Documents are created once when a corpus is indexed and never mutated;
/// a corpus change means a full index rebuild with fresh documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Position of the document in the corpus.
    pub id: DocId,
    /// The original text body.
    pub text: String,
}

impl Document {
    /// Create a new document.
    pub fn new<S: Into<String>>(id: DocId, text: S) -> Self {
        Document {
            id,
            text: text.into(),
        }
    }
}

/// A (document, relevance score) pair.
///
/// Score semantics depend on the producer: cosine similarity for lexical
/// results, `1 / (1 + distance)` for dense results converted for fusion, and
/// the convex combination of the two for fused results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredDoc {
    /// Document identifier.
    pub doc_id: DocId,
    /// Relevance score.
    pub score: f32,
}

impl ScoredDoc {
    /// Create a new scored document.
    pub fn new(doc_id: DocId, score: f32) -> Self {
        ScoredDoc { doc_id, score }
    }
}

/// A dense nearest-neighbor hit: document plus squared L2 distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorHit {
    /// Document identifier.
    pub doc_id: DocId,
    /// Squared Euclidean distance from the query vector.
    pub distance: f32,
}

impl VectorHit {
    /// Create a new vector hit.
    pub fn new(doc_id: DocId, distance: f32) -> Self {
        VectorHit { doc_id, distance }
    }
}

/// A fused search hit enriched with the document text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Document identifier.
    pub doc_id: DocId,
    /// Fused relevance score.
    pub score: f32,
    /// Text of the matching document.
    pub text: String,
}

impl SearchHit {
    /// Create a new search hit.
    pub fn new<S: Into<String>>(doc_id: DocId, score: f32, text: S) -> Self {
        SearchHit {
            doc_id,
            score,
            text: text.into(),
        }
    }
}

/// An answer produced by the generation provider, with the hits that
/// supplied its context in fused-rank order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// The generated answer text.
    pub text: String,
    /// The retrieved hits whose texts formed the context.
    pub hits: Vec<SearchHit>,
}
