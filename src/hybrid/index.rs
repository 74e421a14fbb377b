//! The immutable pair of indexes a hybrid search runs against.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::Analyzer;
use crate::embedding::TextEmbedder;
use crate::error::{JavelinError, Result};
use crate::lexical::LexicalIndex;
use crate::types::{DocId, Document};
use crate::vector::VectorIndex;

/// Statistics about a built hybrid index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HybridIndexStats {
    /// Number of indexed documents.
    pub documents: usize,
    /// Number of terms in the lexical vocabulary.
    pub vocabulary: usize,
    /// Dimensionality of the dense embeddings.
    pub dimension: usize,
}

/// An immutable snapshot of the corpus with both indexes built over it.
///
/// Built once per corpus: one batch call to the embedding provider feeds the
/// vector index, the texts feed the lexical index, and the documents are
/// kept for result enrichment. Queries never mutate a built index, so a
/// snapshot can be shared behind an `Arc` and searched concurrently without
/// locking; a corpus change means building a fresh snapshot and swapping it
/// in.
#[derive(Debug)]
pub struct HybridIndex {
    documents: Vec<Document>,
    vector: VectorIndex,
    lexical: LexicalIndex,
}

impl HybridIndex {
    /// Build a snapshot over the corpus texts.
    ///
    /// Embeds the whole corpus with a single `embed_batch` call, then builds
    /// both indexes. Fails with `EmptyCorpus` when `texts` is empty and with
    /// an embedding error when the provider returns the wrong number of
    /// vectors.
    pub async fn build(
        texts: Vec<String>,
        embedder: &dyn TextEmbedder,
        analyzer: Arc<dyn Analyzer>,
    ) -> Result<Self> {
        if texts.is_empty() {
            return Err(JavelinError::EmptyCorpus);
        }

        let embeddings = embedder.embed_batch(&texts).await?;
        if embeddings.len() != texts.len() {
            return Err(JavelinError::embedding(format!(
                "provider returned {} vectors for {} texts",
                embeddings.len(),
                texts.len()
            )));
        }

        let vector = VectorIndex::build(embeddings)?;
        let lexical = LexicalIndex::build(&texts, analyzer)?;

        let documents = texts
            .into_iter()
            .enumerate()
            .map(|(id, text)| Document { id: id as DocId, text })
            .collect();

        Ok(HybridIndex {
            documents,
            vector,
            lexical,
        })
    }

    /// The dense index.
    pub fn vector(&self) -> &VectorIndex {
        &self.vector
    }

    /// The sparse index.
    pub fn lexical(&self) -> &LexicalIndex {
        &self.lexical
    }

    /// The indexed document with the given id, if it exists.
    pub fn document(&self, doc_id: DocId) -> Option<&Document> {
        self.documents.get(doc_id as usize)
    }

    /// All indexed documents in id order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the snapshot holds no documents. Always false for a built
    /// snapshot.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Statistics about this snapshot.
    pub fn stats(&self) -> HybridIndexStats {
        HybridIndexStats {
            documents: self.documents.len(),
            vocabulary: self.lexical.vocabulary_size(),
            dimension: self.vector.dimension(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::StandardAnalyzer;
    use crate::embedding::HashEmbedder;

    fn corpus() -> Vec<String> {
        vec![
            "aspirin treats headache".to_string(),
            "ibuprofen treats pain".to_string(),
        ]
    }

    #[tokio::test]
    async fn test_build_indexes_both_sides() {
        let embedder = HashEmbedder::new(16);
        let index = HybridIndex::build(corpus(), &embedder, Arc::new(StandardAnalyzer::new()))
            .await
            .unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.vector().len(), 2);
        assert_eq!(index.lexical().len(), 2);
        assert_eq!(index.vector().dimension(), 16);
    }

    #[tokio::test]
    async fn test_build_empty_corpus_fails() {
        let embedder = HashEmbedder::new(16);
        let result =
            HybridIndex::build(Vec::new(), &embedder, Arc::new(StandardAnalyzer::new())).await;
        assert!(matches!(result, Err(JavelinError::EmptyCorpus)));
    }

    #[tokio::test]
    async fn test_documents_keep_corpus_order() {
        let embedder = HashEmbedder::new(16);
        let index = HybridIndex::build(corpus(), &embedder, Arc::new(StandardAnalyzer::new()))
            .await
            .unwrap();

        assert_eq!(index.document(0).unwrap().text, "aspirin treats headache");
        assert_eq!(index.document(1).unwrap().text, "ibuprofen treats pain");
        assert!(index.document(2).is_none());
    }

    #[tokio::test]
    async fn test_stats() {
        let embedder = HashEmbedder::new(16);
        let index = HybridIndex::build(corpus(), &embedder, Arc::new(StandardAnalyzer::new()))
            .await
            .unwrap();

        let stats = index.stats();
        assert_eq!(stats.documents, 2);
        assert_eq!(stats.dimension, 16);
        assert_eq!(stats.vocabulary, 5);
    }
}
