//! TF-IDF cosine similarity index over a document corpus.

use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::Analyzer;
use crate::error::{JavelinError, Result};
use crate::lexical::vectorizer::{TermVector, TfIdfVectorizer};
use crate::types::{DocId, ScoredDoc};

/// Document count above which scoring is parallelized with rayon.
const PARALLEL_SCAN_THRESHOLD: usize = 100;

/// Statistics about a built lexical index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexicalIndexStats {
    /// Number of indexed documents.
    pub documents: usize,
    /// Number of terms in the fitted vocabulary.
    pub vocabulary: usize,
}

/// An immutable TF-IDF index over document texts.
///
/// Built once from the corpus: the vectorizer is fitted and every document
/// is weighted into a sparse term vector up front, so queries only weight
/// the query text and compute cosines. Queries never mutate the index, so
/// concurrent searches need no locking. A corpus change means building a
/// fresh index.
#[derive(Debug)]
pub struct LexicalIndex {
    vectorizer: TfIdfVectorizer,
    doc_vectors: Vec<TermVector>,
}

impl LexicalIndex {
    /// Build an index over the corpus texts, ordered by document id.
    ///
    /// Fails with `EmptyCorpus` when `corpus` is empty.
    pub fn build(corpus: &[String], analyzer: Arc<dyn Analyzer>) -> Result<Self> {
        if corpus.is_empty() {
            return Err(JavelinError::EmptyCorpus);
        }

        let vectorizer = TfIdfVectorizer::fit(corpus, analyzer)?;
        let doc_vectors = corpus
            .iter()
            .map(|text| vectorizer.weigh(text))
            .collect::<Result<Vec<_>>>()?;

        Ok(LexicalIndex {
            vectorizer,
            doc_vectors,
        })
    }

    /// Find up to `k` documents by descending cosine similarity to `query`.
    ///
    /// The query is weighted with the fitted vocabulary and idf statistics;
    /// out-of-vocabulary query terms contribute zero weight. Documents with
    /// zero similarity are omitted, so an empty or fully out-of-vocabulary
    /// query returns an empty list rather than an error. Equal similarities
    /// are ordered by ascending document id.
    pub fn search(&self, query: &str, k: usize) -> Result<Vec<ScoredDoc>> {
        if k == 0 {
            return Ok(Vec::new());
        }

        let query_vector = self.vectorizer.weigh(query)?;
        if query_vector.is_empty() {
            return Ok(Vec::new());
        }

        let mut hits = self.score(&query_vector);

        hits.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then(a.doc_id.cmp(&b.doc_id))
        });
        hits.truncate(k);

        Ok(hits)
    }

    fn score(&self, query_vector: &TermVector) -> Vec<ScoredDoc> {
        let score_one = |(id, doc_vector): (usize, &TermVector)| {
            let score = query_vector.cosine(doc_vector);
            (score > 0.0).then(|| ScoredDoc::new(id as DocId, score))
        };

        if self.doc_vectors.len() < PARALLEL_SCAN_THRESHOLD {
            self.doc_vectors
                .iter()
                .enumerate()
                .filter_map(score_one)
                .collect()
        } else {
            self.doc_vectors
                .par_iter()
                .enumerate()
                .filter_map(score_one)
                .collect()
        }
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.doc_vectors.len()
    }

    /// Whether the index holds no documents. Always false for a built
    /// index, since building requires at least one document.
    pub fn is_empty(&self) -> bool {
        self.doc_vectors.is_empty()
    }

    /// Number of terms in the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }

    /// The fitted vectorizer shared by corpus and queries.
    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }

    /// Statistics about this index.
    pub fn stats(&self) -> LexicalIndexStats {
        LexicalIndexStats {
            documents: self.doc_vectors.len(),
            vocabulary: self.vectorizer.vocabulary_size(),
        }
    }
}
