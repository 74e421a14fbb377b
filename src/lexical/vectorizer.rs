//! TF-IDF vectorizer for sparse lexical scoring.
//!
//! The vectorizer is fitted once over the corpus: it assigns vocabulary
//! indexes in first-encounter order, counts document frequencies, and
//! derives smoothed inverse document frequencies. Queries are weighted with
//! the same vocabulary and idf statistics, so corpus and query vectors live
//! in the same space; query terms outside the vocabulary contribute zero
//! weight and are silently skipped.

use std::collections::HashSet;
use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::Analyzer;
use crate::error::{JavelinError, Result};

/// A sparse idf-weighted term vector.
///
/// Entries are (vocabulary index, weight) pairs sorted by index, with the
/// L2 norm precomputed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TermVector {
    entries: Vec<(usize, f32)>,
    norm: f32,
}

impl TermVector {
    fn from_weights(weights: AHashMap<usize, f32>) -> Self {
        let mut entries: Vec<(usize, f32)> = weights.into_iter().collect();
        entries.sort_by_key(|&(index, _)| index);

        let norm = entries
            .iter()
            .map(|&(_, w)| w * w)
            .sum::<f32>()
            .sqrt();

        TermVector { entries, norm }
    }

    /// Number of non-zero entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the vector has no non-zero entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The L2 norm of the vector.
    pub fn norm(&self) -> f32 {
        self.norm
    }

    /// Dot product with another term vector (merge join over sorted entries).
    pub fn dot(&self, other: &TermVector) -> f32 {
        let mut sum = 0.0;
        let (mut i, mut j) = (0, 0);

        while i < self.entries.len() && j < other.entries.len() {
            let (a_index, a_weight) = self.entries[i];
            let (b_index, b_weight) = other.entries[j];

            match a_index.cmp(&b_index) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_weight * b_weight;
                    i += 1;
                    j += 1;
                }
            }
        }

        sum
    }

    /// Cosine similarity with another term vector.
    ///
    /// In [0, 1] for the non-negative weights TF-IDF produces; 0.0 when
    /// either vector is all-zero.
    pub fn cosine(&self, other: &TermVector) -> f32 {
        if self.norm == 0.0 || other.norm == 0.0 {
            return 0.0;
        }

        (self.dot(other) / (self.norm * other.norm)).clamp(0.0, 1.0)
    }
}

/// TF-IDF vectorizer fitted over a corpus.
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> index, assigned in first-encounter order.
    vocabulary: AHashMap<String, usize>,
    /// Smoothed inverse document frequency per vocabulary index.
    idf: Vec<f32>,
    /// Number of documents the vectorizer was fitted on.
    n_documents: usize,
    /// Analyzer shared by corpus and queries.
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Fit a vectorizer on the corpus, producing an immutable handle.
    ///
    /// Fails with `EmptyCorpus` when `documents` is empty.
    pub fn fit(documents: &[String], analyzer: Arc<dyn Analyzer>) -> Result<Self> {
        if documents.is_empty() {
            return Err(JavelinError::EmptyCorpus);
        }

        let n_documents = documents.len();
        let mut vocabulary: AHashMap<String, usize> = AHashMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();

        // Walk tokens in corpus order so vocabulary indexes are assigned
        // deterministically; count each term at most once per document.
        for doc in documents {
            let mut seen: HashSet<usize> = HashSet::new();
            for token in analyzer.analyze(doc)? {
                let index = match vocabulary.get(&token.text) {
                    Some(&index) => index,
                    None => {
                        let index = vocabulary.len();
                        vocabulary.insert(token.text, index);
                        document_frequency.push(0);
                        index
                    }
                };
                if seen.insert(index) {
                    document_frequency[index] += 1;
                }
            }
        }

        // IDF = ln((N + 1) / (df + 1)) + 1, strictly positive.
        let idf = document_frequency
            .iter()
            .map(|&df| {
                (((n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0) as f32
            })
            .collect();

        Ok(TfIdfVectorizer {
            vocabulary,
            idf,
            n_documents,
            analyzer,
        })
    }

    /// Weight a text into a sparse TF-IDF term vector.
    ///
    /// Term frequency is normalized by the total analyzed token count and
    /// multiplied by the fitted idf. Terms outside the vocabulary are
    /// skipped. An empty or fully out-of-vocabulary text yields an empty
    /// vector.
    pub fn weigh(&self, text: &str) -> Result<TermVector> {
        let tokens: Vec<String> = self.analyzer.analyze(text)?.map(|t| t.text).collect();

        let mut counts: AHashMap<usize, f32> = AHashMap::new();
        for token in &tokens {
            if let Some(&index) = self.vocabulary.get(token.as_str()) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let doc_length = tokens.len() as f32;
        if doc_length > 0.0 {
            for (index, count) in counts.iter_mut() {
                *count = (*count / doc_length) * self.idf[*index];
            }
        }

        Ok(TermVector::from_weights(counts))
    }

    /// Number of terms in the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of documents the vectorizer was fitted on.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// The analyzer shared by corpus and queries.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }
}
