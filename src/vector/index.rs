//! Brute-force exact nearest-neighbor index over dense embeddings.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{JavelinError, Result};
use crate::types::{DocId, VectorHit};
use crate::vector::distance::squared_euclidean;

/// Row count above which the scan is parallelized with rayon.
const PARALLEL_SCAN_THRESHOLD: usize = 100;

/// Statistics about a built vector index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorIndexStats {
    /// Number of indexed embeddings.
    pub vectors: usize,
    /// Shared dimensionality of all embeddings.
    pub dimension: usize,
}

/// An immutable, exact k-nearest-neighbor index over dense embeddings.
///
/// Stores one embedding per document, keyed by corpus position, and answers
/// queries with a full scan — exact by construction, and fast enough for the
/// small-to-moderate corpora this engine targets. Built once; queries never
/// mutate it, so concurrent searches need no locking. A corpus change means
/// building a fresh index.
#[derive(Debug, Clone)]
pub struct VectorIndex {
    rows: Vec<Vec<f32>>,
    dimension: usize,
}

impl VectorIndex {
    /// Build an index from one embedding per document, ordered by document id.
    ///
    /// Fails with `EmptyCorpus` when `embeddings` is empty, and with
    /// `DimensionMismatch` when rows disagree on dimensionality. Rows must
    /// contain only finite values.
    pub fn build(embeddings: Vec<Vec<f32>>) -> Result<Self> {
        if embeddings.is_empty() {
            return Err(JavelinError::EmptyCorpus);
        }

        let dimension = embeddings[0].len();
        if dimension == 0 {
            return Err(JavelinError::embedding(
                "embeddings must have a non-zero dimension",
            ));
        }

        for (i, row) in embeddings.iter().enumerate() {
            if row.len() != dimension {
                return Err(JavelinError::dimension_mismatch(dimension, row.len()));
            }
            if !row.iter().all(|v| v.is_finite()) {
                return Err(JavelinError::embedding(format!(
                    "embedding {i} contains a non-finite value"
                )));
            }
        }

        Ok(VectorIndex {
            rows: embeddings,
            dimension,
        })
    }

    /// Find the `k` nearest documents to `query` by squared L2 distance.
    ///
    /// Returns at most `k` hits ordered by ascending distance; equal
    /// distances are ordered by ascending document id, so the output is a
    /// deterministic total order. Fails with `DimensionMismatch` when the
    /// query dimensionality differs from the index.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<VectorHit>> {
        if query.len() != self.dimension {
            return Err(JavelinError::dimension_mismatch(self.dimension, query.len()));
        }

        if k == 0 {
            return Ok(Vec::new());
        }

        let mut hits = self.scan(query)?;

        hits.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then(a.doc_id.cmp(&b.doc_id))
        });
        hits.truncate(k);

        Ok(hits)
    }

    fn scan(&self, query: &[f32]) -> Result<Vec<VectorHit>> {
        if self.rows.len() < PARALLEL_SCAN_THRESHOLD {
            self.rows
                .iter()
                .enumerate()
                .map(|(id, row)| {
                    Ok(VectorHit::new(id as DocId, squared_euclidean(query, row)?))
                })
                .collect()
        } else {
            self.rows
                .par_iter()
                .enumerate()
                .map(|(id, row)| {
                    Ok(VectorHit::new(id as DocId, squared_euclidean(query, row)?))
                })
                .collect()
        }
    }

    /// Number of indexed embeddings.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the index holds no embeddings. Always false for a built
    /// index, since building requires at least one document.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Shared dimensionality of the indexed embeddings.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The stored embedding for a document, if the id is in range.
    pub fn embedding(&self, doc_id: DocId) -> Option<&[f32]> {
        self.rows.get(doc_id as usize).map(|row| row.as_slice())
    }

    /// Statistics about this index.
    pub fn stats(&self) -> VectorIndexStats {
        VectorIndexStats {
            vectors: self.rows.len(),
            dimension: self.dimension,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> VectorIndex {
        VectorIndex::build(vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![0.0, 2.0],
            vec![3.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_build_empty_fails() {
        let result = VectorIndex::build(Vec::new());
        assert!(matches!(result, Err(JavelinError::EmptyCorpus)));
    }

    #[test]
    fn test_build_ragged_rows_fails() {
        let result = VectorIndex::build(vec![vec![1.0, 2.0], vec![1.0]]);
        assert!(matches!(
            result,
            Err(JavelinError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_build_non_finite_fails() {
        let result = VectorIndex::build(vec![vec![1.0, f32::NAN]]);
        assert!(result.is_err());
    }

    #[test]
    fn test_search_ascending_distance() {
        let index = sample_index();
        let hits = index.search(&[0.0, 0.0], 4).unwrap();

        let ids: Vec<DocId> = hits.iter().map(|h| h.doc_id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);

        // Squared distances: 0, 1, 4, 9.
        assert_eq!(hits[0].distance, 0.0);
        assert_eq!(hits[1].distance, 1.0);
        assert_eq!(hits[2].distance, 4.0);
        assert_eq!(hits[3].distance, 9.0);
    }

    #[test]
    fn test_search_truncates_to_k() {
        let index = sample_index();
        let hits = index.search(&[0.0, 0.0], 2).unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_search_k_larger_than_index() {
        let index = sample_index();
        let hits = index.search(&[0.0, 0.0], 100).unwrap();
        assert_eq!(hits.len(), 4);
    }

    #[test]
    fn test_search_k_zero_returns_empty() {
        let index = sample_index();
        let hits = index.search(&[0.0, 0.0], 0).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_search_dimension_mismatch() {
        let index = sample_index();
        let result = index.search(&[0.0, 0.0, 0.0], 2);
        assert!(matches!(
            result,
            Err(JavelinError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_equal_distances_break_ties_by_id() {
        let index = VectorIndex::build(vec![
            vec![1.0, 0.0],
            vec![1.0, 0.0],
            vec![1.0, 0.0],
        ])
        .unwrap();

        let hits = index.search(&[0.0, 0.0], 3).unwrap();
        let ids: Vec<DocId> = hits.iter().map(|h| h.doc_id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_parallel_scan_matches_sequential_ordering() {
        // Enough rows to cross the parallel threshold.
        let rows: Vec<Vec<f32>> = (0..250).map(|i| vec![i as f32, 0.0]).collect();
        let index = VectorIndex::build(rows).unwrap();

        let hits = index.search(&[0.0, 0.0], 5).unwrap();
        let ids: Vec<DocId> = hits.iter().map(|h| h.doc_id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_stats() {
        let index = sample_index();
        let stats = index.stats();
        assert_eq!(stats.vectors, 4);
        assert_eq!(stats.dimension, 2);
    }
}
