//! Score fusion for hybrid search results.

use ahash::AHashMap;

use crate::error::{JavelinError, Result};
use crate::types::{DocId, ScoredDoc};

/// Validate a fusion weight.
///
/// `alpha` must be a finite value in the closed interval [0, 1]; anything
/// else fails with `InvalidAlpha`.
pub fn validate_alpha(alpha: f32) -> Result<()> {
    if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
        return Err(JavelinError::InvalidAlpha(alpha));
    }
    Ok(())
}

/// Merge a dense and a sparse ranked list into one ranking.
///
/// Every document in the union of the two candidate sets receives
/// `alpha * dense_score + (1 - alpha) * sparse_score`, with 0 substituted
/// for the score of a retriever that did not return the document. The same
/// formula covers the whole alpha range, so `alpha = 1.0` reproduces the
/// dense ranking and `alpha = 0.0` the sparse one rather than going through
/// special-cased paths.
///
/// The output is ordered by descending fused score with ties broken by
/// ascending document id, and truncated to `top_k` strictly after sorting;
/// truncating either input list before fusion would bias the union toward
/// one retriever.
pub fn fuse(
    dense: &[ScoredDoc],
    sparse: &[ScoredDoc],
    alpha: f32,
    top_k: usize,
) -> Result<Vec<ScoredDoc>> {
    validate_alpha(alpha)?;

    let mut fused: AHashMap<DocId, f32> = AHashMap::with_capacity(dense.len() + sparse.len());

    for hit in dense {
        *fused.entry(hit.doc_id).or_insert(0.0) += alpha * hit.score;
    }
    for hit in sparse {
        *fused.entry(hit.doc_id).or_insert(0.0) += (1.0 - alpha) * hit.score;
    }

    let mut results: Vec<ScoredDoc> = fused
        .into_iter()
        .map(|(doc_id, score)| ScoredDoc::new(doc_id, score))
        .collect();

    results.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(a.doc_id.cmp(&b.doc_id))
    });
    results.truncate(top_k);

    Ok(results)
}
