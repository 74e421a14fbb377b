//! The hybrid retriever: one query in, one fused ranking out.

use std::sync::Arc;
use std::time::Instant;

use log::debug;
use parking_lot::RwLock;

use crate::embedding::TextEmbedder;
use crate::error::Result;
use crate::hybrid::fuser;
use crate::hybrid::index::HybridIndex;
use crate::types::ScoredDoc;
use crate::vector::similarity_from_distance;

/// Orchestrates a hybrid search: embed the query once, run the dense and
/// sparse searches over the current index snapshot, and fuse the two ranked
/// lists.
///
/// The retriever holds the index behind a swap slot: queries clone an `Arc`
/// to the current snapshot and run against it lock-free, while a rebuild
/// installs a fresh snapshot atomically. A reader never observes a
/// half-built index, and queries in flight keep the snapshot they started
/// with. An empty slot (nothing indexed yet, or an empty corpus) makes every
/// search return an empty list without touching the embedding provider.
pub struct HybridRetriever {
    embedder: Arc<dyn TextEmbedder>,
    slot: RwLock<Option<Arc<HybridIndex>>>,
}

impl HybridRetriever {
    /// Create a retriever with no index installed.
    pub fn new(embedder: Arc<dyn TextEmbedder>) -> Self {
        HybridRetriever {
            embedder,
            slot: RwLock::new(None),
        }
    }

    /// Atomically swap in a freshly built index snapshot.
    pub fn install(&self, index: Arc<HybridIndex>) {
        *self.slot.write() = Some(index);
    }

    /// Remove the current snapshot; subsequent searches return empty lists.
    pub fn clear(&self) {
        *self.slot.write() = None;
    }

    /// The current index snapshot, if one is installed.
    pub fn current(&self) -> Option<Arc<HybridIndex>> {
        self.slot.read().clone()
    }

    /// The embedding provider this retriever queries with.
    pub fn embedder(&self) -> &Arc<dyn TextEmbedder> {
        &self.embedder
    }

    /// Run a hybrid search for `query`.
    ///
    /// Embeds the query with a single provider call, fetches up to `top_k`
    /// candidates from each index (the two searches share no state and run
    /// on parallel threads), and fuses the lists with weight `alpha`. Fails
    /// with `InvalidAlpha` when `alpha` is outside [0, 1]; an empty slot or
    /// `top_k = 0` returns an empty list without calling the provider.
    pub async fn search(&self, query: &str, alpha: f32, top_k: usize) -> Result<Vec<ScoredDoc>> {
        Ok(self
            .search_snapshot(query, alpha, top_k)
            .await?
            .map(|(_, hits)| hits)
            .unwrap_or_default())
    }

    /// Like [`search`], but pairs the fused hits with the index snapshot they
    /// were scored against.
    ///
    /// A rebuild may swap the slot while a query is in flight; callers that
    /// resolve hit ids back to documents must use the returned snapshot, not
    /// a fresh [`current`] read, or ids from the old corpus get paired with
    /// texts from the new one. Returns `None` when nothing is indexed.
    ///
    /// [`search`]: HybridRetriever::search
    /// [`current`]: HybridRetriever::current
    pub async fn search_snapshot(
        &self,
        query: &str,
        alpha: f32,
        top_k: usize,
    ) -> Result<Option<(Arc<HybridIndex>, Vec<ScoredDoc>)>> {
        fuser::validate_alpha(alpha)?;

        let Some(index) = self.current() else {
            return Ok(None);
        };
        if top_k == 0 {
            return Ok(Some((index, Vec::new())));
        }

        let start = Instant::now();
        let embedding = self.embedder.embed(query).await?;

        let (dense, sparse) = rayon::join(
            || -> Result<Vec<ScoredDoc>> {
                let hits = index.vector().search(&embedding, top_k)?;
                Ok(hits
                    .into_iter()
                    .map(|hit| ScoredDoc::new(hit.doc_id, similarity_from_distance(hit.distance)))
                    .collect())
            },
            || index.lexical().search(query, top_k),
        );
        let (dense, sparse) = (dense?, sparse?);

        let fused = fuser::fuse(&dense, &sparse, alpha, top_k)?;

        debug!(
            "hybrid search: {} dense + {} sparse -> {} fused in {:?}",
            dense.len(),
            sparse.len(),
            fused.len(),
            start.elapsed()
        );

        Ok(Some((index, fused)))
    }
}
