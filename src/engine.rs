//! The question-answering engine facade.
//!
//! [`RagEngine`] wires the hybrid retriever to the two external providers:
//! corpus texts go in through [`index_corpus`], fused search hits and
//! generated answers come out through [`search`] and [`ask`].
//!
//! [`index_corpus`]: RagEngine::index_corpus
//! [`search`]: RagEngine::search
//! [`ask`]: RagEngine::ask

use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::{Analyzer, StandardAnalyzer};
use crate::embedding::TextEmbedder;
use crate::error::{JavelinError, Result};
use crate::generation::AnswerGenerator;
use crate::hybrid::index::{HybridIndex, HybridIndexStats};
use crate::hybrid::retriever::HybridRetriever;
use crate::types::{Answer, SearchHit};

/// Configuration for the question-answering engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Fusion weight: 1.0 is pure dense, 0.0 is pure sparse.
    pub alpha: f32,
    /// Default number of fused results per search.
    pub top_k: usize,
    /// Number of top hits whose texts form the answer context.
    pub context_top_k: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            top_k: 10,
            context_top_k: 3,
        }
    }
}

impl EngineConfig {
    /// Validate the configuration.
    ///
    /// Fails with `InvalidAlpha` when the fusion weight is outside [0, 1]
    /// and with `InvalidTopK` when either result budget is zero.
    pub fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(JavelinError::InvalidAlpha(self.alpha));
        }
        if self.top_k == 0 {
            return Err(JavelinError::invalid_top_k("top_k must be at least 1"));
        }
        if self.context_top_k == 0 {
            return Err(JavelinError::invalid_top_k(
                "context_top_k must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Statistics about the engine's current index state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStats {
    /// Whether a corpus is currently indexed.
    pub indexed: bool,
    /// Index statistics, present when a corpus is indexed.
    pub index: Option<HybridIndexStats>,
}

/// Retrieval-augmented question answering over an in-memory corpus.
///
/// Owns the hybrid retriever and the two provider handles. Indexing and
/// querying take `&self`: the retriever's swap slot makes a rebuild safe
/// against queries in flight.
pub struct RagEngine {
    config: EngineConfig,
    retriever: HybridRetriever,
    generator: Arc<dyn AnswerGenerator>,
    analyzer: Arc<dyn Analyzer>,
}

impl RagEngine {
    /// Create an engine from a validated configuration and the two external
    /// providers. No corpus is indexed yet; searches return empty lists.
    pub fn new(
        config: EngineConfig,
        embedder: Arc<dyn TextEmbedder>,
        generator: Arc<dyn AnswerGenerator>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(RagEngine {
            config,
            retriever: HybridRetriever::new(embedder),
            generator,
            analyzer: Arc::new(StandardAnalyzer::new()),
        })
    }

    /// Replace the analyzer used for lexical indexing. Takes effect on the
    /// next `index_corpus` call.
    pub fn with_analyzer(mut self, analyzer: Arc<dyn Analyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Index a corpus, replacing any previously indexed one.
    ///
    /// The whole corpus is embedded with one batch provider call, both
    /// indexes are built, and the finished snapshot is swapped in atomically.
    /// An empty corpus clears the index instead; subsequent searches return
    /// empty lists without error.
    pub async fn index_corpus(&self, texts: Vec<String>) -> Result<()> {
        if texts.is_empty() {
            self.retriever.clear();
            info!("indexed empty corpus; searches will return no hits");
            return Ok(());
        }

        let start = Instant::now();
        let count = texts.len();
        let index = HybridIndex::build(
            texts,
            self.retriever.embedder().as_ref(),
            self.analyzer.clone(),
        )
        .await?;
        self.retriever.install(Arc::new(index));

        info!("indexed {count} documents in {:?}", start.elapsed());
        Ok(())
    }

    /// Run a hybrid search with the configured alpha and top_k, enriching
    /// each fused result with its document text.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        self.search_with(query, self.config.alpha, self.config.top_k).await
    }

    /// Run a hybrid search with explicit parameters.
    ///
    /// Texts are resolved from the same index snapshot the hits were scored
    /// against, so a reindex racing this call cannot mix old scores with new
    /// texts.
    pub async fn search_with(
        &self,
        query: &str,
        alpha: f32,
        top_k: usize,
    ) -> Result<Vec<SearchHit>> {
        let Some((index, scored)) = self
            .retriever
            .search_snapshot(query, alpha, top_k)
            .await?
        else {
            return Ok(Vec::new());
        };

        Ok(scored
            .into_iter()
            .filter_map(|hit| {
                index
                    .document(hit.doc_id)
                    .map(|doc| SearchHit::new(hit.doc_id, hit.score, doc.text.clone()))
            })
            .collect())
    }

    /// Answer a question over the indexed corpus.
    ///
    /// Retrieves the configured number of context hits, concatenates their
    /// texts in fused-rank order separated by single spaces, and hands the
    /// question and context to the generation provider. With nothing
    /// retrieved the answer is empty and the provider is not called.
    pub async fn ask(&self, question: &str) -> Result<Answer> {
        let hits = self
            .search_with(question, self.config.alpha, self.config.context_top_k)
            .await?;

        if hits.is_empty() {
            debug!("no context retrieved for question; returning empty answer");
            return Ok(Answer {
                text: String::new(),
                hits,
            });
        }

        let context = hits
            .iter()
            .map(|hit| hit.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let text = self.generator.generate_answer(question, &context).await?;
        Ok(Answer { text, hits })
    }

    /// Statistics about the current index state.
    pub fn stats(&self) -> EngineStats {
        let index = self.retriever.current().map(|index| index.stats());
        EngineStats {
            indexed: index.is_some(),
            index,
        }
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The underlying hybrid retriever.
    pub fn retriever(&self) -> &HybridRetriever {
        &self.retriever
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use tokio::sync::Notify;

    use super::*;
    use crate::embedding::HashEmbedder;
    use crate::generation::ExtractiveGenerator;

    /// Embedder that parks on one chosen query until released, so a test can
    /// complete a reindex while a search is still in flight.
    struct GatedEmbedder {
        inner: HashEmbedder,
        hold: String,
        entered: Notify,
        release: Notify,
    }

    impl GatedEmbedder {
        fn new(dimension: usize, hold: &str) -> Self {
            GatedEmbedder {
                inner: HashEmbedder::new(dimension),
                hold: hold.to_string(),
                entered: Notify::new(),
                release: Notify::new(),
            }
        }
    }

    #[async_trait]
    impl TextEmbedder for GatedEmbedder {
        async fn embed(&self, text: &str) -> Result<Vec<f32>> {
            if text == self.hold {
                self.entered.notify_one();
                self.release.notified().await;
            }
            self.inner.embed(text).await
        }

        fn dimension(&self) -> usize {
            self.inner.dimension()
        }
    }

    fn engine(config: EngineConfig) -> Result<RagEngine> {
        RagEngine::new(
            config,
            Arc::new(HashEmbedder::new(16)),
            Arc::new(ExtractiveGenerator::new()),
        )
    }

    #[test]
    fn test_config_default_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_rejects_bad_alpha() {
        let config = EngineConfig {
            alpha: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(JavelinError::InvalidAlpha(_))
        ));
    }

    #[test]
    fn test_config_rejects_zero_top_k() {
        let config = EngineConfig {
            top_k: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(JavelinError::InvalidTopK(_))
        ));

        let config = EngineConfig {
            context_top_k: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(JavelinError::InvalidTopK(_))
        ));
    }

    #[test]
    fn test_new_engine_validates_config() {
        let config = EngineConfig {
            alpha: -0.2,
            ..Default::default()
        };
        assert!(engine(config).is_err());
    }

    #[tokio::test]
    async fn test_search_before_indexing_returns_empty() {
        let engine = engine(EngineConfig::default()).unwrap();
        let hits = engine.search("anything").await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_empty_corpus_clears_index() {
        let engine = engine(EngineConfig::default()).unwrap();
        engine
            .index_corpus(vec!["some document".to_string()])
            .await
            .unwrap();
        assert!(engine.stats().indexed);

        engine.index_corpus(Vec::new()).await.unwrap();
        assert!(!engine.stats().indexed);
        assert!(engine.search("some").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_enriches_hits_with_text() {
        let engine = engine(EngineConfig::default()).unwrap();
        engine
            .index_corpus(vec![
                "aspirin treats headache".to_string(),
                "ibuprofen treats pain".to_string(),
            ])
            .await
            .unwrap();

        let hits = engine.search("headache").await.unwrap();
        assert!(!hits.is_empty());
        assert_eq!(hits[0].doc_id, 0);
        assert_eq!(hits[0].text, "aspirin treats headache");
    }

    #[tokio::test]
    async fn test_reindex_during_search_keeps_snapshot_texts() {
        let embedder = Arc::new(GatedEmbedder::new(16, "alpha"));
        let engine = Arc::new(
            RagEngine::new(
                EngineConfig::default(),
                embedder.clone(),
                Arc::new(ExtractiveGenerator::new()),
            )
            .unwrap(),
        );
        engine
            .index_corpus(vec!["alpha text only".to_string()])
            .await
            .unwrap();

        let searcher = tokio::spawn({
            let engine = engine.clone();
            async move { engine.search("alpha").await }
        });

        // Park the search inside the embedding call, swap the corpus out
        // from under it, then let it finish.
        embedder.entered.notified().await;
        engine
            .index_corpus(vec!["totally different beta".to_string()])
            .await
            .unwrap();
        embedder.release.notify_one();

        let hits = searcher.await.unwrap().unwrap();
        assert!(!hits.is_empty());
        assert_eq!(hits[0].doc_id, 0);
        assert_eq!(hits[0].text, "alpha text only");
    }

    #[tokio::test]
    async fn test_ask_returns_answer_with_context_hits() {
        let engine = engine(EngineConfig::default()).unwrap();
        engine
            .index_corpus(vec![
                "Aspirin treats headache".to_string(),
                "Ibuprofen treats pain".to_string(),
            ])
            .await
            .unwrap();

        let answer = engine.ask("what treats headache").await.unwrap();
        assert!(answer.text.contains("headache"));
        assert!(!answer.hits.is_empty());
        assert!(answer.hits.len() <= engine.config().context_top_k);
    }

    #[tokio::test]
    async fn test_ask_with_empty_index_returns_empty_answer() {
        let engine = engine(EngineConfig::default()).unwrap();
        let answer = engine.ask("anything").await.unwrap();
        assert!(answer.text.is_empty());
        assert!(answer.hits.is_empty());
    }

    #[tokio::test]
    async fn test_stats_reflect_index() {
        let engine = engine(EngineConfig::default()).unwrap();
        engine
            .index_corpus(vec![
                "one document".to_string(),
                "two document".to_string(),
            ])
            .await
            .unwrap();

        let stats = engine.stats();
        assert!(stats.indexed);
        let index = stats.index.unwrap();
        assert_eq!(index.documents, 2);
        assert_eq!(index.dimension, 16);
    }

    #[tokio::test]
    async fn test_reindex_replaces_corpus() {
        let engine = engine(EngineConfig::default()).unwrap();
        engine
            .index_corpus(vec!["old text here".to_string()])
            .await
            .unwrap();
        engine
            .index_corpus(vec![
                "fresh text one".to_string(),
                "fresh text two".to_string(),
            ])
            .await
            .unwrap();

        let stats = engine.stats();
        assert_eq!(stats.index.unwrap().documents, 2);
    }
}
