//! Text embedding trait for the dense retrieval pipeline.

use async_trait::async_trait;

use crate::error::Result;

/// Trait for converting text to dense vector embeddings.
///
/// This trait is the boundary to the external embedding model: local
/// deterministic providers, neural models, and API-based services all plug
/// into the vector index through it. Every vector produced by one provider
/// instance must have the same dimensionality, matching [`dimension`].
///
/// [`dimension`]: TextEmbedder::dimension
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use javelin::embedding::TextEmbedder;
/// use javelin::error::Result;
///
/// #[derive(Debug)]
/// struct ZeroEmbedder {
///     dimension: usize,
/// }
///
/// #[async_trait]
/// impl TextEmbedder for ZeroEmbedder {
///     async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
///         Ok(vec![0.0; self.dimension])
///     }
///
///     fn dimension(&self) -> usize {
///         self.dimension
///     }
/// }
/// ```
#[async_trait]
pub trait TextEmbedder: Send + Sync {
    /// Generate an embedding vector for the given text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embeddings for multiple texts, one vector per input text in
    /// the same order.
    ///
    /// The default implementation calls `embed` sequentially. Override this
    /// method for providers with real batch endpoints.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.embed(text).await?);
        }
        Ok(results)
    }

    /// Get the dimension of generated embeddings.
    fn dimension(&self) -> usize;

    /// Get the name/identifier of this embedder (for logging and debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}
