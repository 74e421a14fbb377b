//! Answer generation trait for the question-answering pipeline.

use async_trait::async_trait;

use crate::error::Result;

/// Trait for producing an answer to a question given a retrieved context.
///
/// Implementations range from local extractive heuristics to API-based
/// generation models. The context is a single string: the retrieved document
/// texts concatenated in fused-rank order, space-separated.
#[async_trait]
pub trait AnswerGenerator: Send + Sync {
    /// Generate an answer to `question` from the retrieved `context`.
    async fn generate_answer(&self, question: &str, context: &str) -> Result<String>;

    /// Get the name/identifier of this generator (for logging and debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}
