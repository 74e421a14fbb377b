//! Deterministic extractive answer provider.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::analysis::{Analyzer, StandardAnalyzer};
use crate::error::Result;
use crate::generation::answer_generator::AnswerGenerator;

/// An offline answerer that extracts the best sentence from the context.
///
/// The context is split into sentences, each sentence is scored by how many
/// analyzed question terms it contains, and the highest-scoring sentence is
/// returned verbatim. Ties go to the earliest sentence, which in fused-rank
/// order means the most relevant document. A context with no overlapping
/// sentence yields an empty answer.
///
/// Deterministic by construction, so the pipeline runs end to end without an
/// external generation model.
pub struct ExtractiveGenerator {
    analyzer: Arc<dyn Analyzer>,
}

impl ExtractiveGenerator {
    /// Create a generator using the standard analyzer for term overlap.
    pub fn new() -> Self {
        ExtractiveGenerator {
            analyzer: Arc::new(StandardAnalyzer::new()),
        }
    }

    /// Create a generator with a custom analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        ExtractiveGenerator { analyzer }
    }

    fn sentences(context: &str) -> Vec<&str> {
        context
            .split(['.', '!', '?'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    fn term_set(&self, text: &str) -> Result<HashSet<String>> {
        Ok(self.analyzer.analyze(text)?.map(|t| t.text).collect())
    }
}

impl Default for ExtractiveGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnswerGenerator for ExtractiveGenerator {
    async fn generate_answer(&self, question: &str, context: &str) -> Result<String> {
        let question_terms = self.term_set(question)?;
        if question_terms.is_empty() {
            return Ok(String::new());
        }

        let mut best: Option<(usize, &str)> = None;
        for sentence in Self::sentences(context) {
            let overlap = self
                .term_set(sentence)?
                .intersection(&question_terms)
                .count();
            if overlap > 0 && best.is_none_or(|(score, _)| overlap > score) {
                best = Some((overlap, sentence));
            }
        }

        Ok(best.map(|(_, sentence)| sentence.to_string()).unwrap_or_default())
    }

    fn name(&self) -> &str {
        "extractive"
    }
}
