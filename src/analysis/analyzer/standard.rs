//! Standard analyzer implementation.

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{LowercaseFilter, StopFilter};
use crate::analysis::tokenizer::UnicodeWordTokenizer;
use crate::error::Result;

/// A standard analyzer that provides good defaults for most use cases.
///
/// Splits on Unicode word boundaries, lowercases, and removes English stop
/// words.
///
/// # Examples
///
/// ```
/// use javelin::analysis::analyzer::{Analyzer, StandardAnalyzer};
///
/// let analyzer = StandardAnalyzer::new();
/// let tokens: Vec<_> = analyzer.analyze("The Aspirin").unwrap().collect();
///
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].text, "aspirin");
/// ```
#[derive(Clone, Debug)]
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer with default settings.
    pub fn new() -> Self {
        let inner = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::new()));

        StandardAnalyzer { inner }
    }

    /// Create a new standard analyzer without stop word filtering.
    pub fn without_stop_words() -> Self {
        let inner = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()));

        StandardAnalyzer { inner }
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_standard_analyzer() {
        let analyzer = StandardAnalyzer::new();
        let tokens: Vec<Token> = analyzer
            .analyze("The aspirin treats a headache")
            .unwrap()
            .collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["aspirin", "treats", "headache"]);
    }

    #[test]
    fn test_without_stop_words() {
        let analyzer = StandardAnalyzer::without_stop_words();
        let tokens: Vec<Token> = analyzer.analyze("The Aspirin").unwrap().collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["the", "aspirin"]);
    }

    #[test]
    fn test_analyzer_is_deterministic() {
        let analyzer = StandardAnalyzer::new();
        let first: Vec<Token> = analyzer.analyze("ibuprofen treats pain").unwrap().collect();
        let second: Vec<Token> = analyzer.analyze("ibuprofen treats pain").unwrap().collect();
        assert_eq!(first, second);
    }
}
