//! Text analysis pipeline for lexical indexing.
//!
//! Raw text flows through a tokenizer and a chain of token filters before
//! being counted by the lexical index. The same analyzer must be applied to
//! corpus documents and to queries so that both are weighted against the
//! same vocabulary.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, PipelineAnalyzer, StandardAnalyzer};
pub use token::{Token, TokenStream};
pub use token_filter::{Filter, LowercaseFilter, StopFilter};
pub use tokenizer::{RegexTokenizer, Tokenizer, UnicodeWordTokenizer, WhitespaceTokenizer};
