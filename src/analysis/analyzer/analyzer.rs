//! Core analyzer trait definition.
//!
//! This module defines the [`Analyzer`] trait, the main interface for text
//! analysis in Javelin. Analyzers combine tokenizers and filters to transform
//! raw text into the tokens the lexical index counts.
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → … → Filter N → Token Stream
//! ```
//!
//! The same analyzer instance must be used for both corpus documents and
//! queries so that the two are weighted against the same vocabulary.

use std::fmt::Debug;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for text analyzers that convert raw text into token streams.
pub trait Analyzer: Send + Sync + Debug {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
