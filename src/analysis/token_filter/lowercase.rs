//! Lowercase filter implementation.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts token text to lowercase.
///
/// Normalizes casing so that indexing and querying are case-insensitive.
/// Positions and offsets are preserved.
///
/// # Examples
///
/// ```
/// use javelin::analysis::token::Token;
/// use javelin::analysis::token_filter::Filter;
/// use javelin::analysis::token_filter::lowercase::LowercaseFilter;
///
/// let filter = LowercaseFilter::new();
/// let tokens = vec![Token::new("The", 0), Token::new("QUICK", 1)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result[0].text, "the");
/// assert_eq!(result[1].text, "quick");
/// ```
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens.map(|token| {
            if token.text.chars().any(char::is_uppercase) {
                Token {
                    text: token.text.to_lowercase(),
                    ..token
                }
            } else {
                token
            }
        });

        Ok(Box::new(filtered_tokens))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
