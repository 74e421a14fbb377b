//! Deterministic local embedding provider.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;

use crate::embedding::text_embedder::TextEmbedder;
use crate::error::{JavelinError, Result};

/// A deterministic, dependency-free embedding provider.
///
/// Each term is hashed into a seed, the seed generates one bounded
/// pseudo-value per dimension, and the per-term vectors are averaged over
/// the text and unit-normalized. Texts sharing terms land near each other,
/// which is enough for the pipeline to run end to end without an external
/// model, and the output is bit-identical across calls and processes.
///
/// # Examples
///
/// ```
/// use javelin::embedding::{HashEmbedder, TextEmbedder};
///
/// # tokio_test::block_on(async {
/// let embedder = HashEmbedder::new(64);
/// let vector = embedder.embed("aspirin treats headache").await.unwrap();
/// assert_eq!(vector.len(), 64);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dimension: usize,
}

impl HashEmbedder {
    /// Default embedding dimensionality.
    pub const DEFAULT_DIMENSION: usize = 64;

    /// Create a new embedder producing vectors of the given dimensionality.
    pub fn new(dimension: usize) -> Self {
        HashEmbedder { dimension }
    }

    fn term_seed(term: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        term.hash(&mut hasher);
        hasher.finish()
    }

    fn accumulate(&self, embedding: &mut [f32], term: &str) {
        let seed = Self::term_seed(term);
        for (i, value) in embedding.iter_mut().enumerate() {
            let component = seed.wrapping_add(i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
            // Map the hash into [-1, 1).
            *value += ((component >> 11) as f64 / (1u64 << 53) as f64 * 2.0 - 1.0) as f32;
        }
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DIMENSION)
    }
}

#[async_trait]
impl TextEmbedder for HashEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        if self.dimension == 0 {
            return Err(JavelinError::embedding(
                "embedding dimension must be non-zero",
            ));
        }

        let mut embedding = vec![0.0_f32; self.dimension];
        let mut count = 0;

        for term in text.split_whitespace() {
            let term = term.to_lowercase();
            self.accumulate(&mut embedding, &term);
            count += 1;
        }

        if count > 0 {
            for value in &mut embedding {
                *value /= count as f32;
            }
        }

        let norm = embedding.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut embedding {
                *value /= norm;
            }
        }

        Ok(embedding)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn name(&self) -> &str {
        "hash"
    }
}
