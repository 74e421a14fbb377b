//! Embedding providers: the external text-to-vector boundary.
//!
//! The engine treats embedding as an opaque capability behind the
//! [`TextEmbedder`] trait. Provider failures are not masked; they propagate
//! to the caller as embedding errors.

pub mod hash_embedder;
pub mod text_embedder;

pub use hash_embedder::HashEmbedder;
pub use text_embedder::TextEmbedder;
