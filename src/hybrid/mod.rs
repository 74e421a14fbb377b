//! Hybrid retrieval: score fusion and the retriever that orchestrates the
//! dense and sparse indexes.

pub mod fuser;
pub mod index;
pub mod retriever;

pub use fuser::fuse;
pub use index::{HybridIndex, HybridIndexStats};
pub use retriever::HybridRetriever;
