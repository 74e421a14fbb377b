//! Dense vector retrieval: distance functions and a brute-force exact
//! nearest-neighbor index.

pub mod distance;
pub mod index;

pub use distance::{similarity_from_distance, squared_euclidean};
pub use index::{VectorIndex, VectorIndexStats};
