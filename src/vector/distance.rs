//! Distance functions for dense vector search.
//!
//! Dense retrieval ranks by squared Euclidean (L2) distance over raw
//! embeddings. The squared form preserves the ordering of the true Euclidean
//! distance while skipping the square root, which brute-force scans never
//! need. For fusion with lexical scores, a distance is converted into a
//! similarity in (0, 1] via `1 / (1 + distance)`.

use crate::error::{JavelinError, Result};

/// Calculate the squared Euclidean (L2) distance between two vectors.
///
/// Fails with a dimension mismatch when the slices differ in length.
pub fn squared_euclidean(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(JavelinError::dimension_mismatch(a.len(), b.len()));
    }

    Ok(a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum())
}

/// Convert a distance into a similarity score for fusion.
///
/// Monotonically decreasing in distance and bounded in (0, 1]: a distance of
/// zero maps to 1.0, and growing distances approach 0.0 without reaching it.
pub fn similarity_from_distance(distance: f32) -> f32 {
    1.0 / (1.0 + distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squared_euclidean() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![4.0, 6.0, 3.0];

        // (3)^2 + (4)^2 + 0 = 25
        let distance = squared_euclidean(&a, &b).unwrap();
        assert!((distance - 25.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_identical_vectors_have_zero_distance() {
        let a = vec![0.5, -0.5, 0.25];
        let distance = squared_euclidean(&a, &a).unwrap();
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = vec![1.0, 2.0];
        let b = vec![1.0, 2.0, 3.0];

        let result = squared_euclidean(&a, &b);
        match result {
            Err(JavelinError::DimensionMismatch { expected, actual }) => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 3);
            }
            other => panic!("Expected dimension mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_similarity_bounds() {
        assert_eq!(similarity_from_distance(0.0), 1.0);
        assert_eq!(similarity_from_distance(1.0), 0.5);

        let far = similarity_from_distance(1_000_000.0);
        assert!(far > 0.0);
        assert!(far < 0.001);
    }

    #[test]
    fn test_similarity_monotonically_decreasing() {
        let mut previous = similarity_from_distance(0.0);
        for i in 1..10 {
            let current = similarity_from_distance(i as f32);
            assert!(current < previous);
            previous = current;
        }
    }
}
