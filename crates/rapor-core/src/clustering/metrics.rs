//! Distance metrics for clustering.

/// Compute squared Euclidean distance between two vectors.
///
/// Uses squared distance to avoid sqrt for comparison. Both slices must
/// have the same length; extra components of the longer slice are ignored.
#[inline]
pub fn euclidean_distance_squared(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// Compute Euclidean distance between two vectors.
///
/// For one-dimensional vectors this is `|a - b|`.
#[inline]
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    euclidean_distance_squared(a, b).sqrt()
}
