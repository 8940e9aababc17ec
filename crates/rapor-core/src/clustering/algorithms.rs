//! Clustering algorithms and helper functions.
//!
//! Contains random initialization and the Lloyd assignment/update steps.

use rand::Rng;

use super::metrics::{euclidean_distance, euclidean_distance_squared};
use super::types::{Centroid, ClusterAssignment};

/// Initialize centroids by drawing k vectors uniformly at random.
///
/// Draws are independent (with replacement), so two centroids may start at
/// the same vector. Callers guarantee `!vectors.is_empty()`.
pub fn random_init<R: Rng + ?Sized>(vectors: &[&[f64]], k: usize, rng: &mut R) -> Vec<Centroid> {
    let n = vectors.len();
    (0..k)
        .map(|_| vectors[rng.gen_range(0..n)].to_vec())
        .collect()
}

/// Nearest centroid of `vector`.
///
/// Strict comparison keeps the lowest index on ties.
pub fn nearest_centroid(vector: &[f64], centroids: &[Centroid]) -> ClusterAssignment {
    let mut min_dist = f64::MAX;
    let mut best_cluster = 0;

    for (j, centroid) in centroids.iter().enumerate() {
        let dist = euclidean_distance_squared(vector, centroid);
        if dist < min_dist {
            min_dist = dist;
            best_cluster = j;
        }
    }

    ClusterAssignment {
        cluster: best_cluster,
        distance: min_dist.sqrt(),
    }
}

/// Assignment step: recompute every assignment from scratch.
pub fn assign_all(vectors: &[&[f64]], centroids: &[Centroid], assignments: &mut [ClusterAssignment]) {
    for (slot, vector) in assignments.iter_mut().zip(vectors.iter()) {
        *slot = nearest_centroid(vector, centroids);
    }
}

/// Re-measure each distance against the centroid a vector is assigned to.
pub fn refresh_distances(
    vectors: &[&[f64]],
    centroids: &[Centroid],
    assignments: &mut [ClusterAssignment],
) {
    for (slot, vector) in assignments.iter_mut().zip(vectors.iter()) {
        slot.distance = euclidean_distance(vector, &centroids[slot.cluster]);
    }
}

/// Compute new centroids as mean of assigned points.
///
/// A cluster with no members keeps its entry from `previous`.
pub fn compute_centroids(
    vectors: &[&[f64]],
    assignments: &[ClusterAssignment],
    previous: &[Centroid],
) -> Vec<Centroid> {
    let k = previous.len();
    let dim = previous.first().map_or(0, Vec::len);
    let mut sums = vec![vec![0.0f64; dim]; k];
    let mut counts = vec![0usize; k];

    for (vector, assignment) in vectors.iter().zip(assignments.iter()) {
        counts[assignment.cluster] += 1;
        for (acc, value) in sums[assignment.cluster].iter_mut().zip(vector.iter()) {
            *acc += value;
        }
    }

    sums.into_iter()
        .zip(counts)
        .zip(previous.iter())
        .map(|((mut sum, count), old)| {
            if count == 0 {
                return old.clone();
            }
            for elem in sum.iter_mut() {
                *elem /= count as f64;
            }
            sum
        })
        .collect()
}

/// Largest Euclidean movement between two centroid sets.
pub fn max_movement(old: &[Centroid], new: &[Centroid]) -> f64 {
    old.iter()
        .zip(new.iter())
        .map(|(a, b)| euclidean_distance(a, b))
        .fold(0.0f64, f64::max)
}

/// Compute within-cluster sum of squares.
pub fn compute_wcss(vectors: &[&[f64]], assignments: &[ClusterAssignment], centroids: &[Centroid]) -> f64 {
    vectors
        .iter()
        .zip(assignments.iter())
        .map(|(vector, a)| euclidean_distance_squared(vector, &centroids[a.cluster]))
        .sum()
}
