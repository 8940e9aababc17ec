//! Type definitions for K-Means output.

use serde::{Deserialize, Serialize};

/// Cluster centroid: component-wise mean of its members.
///
/// Has the same dimension as the feature vectors it represents.
pub type Centroid = Vec<f64>;

/// Nearest-centroid assignment of one feature vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterAssignment {
    /// Raw centroid index in `[0, k)`.
    pub cluster: usize,

    /// Euclidean distance to that centroid.
    pub distance: f64,
}

/// Result of one K-Means run.
///
/// `assignments[i]` belongs to input vector `i`.
#[derive(Clone, Debug)]
pub struct KMeansOutput {
    pub assignments: Vec<ClusterAssignment>,

    /// Final centroids. Length always equals k, even when some clusters
    /// ended up empty.
    pub centroids: Vec<Centroid>,

    /// Iterations performed. Equals max_iterations when not converged.
    pub iterations: usize,

    /// True if every centroid moved less than the threshold in the last
    /// iteration.
    pub converged: bool,

    /// Within-cluster sum of squares against the final centroids.
    pub wcss: f64,
}

impl KMeansOutput {
    /// Number of clusters (k).
    #[inline]
    pub fn num_clusters(&self) -> usize {
        self.centroids.len()
    }

    /// Member count per raw cluster index.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.centroids.len()];
        for assignment in &self.assignments {
            sizes[assignment.cluster] += 1;
        }
        sizes
    }

    /// Input indices assigned to `cluster`.
    pub fn members(&self, cluster: usize) -> Vec<usize> {
        self.assignments
            .iter()
            .enumerate()
            .filter(|(_, a)| a.cluster == cluster)
            .map(|(i, _)| i)
            .collect()
    }
}
