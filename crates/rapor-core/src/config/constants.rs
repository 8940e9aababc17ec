//! Centralized constants for the clustering pipeline.
//!
//! Every threshold and default that the algorithm depends on lives here so
//! the engine, the service and the configuration layer agree on one value.

/// K-Means iteration constants.
pub mod kmeans {
    /// Default iteration bound for one K-Means run.
    ///
    /// Acts as the intrinsic timeout of the algorithm.
    pub const DEFAULT_MAX_ITERATIONS: usize = 100;

    /// Default convergence threshold.
    ///
    /// A run stops once every centroid moved less than this distance
    /// between two consecutive iterations.
    pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 0.001;
}

/// Request limits enforced before any computation starts.
pub mod limits {
    /// Largest k accepted by `run_clustering`.
    ///
    /// The label vocabulary has named bands up to five clusters.
    pub const DEFAULT_MAX_CLUSTERS: usize = 5;

    /// Upper cap on max_k for elbow analysis.
    ///
    /// The effective max_k is `min(requested, cap, students - 1)`.
    pub const DEFAULT_ELBOW_MAX_K: usize = 10;
}

/// Grade value bounds.
pub mod grades {
    /// Lowest valid score.
    pub const MIN_SCORE: f64 = 0.0;

    /// Highest valid score.
    pub const MAX_SCORE: f64 = 100.0;

    /// Score used for a subject with no recorded grade.
    pub const MISSING_SCORE: f64 = 0.0;
}

/// Algorithm naming.
pub mod algorithm {
    /// Canonical name stored with every cluster result.
    pub const KMEANS: &str = "kmeans";

    /// Accepted alias, normalized to [`KMEANS`].
    pub const KMEANS_ALIAS: &str = "k-means";
}
