//! Configuration for a single K-Means run.

use crate::config::constants::kmeans::{DEFAULT_CONVERGENCE_THRESHOLD, DEFAULT_MAX_ITERATIONS};
use crate::config::ClusteringConfig;
use crate::error::{RaporError, RaporResult};

/// Parameters of one K-Means run.
///
/// # Validation
///
/// All parameters are validated at construction time.
/// Invalid configurations result in immediate errors.
#[derive(Clone, Debug, PartialEq)]
pub struct KMeansConfig {
    /// Number of clusters (k).
    ///
    /// Must be > 0 and <= number of vectors.
    pub k: usize,

    /// Maximum iterations before stopping.
    pub max_iterations: usize,

    /// Convergence threshold for centroid movement.
    ///
    /// Iteration stops when every centroid moved less than this.
    pub convergence_threshold: f64,
}

impl KMeansConfig {
    /// Create a new configuration with validation.
    ///
    /// # Errors
    ///
    /// Returns `RaporError::Validation` if any parameter is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use rapor_core::clustering::KMeansConfig;
    ///
    /// let config = KMeansConfig::new(3, 100, 0.001).unwrap();
    /// assert_eq!(config.k, 3);
    /// assert!(KMeansConfig::new(0, 100, 0.001).is_err());
    /// ```
    pub fn new(k: usize, max_iterations: usize, convergence_threshold: f64) -> RaporResult<Self> {
        if k == 0 {
            return Err(RaporError::validation("k must be > 0"));
        }
        if max_iterations == 0 {
            return Err(RaporError::validation("max_iterations must be > 0"));
        }
        if !convergence_threshold.is_finite() || convergence_threshold <= 0.0 {
            return Err(RaporError::validation(
                "convergence_threshold must be a finite positive number",
            ));
        }

        Ok(Self {
            k,
            max_iterations,
            convergence_threshold,
        })
    }

    /// Configuration for `k` with default iteration bound (100) and
    /// threshold (0.001).
    pub fn with_k(k: usize) -> RaporResult<Self> {
        Self::new(k, DEFAULT_MAX_ITERATIONS, DEFAULT_CONVERGENCE_THRESHOLD)
    }

    /// Configuration for `k` using the iteration settings of a service config.
    pub fn from_service_config(k: usize, config: &ClusteringConfig) -> RaporResult<Self> {
        Self::new(k, config.max_iterations, config.convergence_threshold)
    }
}

impl Default for KMeansConfig {
    /// Default configuration: k=3, max_iterations=100, convergence_threshold=0.001.
    fn default() -> Self {
        Self {
            k: 3,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            convergence_threshold: DEFAULT_CONVERGENCE_THRESHOLD,
        }
    }
}
