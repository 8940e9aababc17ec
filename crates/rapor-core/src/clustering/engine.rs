//! K-Means engine.
//!
//! Provides the [`KMeansEngine`] implementation using random initialization
//! and Lloyd iterations.

use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::{RaporError, RaporResult};
use crate::types::FeatureVector;

use super::algorithms::{
    assign_all, compute_centroids, compute_wcss, max_movement, random_init, refresh_distances,
};
use super::config::KMeansConfig;
use super::types::{Centroid, ClusterAssignment, KMeansOutput};

/// Trait for k-means clustering on student feature vectors.
pub trait KMeansClustering {
    /// Cluster feature vectors using the k-means algorithm.
    ///
    /// # Arguments
    ///
    /// * `vectors` - Feature vectors of one period, all of one dimension
    /// * `config` - K-means configuration
    /// * `rng` - Random source for centroid initialization
    ///
    /// # Errors
    ///
    /// - `InsufficientData` if vectors is empty or k > vectors.len()
    /// - `Computation` on mixed dimensions or non-finite values
    ///
    /// Not converging within max_iterations is not an error; the output
    /// reports `converged = false`.
    fn run<R: Rng + ?Sized>(
        &self,
        vectors: &[FeatureVector],
        config: &KMeansConfig,
        rng: &mut R,
    ) -> RaporResult<KMeansOutput>;
}

/// Lloyd's algorithm with uniform random initialization.
#[derive(Clone, Debug, Default)]
pub struct KMeansEngine;

impl KMeansEngine {
    /// Create a new engine.
    pub fn new() -> Self {
        Self
    }
}

/// Fail-fast input checks shared by every run.
fn validate_inputs(vectors: &[FeatureVector], config: &KMeansConfig) -> RaporResult<()> {
    if vectors.is_empty() {
        return Err(RaporError::insufficient_data(1, 0, "k-means feature vectors"));
    }
    if config.k > vectors.len() {
        return Err(RaporError::insufficient_data(
            config.k,
            vectors.len(),
            format!("k-means with k={}", config.k),
        ));
    }

    let dim = vectors[0].dim();
    if let Some(bad) = vectors.iter().find(|v| v.dim() != dim) {
        return Err(RaporError::computation(format!(
            "feature vector for student {} has dimension {}, expected {}",
            bad.student_id,
            bad.dim(),
            dim
        )));
    }
    if let Some(bad) = vectors
        .iter()
        .find(|v| v.values.iter().any(|x| !x.is_finite()))
    {
        return Err(RaporError::computation(format!(
            "feature vector for student {} contains a non-finite value",
            bad.student_id
        )));
    }

    Ok(())
}

impl KMeansEngine {
    /// Run Lloyd iterations starting from caller-supplied centroids.
    ///
    /// Used to warm-start a run from a previous solution. Same outputs and
    /// errors as [`KMeansClustering::run`], plus `Computation` when
    /// `initial` does not hold k centroids of the vector dimension.
    pub fn run_from_centroids(
        &self,
        vectors: &[FeatureVector],
        config: &KMeansConfig,
        initial: Vec<Centroid>,
    ) -> RaporResult<KMeansOutput> {
        validate_inputs(vectors, config)?;

        let dim = vectors[0].dim();
        if initial.len() != config.k || initial.iter().any(|c| c.len() != dim) {
            return Err(RaporError::computation(format!(
                "initial centroids must be {} vectors of dimension {}",
                config.k, dim
            )));
        }

        let points: Vec<&[f64]> = vectors.iter().map(FeatureVector::as_slice).collect();
        lloyd(&points, initial, config)
    }
}

/// Lloyd iterations from `centroids` until convergence or the iteration bound.
fn lloyd(points: &[&[f64]], mut centroids: Vec<Centroid>, config: &KMeansConfig) -> RaporResult<KMeansOutput> {
    let mut assignments = vec![ClusterAssignment::default(); points.len()];
    let mut iterations = 0;
    let mut converged = false;

    for iter in 0..config.max_iterations {
        iterations = iter + 1;

        assign_all(points, &centroids, &mut assignments);

        let new_centroids = compute_centroids(points, &assignments, &centroids);
        let movement = max_movement(&centroids, &new_centroids);

        centroids = new_centroids;

        if movement < config.convergence_threshold {
            converged = true;
            debug!(iterations, movement, "k-means converged");
            break;
        }
    }

    if !converged {
        warn!(
            k = config.k,
            iterations, "k-means did not converge, returning last centroids"
        );
    }

    // Distances and WCSS refer to the returned centroids.
    refresh_distances(points, &centroids, &mut assignments);
    let wcss = compute_wcss(points, &assignments, &centroids);

    if !wcss.is_finite() || centroids.iter().flatten().any(|c| !c.is_finite()) {
        return Err(RaporError::computation(format!(
            "k-means with k={} produced a non-finite result",
            config.k
        )));
    }

    info!(
        k = config.k,
        iterations,
        converged,
        wcss,
        "k-means completed"
    );

    Ok(KMeansOutput {
        assignments,
        centroids,
        iterations,
        converged,
        wcss,
    })
}

impl KMeansClustering for KMeansEngine {
    fn run<R: Rng + ?Sized>(
        &self,
        vectors: &[FeatureVector],
        config: &KMeansConfig,
        rng: &mut R,
    ) -> RaporResult<KMeansOutput> {
        validate_inputs(vectors, config)?;

        debug!(
            k = config.k,
            n = vectors.len(),
            dim = vectors[0].dim(),
            max_iterations = config.max_iterations,
            "Starting k-means"
        );

        let points: Vec<&[f64]> = vectors.iter().map(FeatureVector::as_slice).collect();
        let centroids = random_init(&points, config.k, rng);

        lloyd(&points, centroids, config)
    }
}
