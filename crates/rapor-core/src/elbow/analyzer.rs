//! Elbow analysis engine.

use rand::Rng;
use tracing::{debug, info};

use crate::clustering::{Centroid, KMeansClustering, KMeansConfig, KMeansEngine, KMeansOutput};
use crate::config::constants::kmeans::{DEFAULT_CONVERGENCE_THRESHOLD, DEFAULT_MAX_ITERATIONS};
use crate::error::{RaporError, RaporResult};
use crate::types::FeatureVector;

use super::knee::find_elbow;
use super::types::{ElbowAnalysis, ElbowPoint};

/// Runs K-Means for k = 1..=max_k and picks the elbow.
#[derive(Debug, Clone)]
pub struct ElbowAnalyzer {
    engine: KMeansEngine,
    max_iterations: usize,
    convergence_threshold: f64,
}

impl Default for ElbowAnalyzer {
    fn default() -> Self {
        Self {
            engine: KMeansEngine::new(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            convergence_threshold: DEFAULT_CONVERGENCE_THRESHOLD,
        }
    }
}

impl ElbowAnalyzer {
    /// Analyzer whose per-k runs use the given iteration settings.
    ///
    /// # Errors
    ///
    /// `Validation` if the settings would be rejected by [`KMeansConfig`].
    pub fn new(max_iterations: usize, convergence_threshold: f64) -> RaporResult<Self> {
        KMeansConfig::new(1, max_iterations, convergence_threshold)?;
        Ok(Self {
            engine: KMeansEngine::new(),
            max_iterations,
            convergence_threshold,
        })
    }

    /// Compute the WCSS curve for k = 1..=max_k and its elbow.
    ///
    /// # Errors
    ///
    /// - `Validation` if max_k is 0
    /// - `InsufficientData` if max_k exceeds the number of vectors
    /// - Any error from the underlying k-means runs
    pub fn run<R: Rng + ?Sized>(
        &self,
        vectors: &[FeatureVector],
        max_k: usize,
        rng: &mut R,
    ) -> RaporResult<ElbowAnalysis> {
        if max_k == 0 {
            return Err(RaporError::validation("max_k must be >= 1"));
        }
        if max_k > vectors.len() {
            return Err(RaporError::insufficient_data(
                max_k,
                vectors.len(),
                format!("elbow analysis with max_k={}", max_k),
            ));
        }

        info!(max_k, n = vectors.len(), "Starting elbow analysis");

        let mut points = Vec::with_capacity(max_k);
        let mut previous: Option<KMeansOutput> = None;
        for k in 1..=max_k {
            let config = KMeansConfig::new(k, self.max_iterations, self.convergence_threshold)?;
            let random = self.engine.run(vectors, &config, rng)?;

            // Lloyd steps never raise WCSS, so a run seeded with the k-1
            // solution plus one centroid cannot end above WCSS(k-1).
            let output = match previous {
                Some(prev) => {
                    let warm = self.engine.run_from_centroids(
                        vectors,
                        &config,
                        grow_centroids(vectors, &prev),
                    )?;
                    if warm.wcss < random.wcss {
                        debug!(k, random = random.wcss, warm = warm.wcss, "warm start kept");
                        warm
                    } else {
                        random
                    }
                }
                None => random,
            };

            debug!(k, wcss = output.wcss, iterations = output.iterations, "elbow point");
            points.push(ElbowPoint::new(k, output.wcss));
            previous = Some(output);
        }

        let optimal_k = find_elbow(&points);

        info!(optimal_k, "Elbow analysis completed");

        Ok(ElbowAnalysis { points, optimal_k })
    }
}

/// Centroids of `previous` plus the vector farthest from its centroid.
///
/// The first vector wins ties.
fn grow_centroids(vectors: &[FeatureVector], previous: &KMeansOutput) -> Vec<Centroid> {
    let mut farthest = 0;
    for (i, assignment) in previous.assignments.iter().enumerate() {
        if assignment.distance > previous.assignments[farthest].distance {
            farthest = i;
        }
    }

    let mut centroids = previous.centroids.clone();
    centroids.push(vectors[farthest].values.clone());
    centroids
}
