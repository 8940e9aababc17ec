//! K-Means clustering of student feature vectors.
//!
//! # CRITICAL: NO PARTIAL RESULTS
//!
//! Clustering failures are fatal. If a run cannot complete, the error
//! propagates immediately and nothing is returned.
//!
//! # Algorithm
//!
//! 1. Initialize k centroids by drawing k vectors uniformly at random
//!    (with replacement, duplicates allowed)
//! 2. Assign each vector to its nearest centroid (Euclidean distance, lowest
//!    index wins ties)
//! 3. Recompute centroids as the mean of assigned vectors; an empty cluster
//!    keeps its previous centroid
//! 4. Stop when every centroid moved less than the convergence threshold,
//!    or after max_iterations
//!
//! For one-dimensional vectors (averaged scores) the Euclidean distance is
//! the absolute difference, so both clustering modes share this engine.
//!
//! # Randomness
//!
//! The random source is injected. Production callers pass an entropy-seeded
//! generator; tests pass a seeded `ChaCha8Rng` to pin outcomes.
//!
//! # Fail-Fast Validation
//!
//! - k must be > 0 and <= vectors.len()
//! - max_iterations must be > 0
//! - convergence_threshold must be finite and > 0.0
//! - vectors must not be empty and must share one dimension

mod algorithms;
mod config;
mod engine;
mod metrics;
#[cfg(test)]
mod tests;
mod types;

pub use algorithms::compute_wcss;
pub use config::KMeansConfig;
pub use engine::{KMeansClustering, KMeansEngine};
pub use metrics::{euclidean_distance, euclidean_distance_squared};
pub use types::{Centroid, ClusterAssignment, KMeansOutput};
