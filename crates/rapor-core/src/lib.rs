//! Rapor Core Library
//!
//! Groups students by academic performance. Grade rows are pivoted into
//! per-student feature vectors, partitioned with K-Means, and the clusters
//! ranked by centroid score and labeled ("Tinggi", "Sedang", "Rendah" …).
//! Elbow analysis suggests a cluster count.
//!
//! # Architecture
//!
//! This crate defines:
//! - Domain types (`Period`, `GradeRow`, `FeatureVector`, `ClusterResult`)
//! - The algorithms (`features`, `clustering`, `ranking`, `elbow`)
//! - Collaborator traits (`GradeStore`, `ClusterResultStore`) and in-memory stubs
//! - `ClusteringService`, which orchestrates a run end to end
//! - Error types, result aliases and configuration
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use rapor_core::clustering::{KMeansClustering, KMeansConfig, KMeansEngine};
//! use rapor_core::ranking::rank_clusters;
//! use rapor_core::types::{FeatureVector, Period, StudentId};
//!
//! let period = Period::new("Ganjil", "2024/2025").unwrap();
//! let vectors: Vec<FeatureVector> = [10.0, 20.0, 80.0, 90.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, s)| FeatureVector::new(StudentId(i as u64), period.clone(), vec![*s]))
//!     .collect();
//!
//! let config = KMeansConfig::with_k(2).unwrap();
//! let output = KMeansEngine::new()
//!     .run(&vectors, &config, &mut ChaCha8Rng::seed_from_u64(42))
//!     .unwrap();
//! let ranked = rank_clusters(&output.centroids);
//!
//! let top = &ranked[output.assignments[3].cluster];
//! assert_eq!(top.label, "Tinggi");
//! ```

pub mod clustering;
pub mod config;
pub mod elbow;
pub mod error;
pub mod features;
pub mod ranking;
pub mod service;
pub mod statistics;
pub mod stubs;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use config::ClusteringConfig;
pub use error::{RaporError, RaporResult};
pub use service::{ClusteringRequest, ClusteringRun, ClusteringService, ElbowRequest};
