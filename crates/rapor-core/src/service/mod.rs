//! Clustering orchestration.
//!
//! [`ClusteringService`] ties the collaborators to the algorithms:
//!
//! ```text
//! GradeStore ──► FeatureVectorBuilder ──► KMeansEngine ──► rank_clusters ──► ClusterResultStore
//!                         │
//!                         └──────────────► ElbowAnalyzer (no persistence)
//! ```

mod clustering_service;
mod requests;
#[cfg(test)]
mod tests;

pub use clustering_service::ClusteringService;
pub use requests::{ClusteringRequest, ClusteringRun, ElbowRequest};
