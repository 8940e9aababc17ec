//! Request and response types of the clustering service.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ranking::RankedCluster;
use crate::statistics::ClusterStatistics;
use crate::types::{ClusteringAlgorithm, Period, StudentOutcome};

/// Parameters of a clustering run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteringRequest {
    pub period: Period,
    /// Algorithm name; `None` uses the configured default.
    #[serde(default)]
    pub algorithm: Option<String>,
    pub k: usize,
}

impl ClusteringRequest {
    pub fn new(period: Period, k: usize) -> Self {
        Self {
            period,
            algorithm: None,
            k,
        }
    }

    #[must_use]
    pub fn with_algorithm(mut self, name: impl Into<String>) -> Self {
        self.algorithm = Some(name.into());
        self
    }
}

/// Parameters of an elbow analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElbowRequest {
    pub period: Period,
    /// Requested upper k; `None` uses the configured cap.
    #[serde(default)]
    pub max_k: Option<usize>,
}

impl ElbowRequest {
    pub fn new(period: Period, max_k: Option<usize>) -> Self {
        Self { period, max_k }
    }
}

/// Outcome of a completed clustering run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteringRun {
    pub run_id: Uuid,
    pub period: Period,
    pub algorithm: ClusteringAlgorithm,
    pub k: usize,
    /// One entry per student, ascending student id.
    pub outcomes: Vec<StudentOutcome>,
    /// Clusters in rank order, rank 1 first.
    pub clusters: Vec<RankedCluster>,
    pub iterations: usize,
    pub converged: bool,
    pub wcss: f64,
    pub statistics: ClusterStatistics,
}
