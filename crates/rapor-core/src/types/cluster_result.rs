//! Persisted clustering result row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ClusteringAlgorithm, Period, StudentId};

/// One student's outcome of one clustering run.
///
/// Exactly one row exists per student per period; a new run for the same
/// period replaces every row of the previous run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterResult {
    /// Identifier shared by all rows written by the same run.
    pub run_id: Uuid,

    pub student_id: StudentId,

    pub period: Period,

    /// Display rank of the student's cluster: 1 = highest-performing.
    pub cluster: usize,

    /// Severity label, e.g. "Tinggi".
    pub label: String,

    /// Euclidean distance from the student's vector to its centroid.
    pub distance: f64,

    pub algorithm: ClusteringAlgorithm,

    /// Number of clusters the run was asked for.
    pub k: usize,

    pub created_at: DateTime<Utc>,
}
