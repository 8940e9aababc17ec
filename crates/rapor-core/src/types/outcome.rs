//! Per-student outcome of a clustering run.

use serde::{Deserialize, Serialize};

use super::StudentId;

/// What a clustering run reports for one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentOutcome {
    pub student_id: StudentId,
    /// Display rank, 1 = highest-performing cluster.
    pub cluster: usize,
    pub label: String,
    /// Euclidean distance to the cluster centroid.
    pub distance: f64,
    /// Average over all subjects, zero-filled subjects included.
    pub mean_score: f64,
}
