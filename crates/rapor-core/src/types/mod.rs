//! Domain types for the clustering pipeline.
//!
//! - [`Period`]: the (semester, academic year) scope of grades and results
//! - [`GradeRow`]: one raw grade for a student, subject and period
//! - [`FeatureVector`]: per-student numeric input to K-Means
//! - [`ClusterResult`]: one persisted row per student per clustering run
//! - [`StudentOutcome`]: what a run reports per student
//! - [`ClusteringAlgorithm`]: supported algorithm names

mod algorithm;
mod cluster_result;
mod feature;
mod grade;
mod outcome;
mod period;

pub use algorithm::ClusteringAlgorithm;
pub use cluster_result::ClusterResult;
pub use feature::FeatureVector;
pub use grade::{GradeRow, StudentId, SubjectId};
pub use outcome::StudentOutcome;
pub use period::Period;
