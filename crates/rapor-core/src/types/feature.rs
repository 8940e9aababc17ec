//! Per-student feature vector.

use serde::{Deserialize, Serialize};

use super::{Period, StudentId};

/// Numeric representation of one student for one period.
///
/// Component `i` is the score for the subject at position `i` of the subject
/// order the vector was built with. All vectors compared within one run share
/// that order and therefore the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub student_id: StudentId,
    pub period: Period,
    pub values: Vec<f64>,
}

impl FeatureVector {
    pub fn new(student_id: StudentId, period: Period, values: Vec<f64>) -> Self {
        Self {
            student_id,
            period,
            values,
        }
    }

    /// Number of components (= number of known subjects).
    #[inline]
    pub fn dim(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Mean of the components, 0.0 for a zero-length vector.
    ///
    /// This is the student's average score including zero-filled subjects.
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            0.0
        } else {
            self.values.iter().sum::<f64>() / self.values.len() as f64
        }
    }
}
