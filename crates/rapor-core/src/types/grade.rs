//! Raw grade rows and identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::constants::grades::{MAX_SCORE, MIN_SCORE};
use crate::error::{RaporError, RaporResult};

use super::Period;

/// Student identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub u64);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Subject identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(pub u64);

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One recorded grade: a student's score in one subject for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRow {
    pub student_id: StudentId,
    pub subject_id: SubjectId,
    /// Score in [0, 100].
    pub score: f64,
    pub period: Period,
}

impl GradeRow {
    pub fn new(student_id: StudentId, subject_id: SubjectId, score: f64, period: Period) -> Self {
        Self {
            student_id,
            subject_id,
            score,
            period,
        }
    }

    /// Check the score is a finite number in [0, 100] and the period is valid.
    ///
    /// Grade stores call this on write so the clustering pipeline only ever
    /// sees finite scores.
    pub fn validate(&self) -> RaporResult<()> {
        if !self.score.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&self.score) {
            return Err(RaporError::validation(format!(
                "score for student {} subject {} must be in [{}, {}], got {}",
                self.student_id, self.subject_id, MIN_SCORE, MAX_SCORE, self.score
            )));
        }
        self.period.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period() -> Period {
        Period::new("Ganjil", "2024/2025").unwrap()
    }

    #[test]
    fn test_valid_scores_pass() {
        for score in [0.0, 55.5, 100.0] {
            let row = GradeRow::new(StudentId(1), SubjectId(2), score, period());
            assert!(row.validate().is_ok(), "score {} must be valid", score);
        }
    }

    #[test]
    fn test_out_of_range_and_non_finite_scores_fail() {
        for score in [-0.5, 100.01, f64::NAN, f64::INFINITY] {
            let row = GradeRow::new(StudentId(1), SubjectId(2), score, period());
            assert!(row.validate().is_err(), "score {} must be rejected", score);
        }
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let json = serde_json::to_string(&StudentId(42)).unwrap();
        assert_eq!(json, "42");
        let id: SubjectId = serde_json::from_str("7").unwrap();
        assert_eq!(id, SubjectId(7));
    }
}
