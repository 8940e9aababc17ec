//! Pivot grade rows into per-student feature vectors.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::config::constants::grades::MISSING_SCORE;
use crate::types::{FeatureVector, GradeRow, Period, StudentId, SubjectId};

/// Builds one [`FeatureVector`] per student against a frozen subject order.
///
/// The subject order is passed in once and never re-fetched, so every vector
/// built by the same builder has length `subject_order.len()` even if
/// subjects are added elsewhere while a run is in progress.
#[derive(Debug, Clone)]
pub struct FeatureVectorBuilder {
    subject_order: Vec<SubjectId>,
    positions: HashMap<SubjectId, usize>,
}

impl FeatureVectorBuilder {
    /// Create a builder for the given ordered subject list.
    ///
    /// Repeated subject ids are dropped after their first occurrence, so the
    /// dimension counts each subject once.
    pub fn new(subject_order: Vec<SubjectId>) -> Self {
        let requested = subject_order.len();
        let mut positions = HashMap::with_capacity(requested);
        let mut unique = Vec::with_capacity(requested);
        for subject in subject_order {
            if let Entry::Vacant(slot) = positions.entry(subject) {
                slot.insert(unique.len());
                unique.push(subject);
            }
        }

        if unique.len() != requested {
            debug!(
                "Subject order had {} repeated ids, dimension is {}",
                requested - unique.len(),
                unique.len()
            );
        }

        Self {
            subject_order: unique,
            positions,
        }
    }

    /// Length of every vector this builder produces.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.subject_order.len()
    }

    pub fn subject_order(&self) -> &[SubjectId] {
        &self.subject_order
    }

    /// Build vectors for `period` from `rows`.
    ///
    /// - Rows for other periods are ignored.
    /// - Rows for subjects outside the subject order are ignored.
    /// - A later row for the same (student, subject) overwrites an earlier one.
    /// - Output is sorted by ascending student id.
    ///
    /// Returns an empty vector when nothing matches; the caller decides
    /// whether that is an error.
    pub fn build(&self, period: &Period, rows: &[GradeRow]) -> Vec<FeatureVector> {
        let dim = self.dimension();
        let mut pivot: BTreeMap<StudentId, Vec<f64>> = BTreeMap::new();
        let mut skipped_period = 0usize;
        let mut skipped_subject = 0usize;

        for row in rows {
            if &row.period != period {
                skipped_period += 1;
                continue;
            }
            let Some(&position) = self.positions.get(&row.subject_id) else {
                skipped_subject += 1;
                continue;
            };
            let values = pivot
                .entry(row.student_id)
                .or_insert_with(|| vec![MISSING_SCORE; dim]);
            values[position] = row.score;
        }

        if skipped_period > 0 || skipped_subject > 0 {
            debug!(
                "Feature builder skipped {} rows from other periods and {} rows for unknown subjects",
                skipped_period, skipped_subject
            );
        }

        let vectors: Vec<FeatureVector> = pivot
            .into_iter()
            .map(|(student_id, values)| FeatureVector::new(student_id, period.clone(), values))
            .collect();

        debug!(
            "Built {} feature vectors of dimension {} for period {}",
            vectors.len(),
            dim,
            period
        );

        vectors
    }
}
