//! In-memory GradeStore.

use std::sync::RwLock;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use crate::error::{RaporError, RaporResult};
use crate::traits::GradeStore;
use crate::types::{GradeRow, Period, SubjectId};

/// Thread-safe in-memory grade store.
///
/// Rows are kept per period in insertion order; the subject order is the
/// order subjects were added.
#[derive(Debug, Default)]
pub struct InMemoryGradeStore {
    subjects: RwLock<Vec<SubjectId>>,
    grades: DashMap<Period, Vec<GradeRow>>,
}

impl InMemoryGradeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a subject to the order. Adding a known subject is a no-op.
    pub fn add_subject(&self, subject: SubjectId) -> RaporResult<()> {
        let mut subjects = self
            .subjects
            .write()
            .map_err(|e| RaporError::persistence(format!("subject lock poisoned: {}", e)))?;
        if !subjects.contains(&subject) {
            subjects.push(subject);
        }
        Ok(())
    }

    /// Record one grade after validating it.
    pub fn add_grade(&self, row: GradeRow) -> RaporResult<()> {
        row.validate()?;
        self.grades.entry(row.period.clone()).or_default().push(row);
        Ok(())
    }

    /// Record many grades; stops at the first invalid row.
    pub fn add_grades(&self, rows: impl IntoIterator<Item = GradeRow>) -> RaporResult<usize> {
        let mut count = 0;
        for row in rows {
            self.add_grade(row)?;
            count += 1;
        }
        Ok(count)
    }
}

#[async_trait]
impl GradeStore for InMemoryGradeStore {
    async fn fetch_grades(&self, period: &Period) -> RaporResult<Vec<GradeRow>> {
        let rows = self
            .grades
            .get(period)
            .map(|r| r.value().clone())
            .unwrap_or_default();
        debug!(period = %period, rows = rows.len(), "Fetched grades");
        Ok(rows)
    }

    async fn fetch_subject_order(&self) -> RaporResult<Vec<SubjectId>> {
        let subjects = self
            .subjects
            .read()
            .map_err(|e| RaporError::persistence(format!("subject lock poisoned: {}", e)))?;
        Ok(subjects.clone())
    }
}
