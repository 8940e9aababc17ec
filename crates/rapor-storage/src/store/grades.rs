//! Subject and grade operations.

use std::collections::HashSet;

use async_trait::async_trait;
use rocksdb::WriteBatch;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use rapor_core::error::RaporResult;
use rapor_core::traits::GradeStore;
use rapor_core::types::{GradeRow, Period, SubjectId};

use super::RocksDbRaporStore;
use crate::column_families::{CF_GRADES, CF_SUBJECTS};
use crate::error::{hex_key, StorageError, StorageResult};
use crate::schema::{grade_key, parse_subject_key, period_prefix, subject_key};

/// A subject and its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRecord {
    pub id: SubjectId,
    pub name: String,
}

impl SubjectRecord {
    pub fn new(id: SubjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl RocksDbRaporStore {
    /// Subjects in stored order.
    pub fn subjects(&self) -> StorageResult<Vec<SubjectRecord>> {
        self.scan_prefix(CF_SUBJECTS, &[])?
            .into_iter()
            .map(|(key, value)| -> StorageResult<SubjectRecord> {
                parse_subject_key(&key).ok_or_else(|| StorageError::KeyCorrupted {
                    cf: CF_SUBJECTS,
                    details: format!("expected 8-byte position, got {}", hex_key(&key)),
                })?;
                Self::deserialize_with_version(&value, CF_SUBJECTS, &key)
            })
            .collect()
    }

    /// Append subjects not yet known to the end of the order.
    ///
    /// Known subject ids keep their position; a repeated id inside
    /// `subjects` is added once.
    ///
    /// # Returns
    /// Number of subjects added.
    pub fn add_subjects(&self, subjects: &[SubjectRecord]) -> StorageResult<usize> {
        let existing = self.subjects()?;
        let mut known: HashSet<SubjectId> = existing.iter().map(|s| s.id).collect();
        let mut position = existing.len() as u64;

        let cf = self.get_cf(CF_SUBJECTS)?;
        let mut batch = WriteBatch::default();
        let mut added = 0;
        for subject in subjects {
            if !known.insert(subject.id) {
                continue;
            }
            batch.put_cf(cf, subject_key(position), Self::serialize_with_version(subject)?);
            position += 1;
            added += 1;
        }

        if added > 0 {
            self.db
                .write(batch)
                .map_err(|e| StorageError::rocksdb_op("write_batch", CF_SUBJECTS, None, e))?;
        }

        debug!(added, total = position, "Updated subject order");
        Ok(added)
    }

    /// Store grade rows in one atomic write.
    ///
    /// Every row is validated first; one invalid row rejects the whole
    /// batch. A row for an existing (period, student, subject) overwrites it.
    pub fn put_grades(&self, rows: &[GradeRow]) -> StorageResult<usize> {
        for row in rows {
            row.validate()
                .map_err(|e| StorageError::ValidationFailed(e.to_string()))?;
        }

        let cf = self.get_cf(CF_GRADES)?;
        let mut batch = WriteBatch::default();
        for row in rows {
            let key = grade_key(&row.period, row.student_id, row.subject_id);
            batch.put_cf(cf, key, Self::serialize_with_version(row)?);
        }
        self.db
            .write(batch)
            .map_err(|e| StorageError::rocksdb_op("write_batch", CF_GRADES, None, e))?;

        info!(count = rows.len(), "Stored grade rows");
        Ok(rows.len())
    }

    /// Grade rows of `period`, ordered by student then subject id.
    pub fn grades_for_period(&self, period: &Period) -> StorageResult<Vec<GradeRow>> {
        self.scan_prefix(CF_GRADES, &period_prefix(period))?
            .into_iter()
            .map(|(key, value)| Self::deserialize_with_version(&value, CF_GRADES, &key))
            .collect()
    }
}

#[async_trait]
impl GradeStore for RocksDbRaporStore {
    async fn fetch_grades(&self, period: &Period) -> RaporResult<Vec<GradeRow>> {
        Ok(self.grades_for_period(period)?)
    }

    async fn fetch_subject_order(&self) -> RaporResult<Vec<SubjectId>> {
        Ok(self.subjects()?.into_iter().map(|s| s.id).collect())
    }
}
