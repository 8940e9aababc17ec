//! JSON grade import.
//!
//! ```json
//! {
//!   "subjects": [{"id": 1, "name": "Matematika"}, {"id": 2, "name": "IPA"}],
//!   "grades": [
//!     {"student_id": 10, "subject_id": 1, "score": 85.5,
//!      "semester": "Ganjil", "academic_year": "2024/2025"}
//!   ]
//! }
//! ```
//!
//! The import is validated as a whole before anything is written.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use rapor_core::types::{GradeRow, Period, StudentId, SubjectId};

use crate::error::{StorageError, StorageResult};
use crate::store::{RocksDbRaporStore, SubjectRecord};

/// One grade as it appears in an import document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRecord {
    pub student_id: u64,
    pub subject_id: u64,
    pub score: f64,
    pub semester: String,
    pub academic_year: String,
}

/// An import document: subjects in order, then grades.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradeImport {
    #[serde(default)]
    pub subjects: Vec<SubjectRecord>,
    #[serde(default)]
    pub grades: Vec<GradeRecord>,
}

/// What an import wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub subjects_added: usize,
    pub grades_stored: usize,
}

impl GradeImport {
    /// Parse an import document from JSON text.
    pub fn from_json_str(json: &str) -> StorageResult<Self> {
        serde_json::from_str(json).map_err(|e| StorageError::Serialization {
            type_name: "GradeImport",
            message: e.to_string(),
        })
    }

    /// Read and parse an import document.
    pub fn from_file(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            StorageError::ValidationFailed(format!(
                "cannot read import file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&contents)
    }

    /// Convert records to validated grade rows.
    pub fn to_rows(&self) -> StorageResult<Vec<GradeRow>> {
        self.grades
            .iter()
            .map(|g| -> StorageResult<GradeRow> {
                let period = Period::new(g.semester.as_str(), g.academic_year.as_str())
                    .map_err(|e| StorageError::ValidationFailed(e.to_string()))?;
                let row = GradeRow::new(
                    StudentId(g.student_id),
                    SubjectId(g.subject_id),
                    g.score,
                    period,
                );
                row.validate()
                    .map_err(|e| StorageError::ValidationFailed(e.to_string()))?;
                Ok(row)
            })
            .collect()
    }
}

impl RocksDbRaporStore {
    /// Import subjects and grades.
    ///
    /// Every grade must reference a subject that is either already stored or
    /// listed in the document. Nothing is written if any record is invalid.
    pub fn import(&self, doc: &GradeImport) -> StorageResult<ImportSummary> {
        let rows = doc.to_rows()?;

        let mut known: HashSet<SubjectId> = self.subjects()?.into_iter().map(|s| s.id).collect();
        known.extend(doc.subjects.iter().map(|s| s.id));
        if let Some(orphan) = rows.iter().find(|r| !known.contains(&r.subject_id)) {
            return Err(StorageError::ValidationFailed(format!(
                "grade for student {} references unknown subject {}",
                orphan.student_id, orphan.subject_id
            )));
        }

        let subjects_added = self.add_subjects(&doc.subjects)?;
        let grades_stored = self.put_grades(&rows)?;

        info!(subjects_added, grades_stored, "Grade import completed");
        Ok(ImportSummary {
            subjects_added,
            grades_stored,
        })
    }
}
