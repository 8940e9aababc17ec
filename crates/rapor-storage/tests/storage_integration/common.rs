//! Common test utilities for integration tests.

use chrono::Utc;
use rapor_core::types::{ClusterResult, ClusteringAlgorithm, Period, StudentId};
use rapor_storage::{GradeImport, GradeRecord, RocksDbRaporStore, SubjectRecord};
use rapor_core::types::SubjectId;
use tempfile::TempDir;
use uuid::Uuid;

/// Setup a fresh RocksDB instance in a temporary directory
pub fn setup_db() -> (RocksDbRaporStore, TempDir) {
    let tmp = TempDir::new().expect("create temp dir");
    let db = RocksDbRaporStore::open(tmp.path()).expect("open db");
    (db, tmp)
}

pub fn ganjil() -> Period {
    Period::new("Ganjil", "2024/2025").expect("valid period")
}

pub fn genap() -> Period {
    Period::new("Genap", "2024/2025").expect("valid period")
}

/// Result row for `student` in `period` written by run `run_id`.
pub fn create_result(period: &Period, student: u64, run_id: Uuid, k: usize) -> ClusterResult {
    ClusterResult {
        run_id,
        student_id: StudentId(student),
        period: period.clone(),
        cluster: 1,
        label: "Tinggi".to_string(),
        distance: 0.0,
        algorithm: ClusteringAlgorithm::KMeans,
        k,
        created_at: Utc::now(),
    }
}

/// Import document with two subjects and one averaged score per student.
pub fn create_import(period: &Period, scores: &[f64]) -> GradeImport {
    let mut grades = Vec::new();
    for (i, score) in scores.iter().enumerate() {
        for subject in [1u64, 2] {
            grades.push(GradeRecord {
                student_id: i as u64 + 1,
                subject_id: subject,
                score: *score,
                semester: period.semester.clone(),
                academic_year: period.academic_year.clone(),
            });
        }
    }
    GradeImport {
        subjects: vec![
            SubjectRecord::new(SubjectId(1), "Matematika"),
            SubjectRecord::new(SubjectId(2), "Bahasa Indonesia"),
        ],
        grades,
    }
}
