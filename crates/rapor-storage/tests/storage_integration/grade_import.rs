//! Grade import tests.

use super::common::{create_import, ganjil, genap, setup_db};
use rapor_core::traits::GradeStore;
use rapor_core::types::SubjectId;
use rapor_storage::{GradeImport, StorageError};

#[test]
fn test_import_then_fetch() {
    let (db, _tmp) = setup_db();
    let p = ganjil();

    let summary = db.import(&create_import(&p, &[60.0, 70.0, 80.0])).expect("import");

    assert_eq!(summary.subjects_added, 2);
    assert_eq!(summary.grades_stored, 6);
    assert_eq!(db.grades_for_period(&p).unwrap().len(), 6);
    assert!(db.grades_for_period(&genap()).unwrap().is_empty());
}

#[test]
fn test_second_import_keeps_subject_order() {
    let (db, _tmp) = setup_db();
    db.import(&create_import(&ganjil(), &[60.0])).unwrap();

    let summary = db.import(&create_import(&genap(), &[75.0, 65.0])).unwrap();

    assert_eq!(summary.subjects_added, 0);
    let ids: Vec<_> = db.subjects().unwrap().into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![SubjectId(1), SubjectId(2)]);
}

#[test]
fn test_import_with_unknown_subject_writes_nothing() {
    let (db, _tmp) = setup_db();
    let mut doc = create_import(&ganjil(), &[60.0]);
    doc.grades[0].subject_id = 99;

    let err = db.import(&doc).unwrap_err();

    assert!(matches!(err, StorageError::ValidationFailed(_)));
    assert!(db.subjects().unwrap().is_empty());
    assert!(db.grades_for_period(&ganjil()).unwrap().is_empty());
}

#[test]
fn test_import_from_json_file() {
    let (db, tmp) = setup_db();
    let path = tmp.path().join("grades.json");
    let doc = create_import(&ganjil(), &[88.0, 92.0]);
    std::fs::write(&path, serde_json::to_string(&doc).unwrap()).unwrap();

    let parsed = GradeImport::from_file(&path).unwrap();
    assert_eq!(parsed, doc);
    db.import(&parsed).unwrap();
    assert_eq!(db.grades_for_period(&ganjil()).unwrap().len(), 4);
}

#[tokio::test]
async fn test_grade_store_trait() {
    let (db, _tmp) = setup_db();
    db.import(&create_import(&ganjil(), &[50.0, 90.0])).unwrap();

    let order = db.fetch_subject_order().await.unwrap();
    let rows = db.fetch_grades(&ganjil()).await.unwrap();

    assert_eq!(order, vec![SubjectId(1), SubjectId(2)]);
    assert_eq!(rows.len(), 4);
}
