//! Exit codes for rejected requests.

use tempfile::TempDir;

use super::helpers::{run_cli, write_import, EXIT_WARNING, PERIOD};

#[test]
fn test_k_larger_than_students_exits_1() {
    let tmp = TempDir::new().expect("temp dir");
    let db = tmp.path().join("db");
    let doc = write_import(tmp.path(), &[10.0, 50.0, 52.0, 90.0]);
    run_cli(&db, &["grades", "import", "--file", doc.to_str().expect("utf-8 path")]);

    let mut args = vec!["cluster", "run", "-k", "5"];
    args.extend_from_slice(&PERIOD);
    let result = run_cli(&db, &args);

    assert_eq!(result.exit_code, EXIT_WARNING, "stderr: {}", result.stderr);
    assert!(result.stdout.is_empty());
    assert!(result.stderr.contains("Insufficient data"), "stderr: {}", result.stderr);
}

#[test]
fn test_invalid_score_import_exits_1_and_stores_nothing() {
    let tmp = TempDir::new().expect("temp dir");
    let db = tmp.path().join("db");
    let doc = write_import(tmp.path(), &[70.0, 120.0]);

    let result = run_cli(&db, &["grades", "import", "--file", doc.to_str().expect("utf-8 path")]);
    assert_eq!(result.exit_code, EXIT_WARNING, "stderr: {}", result.stderr);

    let subjects = run_cli(&db, &["grades", "subjects"]);
    assert_eq!(subjects.json().as_array().map(Vec::len), Some(0));
}

#[test]
fn test_unknown_algorithm_exits_1() {
    let tmp = TempDir::new().expect("temp dir");
    let mut args = vec!["cluster", "run", "-k", "2", "--algorithm", "dbscan"];
    args.extend_from_slice(&PERIOD);

    let result = run_cli(&tmp.path().join("db"), &args);

    assert_eq!(result.exit_code, EXIT_WARNING);
}
