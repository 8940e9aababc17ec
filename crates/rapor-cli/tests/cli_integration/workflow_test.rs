//! Import, cluster, inspect and clear through the binary.

use tempfile::TempDir;

use super::helpers::{run_cli, write_import, EXIT_SUCCESS, PERIOD};

#[test]
fn test_import_cluster_list_clear() {
    let tmp = TempDir::new().expect("temp dir");
    let db = tmp.path().join("db");
    let doc = write_import(tmp.path(), &[10.0, 20.0, 80.0, 90.0]);
    let doc = doc.to_str().expect("utf-8 path");

    println!("=== CLI WORKFLOW TEST ===");
    let import = run_cli(&db, &["grades", "import", "--file", doc]);
    assert_eq!(import.exit_code, EXIT_SUCCESS, "stderr: {}", import.stderr);
    assert_eq!(import.json()["grades_stored"], 4);

    let mut run_args = vec!["cluster", "run", "-k", "2"];
    run_args.extend_from_slice(&PERIOD);
    let run = run_cli(&db, &run_args);
    assert_eq!(run.exit_code, EXIT_SUCCESS, "stderr: {}", run.stderr);
    let run_json = run.json();
    assert_eq!(run_json["outcomes"][3]["label"], "Tinggi");
    assert_eq!(run_json["outcomes"][0]["label"], "Rendah");

    let mut list_args = vec!["results", "list", "--label", "TINGGI"];
    list_args.extend_from_slice(&PERIOD);
    let list = run_cli(&db, &list_args);
    assert_eq!(list.exit_code, EXIT_SUCCESS, "stderr: {}", list.stderr);
    assert_eq!(list.json().as_array().map(Vec::len), Some(2));

    let mut stats_args = vec!["results", "stats"];
    stats_args.extend_from_slice(&PERIOD);
    let stats = run_cli(&db, &stats_args);
    assert_eq!(stats.json()["total_results"], 4);

    let periods = run_cli(&db, &["results", "periods"]);
    assert_eq!(periods.json().as_array().map(Vec::len), Some(1));

    let mut clear_args = vec!["results", "clear"];
    clear_args.extend_from_slice(&PERIOD);
    let clear = run_cli(&db, &clear_args);
    assert_eq!(clear.json()["removed"], 4);

    let after = run_cli(&db, &list_args);
    assert_eq!(after.json().as_array().map(Vec::len), Some(0));
    println!("RESULT: PASSED");
}

#[test]
fn test_elbow_prints_recommendation() {
    let tmp = TempDir::new().expect("temp dir");
    let db = tmp.path().join("db");
    let doc = write_import(tmp.path(), &[10.0, 12.0, 50.0, 52.0, 90.0, 92.0]);
    run_cli(&db, &["grades", "import", "--file", doc.to_str().expect("utf-8 path")]);

    let mut args = vec!["cluster", "elbow", "--max-k", "4"];
    args.extend_from_slice(&PERIOD);
    let elbow = run_cli(&db, &args);

    assert_eq!(elbow.exit_code, EXIT_SUCCESS, "stderr: {}", elbow.stderr);
    let json = elbow.json();
    assert_eq!(json["points"].as_array().map(Vec::len), Some(4));
    assert!(json["recommendation"]
        .as_str()
        .is_some_and(|r| r.starts_with("Berdasarkan analisis elbow")));
}
