//! Atomic replace-on-rerun tests.

use super::common::{create_result, ganjil, genap, setup_db};
use rapor_core::traits::ClusterResultStore;
use uuid::Uuid;

#[test]
fn test_replace_removes_every_previous_row() {
    let (db, _tmp) = setup_db();
    let p = ganjil();
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    println!("=== REPLACE TEST ===");
    let old: Vec<_> = (1..=10).map(|s| create_result(&p, s, first, 3)).collect();
    db.replace_results(&p, &old).expect("first replace");

    println!("TRIGGER: replace 10 rows with 4 rows of a new run");
    let new: Vec<_> = (3..=6).map(|s| create_result(&p, s, second, 2)).collect();
    db.replace_results(&p, &new).expect("second replace");

    let stored = db.results_for_period(&p).expect("list");
    println!("VERIFY: {} rows stored", stored.len());
    assert_eq!(stored.len(), 4);
    assert!(stored.iter().all(|r| r.run_id == second && r.k == 2));
    println!("RESULT: PASSED");
}

#[test]
fn test_replace_leaves_other_periods_untouched() {
    let (db, _tmp) = setup_db();
    let a = ganjil();
    let b = genap();

    db.replace_results(&a, &[create_result(&a, 1, Uuid::new_v4(), 2)]).unwrap();
    db.replace_results(&b, &[create_result(&b, 1, Uuid::new_v4(), 2), create_result(&b, 2, Uuid::new_v4(), 2)])
        .unwrap();
    db.replace_results(&a, &[]).unwrap();

    assert!(db.results_for_period(&a).unwrap().is_empty());
    assert_eq!(db.results_for_period(&b).unwrap().len(), 2);
    assert_eq!(db.result_periods().unwrap(), vec![b]);
}

#[test]
fn test_clear_counts_removed_rows() {
    let (db, _tmp) = setup_db();
    let p = ganjil();
    let rows: Vec<_> = (1..=5).map(|s| create_result(&p, s, Uuid::new_v4(), 2)).collect();
    db.replace_results(&p, &rows).unwrap();

    assert_eq!(db.delete_results(&p).unwrap(), 5);
    assert_eq!(db.delete_results(&p).unwrap(), 0);
    assert!(db.result_periods().unwrap().is_empty());
}

#[test]
fn test_results_survive_reopen() {
    let (db, tmp) = setup_db();
    let p = ganjil();
    let run_id = Uuid::new_v4();
    db.replace_results(&p, &[create_result(&p, 7, run_id, 2)]).unwrap();
    drop(db);

    let reopened = rapor_storage::RocksDbRaporStore::open(tmp.path()).expect("reopen");
    let stored = reopened.results_for_period(&p).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].run_id, run_id);
}

#[tokio::test]
async fn test_trait_impl_delegates() {
    let (db, _tmp) = setup_db();
    let p = ganjil();
    let rows = vec![create_result(&p, 1, Uuid::new_v4(), 2)];

    assert_eq!(db.replace_cluster_results(&p, rows).await.unwrap(), 1);
    assert_eq!(db.list_cluster_results(&p).await.unwrap().len(), 1);
    assert_eq!(db.list_periods().await.unwrap(), vec![p.clone()]);
    assert_eq!(db.clear_cluster_results(&p).await.unwrap(), 1);
}
