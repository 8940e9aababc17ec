//! ClusteringService running on top of the RocksDB store.

use std::sync::Arc;

use super::common::{create_import, ganjil, setup_db};
use rapor_core::{ClusteringConfig, ClusteringRequest, ClusteringService, ElbowRequest};

#[tokio::test]
async fn test_cluster_and_rerun_on_rocksdb() {
    let (db, _tmp) = setup_db();
    db.import(&create_import(&ganjil(), &[10.0, 20.0, 80.0, 90.0, 55.0, 50.0]))
        .unwrap();
    let db = Arc::new(db);
    let service = ClusteringService::new(
        db.clone(),
        db.clone(),
        ClusteringConfig::default().with_seed(7),
    )
    .unwrap();

    let first = service
        .run_clustering(ClusteringRequest::new(ganjil(), 3))
        .await
        .unwrap();
    let second = service
        .run_clustering(ClusteringRequest::new(ganjil(), 2))
        .await
        .unwrap();

    let stored = db.results_for_period(&ganjil()).unwrap();
    assert_eq!(stored.len(), 6);
    assert!(stored.iter().all(|r| r.run_id == second.run_id));
    assert!(!stored.iter().any(|r| r.run_id == first.run_id));

    let high = stored.iter().find(|r| r.student_id.0 == 4).unwrap();
    assert_eq!(high.cluster, 1);
    assert_eq!(high.label, "Tinggi");

    println!("[VERIFIED] Rerun on RocksDB replaced every row of the first run");
}

#[tokio::test]
async fn test_elbow_on_rocksdb_stores_nothing() {
    let (db, _tmp) = setup_db();
    db.import(&create_import(&ganjil(), &[10.0, 12.0, 50.0, 52.0, 90.0, 92.0]))
        .unwrap();
    let db = Arc::new(db);
    let service = ClusteringService::new(
        db.clone(),
        db.clone(),
        ClusteringConfig::default().with_seed(3),
    )
    .unwrap();

    let analysis = service
        .run_elbow_analysis(ElbowRequest::new(ganjil(), None))
        .await
        .unwrap();

    assert_eq!(analysis.k_values(), vec![1, 2, 3, 4, 5]);
    assert!(db.result_periods().unwrap().is_empty());
}
