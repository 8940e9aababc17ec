//! Tests for ClusteringService against the in-memory stores.

use std::sync::Arc;

use super::*;
use crate::config::ClusteringConfig;
use crate::error::RaporError;
use crate::stubs::{InMemoryClusterResultStore, InMemoryGradeStore};
use crate::traits::ClusterResultStore;
use crate::types::{GradeRow, Period, StudentId, SubjectId};

fn period() -> Period {
    Period::new("Ganjil", "2024/2025").unwrap()
}

fn seeded_config() -> ClusteringConfig {
    ClusteringConfig::default().with_seed(42)
}

/// One subject, one score per student (student ids 1..=n).
fn grades_with_scores(scores: &[f64]) -> InMemoryGradeStore {
    let store = InMemoryGradeStore::new();
    store.add_subject(SubjectId(1)).unwrap();
    for (i, score) in scores.iter().enumerate() {
        store
            .add_grade(GradeRow::new(
                StudentId(i as u64 + 1),
                SubjectId(1),
                *score,
                period(),
            ))
            .unwrap();
    }
    store
}

fn service_with(
    grades: InMemoryGradeStore,
) -> (ClusteringService, Arc<InMemoryClusterResultStore>) {
    let results = Arc::new(InMemoryClusterResultStore::new());
    let service =
        ClusteringService::new(Arc::new(grades), results.clone(), seeded_config()).unwrap();
    (service, results)
}

#[tokio::test]
async fn test_two_clusters_high_group_is_tinggi() {
    let (service, results) = service_with(grades_with_scores(&[10.0, 20.0, 80.0, 90.0]));

    let run = service
        .run_clustering(ClusteringRequest::new(period(), 2))
        .await
        .unwrap();

    println!(
        "[AFTER] iterations={}, converged={}, outcomes={:?}",
        run.iterations, run.converged, run.outcomes
    );

    assert_eq!(run.outcomes.len(), 4);
    for outcome in &run.outcomes[..2] {
        assert_eq!(outcome.cluster, 2);
        assert_eq!(outcome.label, "Rendah");
    }
    for outcome in &run.outcomes[2..] {
        assert_eq!(outcome.cluster, 1);
        assert_eq!(outcome.label, "Tinggi");
        assert!((outcome.distance - 5.0).abs() < 1e-9);
    }
    assert_eq!(run.clusters[0].label, "Tinggi");
    assert!((run.clusters[0].score - 85.0).abs() < 1e-9);

    let stored = results.list_cluster_results(&period()).await.unwrap();
    assert_eq!(stored.len(), 4);
    assert!(stored.iter().all(|r| r.run_id == run.run_id && r.k == 2));

    println!("[VERIFIED] {{80,90}} labeled Tinggi and persisted");
}

#[tokio::test]
async fn test_fewer_students_than_k_is_insufficient_data() {
    let (service, results) = service_with(grades_with_scores(&[10.0, 50.0, 52.0, 90.0]));

    let err = service
        .run_clustering(ClusteringRequest::new(period(), 5))
        .await
        .unwrap_err();

    match &err {
        RaporError::InsufficientData {
            required,
            available,
            ..
        } => {
            assert_eq!(*required, 5);
            assert_eq!(*available, 4);
        }
        other => panic!("expected InsufficientData, got {:?}", other),
    }
    assert!(results.list_cluster_results(&period()).await.unwrap().is_empty());

    println!("[VERIFIED] 4 students with k=5 rejected: {}", err);
}

#[tokio::test]
async fn test_rerun_replaces_previous_results() {
    let scores: Vec<f64> = (0..12).map(|i| 20.0 + i as f64 * 6.0).collect();
    let (service, results) = service_with(grades_with_scores(&scores));

    let first = service
        .run_clustering(ClusteringRequest::new(period(), 3))
        .await
        .unwrap();
    let second = service
        .run_clustering(ClusteringRequest::new(period(), 2))
        .await
        .unwrap();

    let stored = results.list_cluster_results(&period()).await.unwrap();
    assert_eq!(stored.len(), 12);
    assert!(stored.iter().all(|r| r.run_id == second.run_id));
    assert!(stored.iter().all(|r| r.k == 2));
    assert!(!stored.iter().any(|r| r.run_id == first.run_id));

    println!("[VERIFIED] Second run fully replaced the first");
}

#[tokio::test]
async fn test_k_validation() {
    let (service, _) = service_with(grades_with_scores(&[10.0, 20.0, 30.0, 40.0, 50.0, 60.0]));

    let zero = service
        .run_clustering(ClusteringRequest::new(period(), 0))
        .await
        .unwrap_err();
    assert!(matches!(zero, RaporError::Validation(_)));

    let too_many = service
        .run_clustering(ClusteringRequest::new(period(), 6))
        .await
        .unwrap_err();
    assert!(matches!(too_many, RaporError::Validation(_)));
    assert!(too_many.to_string().contains("<= 5"));
}

#[tokio::test]
async fn test_algorithm_names() {
    let (service, _) = service_with(grades_with_scores(&[10.0, 20.0, 80.0, 90.0]));

    let run = service
        .run_clustering(ClusteringRequest::new(period(), 2).with_algorithm(" K-Means "))
        .await
        .unwrap();
    assert_eq!(run.algorithm.as_str(), "kmeans");

    let err = service
        .run_clustering(ClusteringRequest::new(period(), 2).with_algorithm("dbscan"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_no_grades_is_insufficient_data() {
    let (service, _) = service_with(InMemoryGradeStore::new());

    let err = service
        .run_clustering(ClusteringRequest::new(period(), 2))
        .await
        .unwrap_err();

    assert!(matches!(err, RaporError::InsufficientData { available: 0, .. }));
}

#[tokio::test]
async fn test_failed_replace_keeps_prior_rows() {
    let (service, results) = service_with(grades_with_scores(&[10.0, 20.0, 80.0, 90.0]));
    let first = service
        .run_clustering(ClusteringRequest::new(period(), 2))
        .await
        .unwrap();

    results.set_fail_writes(true);
    let err = service
        .run_clustering(ClusteringRequest::new(period(), 3))
        .await
        .unwrap_err();

    assert!(err.is_recoverable());
    let stored = results.list_cluster_results(&period()).await.unwrap();
    assert_eq!(stored.len(), 4);
    assert!(stored.iter().all(|r| r.run_id == first.run_id));
}

#[tokio::test]
async fn test_statistics_and_label_filter() {
    let (service, _) = service_with(grades_with_scores(&[10.0, 20.0, 80.0, 90.0, 85.0]));
    let run = service
        .run_clustering(ClusteringRequest::new(period(), 2))
        .await
        .unwrap();

    let tinggi = run.statistics.for_label("Tinggi").unwrap();
    assert_eq!(tinggi.count, 3);
    assert_eq!(tinggi.percentage, 60.0);
    assert!((tinggi.average_score - 85.0).abs() < 1e-9);

    let filtered = service
        .cluster_results(&period(), Some("tinggi"))
        .await
        .unwrap();
    assert_eq!(filtered.len(), 3);
    assert!(filtered.iter().all(|r| r.label == "Tinggi"));

    let all = service.cluster_results(&period(), None).await.unwrap();
    assert_eq!(all.len(), 5);

    let distribution = service.cluster_statistics(&period()).await.unwrap();
    assert_eq!(distribution.total_results, 5);
    assert_eq!(distribution.distribution[0].label, "Tinggi");
    assert_eq!(distribution.distribution[0].percentage, 60.0);
    assert_eq!(distribution.k, Some(2));
}

#[tokio::test]
async fn test_clear_results() {
    let (service, _) = service_with(grades_with_scores(&[10.0, 20.0, 80.0, 90.0]));
    service
        .run_clustering(ClusteringRequest::new(period(), 2))
        .await
        .unwrap();

    assert_eq!(service.result_periods().await.unwrap(), vec![period()]);
    assert_eq!(service.clear_cluster_results(&period()).await.unwrap(), 4);
    assert!(service.cluster_results(&period(), None).await.unwrap().is_empty());
    assert_eq!(service.clear_cluster_results(&period()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_elbow_max_k_one() {
    let (service, results) = service_with(grades_with_scores(&[10.0, 20.0, 80.0, 90.0]));

    let analysis = service
        .run_elbow_analysis(ElbowRequest::new(period(), Some(1)))
        .await
        .unwrap();

    assert_eq!(analysis.k_values(), vec![1]);
    assert_eq!(analysis.optimal_k, 1);
    assert!(results.list_cluster_results(&period()).await.unwrap().is_empty());

    println!("[VERIFIED] Elbow with max_k=1 gives one point, optimal_k=1, nothing stored");
}

#[tokio::test]
async fn test_elbow_caps_max_k() {
    let scores: Vec<f64> = (0..6).map(|i| 10.0 + i as f64 * 15.0).collect();
    let (service, _) = service_with(grades_with_scores(&scores));

    let defaulted = service
        .run_elbow_analysis(ElbowRequest::new(period(), None))
        .await
        .unwrap();
    assert_eq!(defaulted.k_values(), vec![1, 2, 3, 4, 5], "capped at n - 1");

    let requested = service
        .run_elbow_analysis(ElbowRequest::new(period(), Some(3)))
        .await
        .unwrap();
    assert_eq!(requested.k_values(), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_elbow_errors() {
    let (service, _) = service_with(grades_with_scores(&[50.0]));

    let zero = service
        .run_elbow_analysis(ElbowRequest::new(period(), Some(0)))
        .await
        .unwrap_err();
    assert!(matches!(zero, RaporError::Validation(_)));

    let single = service
        .run_elbow_analysis(ElbowRequest::new(period(), Some(3)))
        .await
        .unwrap_err();
    assert!(matches!(single, RaporError::InsufficientData { available: 1, .. }));
}

#[tokio::test]
async fn test_vectors_use_frozen_subject_order() {
    let grades = InMemoryGradeStore::new();
    grades.add_subject(SubjectId(1)).unwrap();
    grades.add_subject(SubjectId(2)).unwrap();
    let p = period();
    for (student, s1, s2) in [(1, 90.0, 95.0), (2, 85.0, 88.0), (3, 30.0, 20.0), (4, 25.0, 35.0)] {
        grades
            .add_grade(GradeRow::new(StudentId(student), SubjectId(1), s1, p.clone()))
            .unwrap();
        grades
            .add_grade(GradeRow::new(StudentId(student), SubjectId(2), s2, p.clone()))
            .unwrap();
    }
    let (service, _) = service_with(grades);

    let run = service
        .run_clustering(ClusteringRequest::new(p, 2))
        .await
        .unwrap();

    assert_eq!(run.clusters[0].centroid.len(), 2);
    assert_eq!(run.outcomes[0].label, "Tinggi");
    assert_eq!(run.outcomes[3].label, "Rendah");
    assert!((run.outcomes[0].mean_score - 92.5).abs() < 1e-9);
}

#[test]
fn test_invalid_config_rejected() {
    let config = ClusteringConfig {
        max_clusters: 0,
        ..ClusteringConfig::default()
    };
    let result = ClusteringService::new(
        Arc::new(InMemoryGradeStore::new()),
        Arc::new(InMemoryClusterResultStore::new()),
        config,
    );
    assert!(matches!(result, Err(RaporError::Config(_))));
}
