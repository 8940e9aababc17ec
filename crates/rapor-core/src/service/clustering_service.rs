//! ClusteringService: RunClustering and RunElbowAnalysis.

use std::sync::Arc;

use chrono::Utc;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::clustering::{KMeansClustering, KMeansConfig, KMeansEngine};
use crate::config::ClusteringConfig;
use crate::elbow::{ElbowAnalysis, ElbowAnalyzer};
use crate::error::{RaporError, RaporResult};
use crate::features::FeatureVectorBuilder;
use crate::ranking::rank_clusters;
use crate::statistics::{ClusterStatistics, ResultDistribution};
use crate::traits::{ClusterResultStore, GradeStore};
use crate::types::{ClusterResult, ClusteringAlgorithm, FeatureVector, Period, StudentOutcome};

use super::requests::{ClusteringRequest, ClusteringRun, ElbowRequest};

/// Orchestrates clustering and elbow analysis over the collaborator stores.
///
/// Holds no per-run state; concurrent calls for different periods are
/// independent. Concurrent runs for the same period are last-writer-wins.
pub struct ClusteringService {
    grades: Arc<dyn GradeStore>,
    results: Arc<dyn ClusterResultStore>,
    config: ClusteringConfig,
    engine: KMeansEngine,
}

impl ClusteringService {
    /// Create a service after validating `config`.
    ///
    /// # Errors
    /// - `RaporError::Config` if the configuration is invalid
    pub fn new(
        grades: Arc<dyn GradeStore>,
        results: Arc<dyn ClusterResultStore>,
        config: ClusteringConfig,
    ) -> RaporResult<Self> {
        config.validate()?;
        Ok(Self {
            grades,
            results,
            config,
            engine: KMeansEngine::new(),
        })
    }

    pub fn config(&self) -> &ClusteringConfig {
        &self.config
    }

    fn rng(&self) -> ChaCha8Rng {
        match self.config.random_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    fn resolve_algorithm(&self, name: Option<&str>) -> RaporResult<ClusteringAlgorithm> {
        ClusteringAlgorithm::parse(name.unwrap_or(&self.config.default_algorithm))
    }

    /// Fetch the subject order once, then the period's grades, and pivot.
    async fn load_vectors(&self, period: &Period) -> RaporResult<Vec<FeatureVector>> {
        let subject_order = self.grades.fetch_subject_order().await?;
        let rows = self.grades.fetch_grades(period).await?;

        if rows.is_empty() {
            return Err(RaporError::insufficient_data(
                1,
                0,
                format!("grade rows for period '{}'", period),
            ));
        }

        let vectors = FeatureVectorBuilder::new(subject_order).build(period, &rows);
        debug!(
            period = %period,
            rows = rows.len(),
            students = vectors.len(),
            "Built feature vectors"
        );
        Ok(vectors)
    }

    /// Cluster the students of a period and replace its stored results.
    ///
    /// # Errors
    /// - `Validation`: unknown algorithm, k = 0, k above `max_clusters`,
    ///   invalid period
    /// - `InsufficientData`: no grades for the period, fewer students than k
    /// - `Computation`: non-finite values inside the algorithm
    /// - `Persistence`: store failure; previously stored rows stay visible
    pub async fn run_clustering(&self, request: ClusteringRequest) -> RaporResult<ClusteringRun> {
        let ClusteringRequest {
            period,
            algorithm,
            k,
        } = request;

        let algorithm = self.resolve_algorithm(algorithm.as_deref())?;
        if k == 0 {
            return Err(RaporError::validation("k must be >= 1"));
        }
        if k > self.config.max_clusters {
            return Err(RaporError::validation(format!(
                "k must be <= {}, got {}",
                self.config.max_clusters, k
            )));
        }
        period.validate()?;

        info!(period = %period, k, algorithm = %algorithm, "Starting clustering run");

        let vectors = self.load_vectors(&period).await?;
        if vectors.len() < k {
            return Err(RaporError::insufficient_data(
                k,
                vectors.len(),
                format!("students for clustering with k={}", k),
            ));
        }

        let kmeans_config = KMeansConfig::from_service_config(k, &self.config)?;
        let output = self.engine.run(&vectors, &kmeans_config, &mut self.rng())?;
        let ranked = rank_clusters(&output.centroids);

        let outcomes: Vec<StudentOutcome> = vectors
            .iter()
            .zip(output.assignments.iter())
            .map(|(vector, assignment)| {
                let cluster = &ranked[assignment.cluster];
                StudentOutcome {
                    student_id: vector.student_id,
                    cluster: cluster.rank,
                    label: cluster.label.clone(),
                    distance: assignment.distance,
                    mean_score: vector.mean(),
                }
            })
            .collect();

        let run_id = Uuid::new_v4();
        let created_at = Utc::now();
        let rows: Vec<ClusterResult> = outcomes
            .iter()
            .map(|o| ClusterResult {
                run_id,
                student_id: o.student_id,
                period: period.clone(),
                cluster: o.cluster,
                label: o.label.clone(),
                distance: o.distance,
                algorithm,
                k,
                created_at,
            })
            .collect();

        let written = self
            .results
            .replace_cluster_results(&period, rows)
            .await
            .map_err(|e| {
                error!(period = %period, error = %e, "Failed to store cluster results");
                e
            })?;

        let statistics = ClusterStatistics::compute(&ranked, &outcomes, algorithm);
        let mut clusters = ranked;
        clusters.sort_by_key(|c| c.rank);

        info!(
            period = %period,
            run_id = %run_id,
            students = written,
            iterations = output.iterations,
            converged = output.converged,
            "Clustering run completed"
        );

        Ok(ClusteringRun {
            run_id,
            period,
            algorithm,
            k,
            outcomes,
            clusters,
            iterations: output.iterations,
            converged: output.converged,
            wcss: output.wcss,
            statistics,
        })
    }

    /// Compute the WCSS curve of a period and suggest k. Stores nothing.
    ///
    /// The effective max_k is the smallest of the requested value (or the
    /// configured cap), the cap, and the student count minus one.
    ///
    /// # Errors
    /// - `Validation`: requested max_k of 0, invalid period
    /// - `InsufficientData`: no grades, or fewer than two students
    pub async fn run_elbow_analysis(&self, request: ElbowRequest) -> RaporResult<ElbowAnalysis> {
        let ElbowRequest { period, max_k } = request;

        if max_k == Some(0) {
            return Err(RaporError::validation("max_k must be >= 1"));
        }
        period.validate()?;

        let vectors = self.load_vectors(&period).await?;
        let cap = self.config.elbow_max_k;
        let effective = max_k
            .unwrap_or(cap)
            .min(cap)
            .min(vectors.len().saturating_sub(1));

        if effective < 1 {
            return Err(RaporError::insufficient_data(
                2,
                vectors.len(),
                format!("students for elbow analysis of period '{}'", period),
            ));
        }

        info!(period = %period, max_k = effective, "Starting elbow analysis run");

        let analyzer =
            ElbowAnalyzer::new(self.config.max_iterations, self.config.convergence_threshold)?;
        analyzer.run(&vectors, effective, &mut self.rng())
    }

    /// Stored rows of a period, optionally only those with `label`.
    ///
    /// Label matching ignores ASCII case and surrounding whitespace.
    pub async fn cluster_results(
        &self,
        period: &Period,
        label: Option<&str>,
    ) -> RaporResult<Vec<ClusterResult>> {
        let rows = self.results.list_cluster_results(period).await?;
        Ok(match label.map(str::trim).filter(|l| !l.is_empty()) {
            Some(wanted) => rows
                .into_iter()
                .filter(|r| r.label.eq_ignore_ascii_case(wanted))
                .collect(),
            None => rows,
        })
    }

    /// Label distribution of the stored rows of a period.
    pub async fn cluster_statistics(&self, period: &Period) -> RaporResult<ResultDistribution> {
        let rows = self.results.list_cluster_results(period).await?;
        Ok(ResultDistribution::from_results(&rows))
    }

    /// Delete the stored rows of a period.
    pub async fn clear_cluster_results(&self, period: &Period) -> RaporResult<usize> {
        let removed = self.results.clear_cluster_results(period).await?;
        info!(period = %period, removed, "Cleared cluster results");
        Ok(removed)
    }

    /// Periods that have stored results.
    pub async fn result_periods(&self) -> RaporResult<Vec<Period>> {
        self.results.list_periods().await
    }
}
