//! Label distribution of clustering outcomes.
//!
//! Two views are produced:
//! - [`ClusterStatistics`] for a run that just completed, with the average
//!   mean score per label
//! - [`ResultDistribution`] for rows already persisted for a period, with
//!   the average centroid distance

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ranking::RankedCluster;
use crate::types::{ClusterResult, ClusteringAlgorithm, StudentOutcome};

/// Percentage of `count` in `total`, rounded to one decimal.
///
/// 0.0 when `total` is 0.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = count as f64 / total as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

/// Figures for one label of a completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelStatistics {
    pub rank: usize,
    pub label: String,
    pub count: usize,
    pub percentage: f64,
    /// Average student mean score in this cluster, 0.0 when empty.
    pub average_score: f64,
    /// Centroid score the rank was derived from.
    pub centroid_score: f64,
}

/// Summary of a completed clustering run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterStatistics {
    pub total_students: usize,
    pub k: usize,
    pub algorithm: ClusteringAlgorithm,
    /// One entry per rank, rank 1 first. Empty clusters are included.
    pub clusters: Vec<LabelStatistics>,
}

impl ClusterStatistics {
    /// Summarize `outcomes` against the ranked clusters of the same run.
    pub fn compute(
        ranked: &[RankedCluster],
        outcomes: &[StudentOutcome],
        algorithm: ClusteringAlgorithm,
    ) -> Self {
        let total = outcomes.len();
        let mut by_rank: Vec<&RankedCluster> = ranked.iter().collect();
        by_rank.sort_by_key(|r| r.rank);

        let clusters = by_rank
            .into_iter()
            .map(|r| {
                let members: Vec<&StudentOutcome> =
                    outcomes.iter().filter(|o| o.cluster == r.rank).collect();
                let count = members.len();
                let average_score = if count == 0 {
                    0.0
                } else {
                    members.iter().map(|o| o.mean_score).sum::<f64>() / count as f64
                };
                LabelStatistics {
                    rank: r.rank,
                    label: r.label.clone(),
                    count,
                    percentage: percentage(count, total),
                    average_score,
                    centroid_score: r.score,
                }
            })
            .collect();

        Self {
            total_students: total,
            k: ranked.len(),
            algorithm,
            clusters,
        }
    }

    /// Entry for `label`, if the run produced it.
    pub fn for_label(&self, label: &str) -> Option<&LabelStatistics> {
        self.clusters.iter().find(|c| c.label == label)
    }
}

/// Count of persisted rows carrying one label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: String,
    /// Display rank stored with the rows.
    pub cluster: usize,
    pub count: usize,
    pub percentage: f64,
}

/// Distribution of the rows persisted for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultDistribution {
    pub total_results: usize,
    /// Ordered by ascending display rank.
    pub distribution: Vec<LabelCount>,
    /// Mean centroid distance over all rows, 0.0 when there are none.
    pub average_distance: f64,
    /// Algorithm of the stored run, `None` when nothing is stored.
    pub algorithm: Option<ClusteringAlgorithm>,
    pub k: Option<usize>,
    pub created_at: Option<DateTime<Utc>>,
}

impl ResultDistribution {
    /// Summarize persisted rows.
    pub fn from_results(results: &[ClusterResult]) -> Self {
        let total = results.len();
        let mut counts: Vec<LabelCount> = Vec::new();

        for row in results {
            match counts.iter_mut().find(|c| c.label == row.label) {
                Some(entry) => entry.count += 1,
                None => counts.push(LabelCount {
                    label: row.label.clone(),
                    cluster: row.cluster,
                    count: 1,
                    percentage: 0.0,
                }),
            }
        }
        for entry in counts.iter_mut() {
            entry.percentage = percentage(entry.count, total);
        }
        counts.sort_by_key(|c| c.cluster);

        let average_distance = if total == 0 {
            0.0
        } else {
            results.iter().map(|r| r.distance).sum::<f64>() / total as f64
        };

        let latest = results.iter().max_by_key(|r| r.created_at);

        Self {
            total_results: total,
            distribution: counts,
            average_distance,
            algorithm: latest.map(|r| r.algorithm),
            k: latest.map(|r| r.k),
            created_at: latest.map(|r| r.created_at),
        }
    }
}
