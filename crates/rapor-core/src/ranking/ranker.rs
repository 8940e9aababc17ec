//! Map raw centroid indices to display ranks.

use serde::{Deserialize, Serialize};

use super::labels::labels_for_k;

/// Display rank and label of one raw cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCluster {
    /// Index into the k-means centroid list.
    pub raw_index: usize,
    /// 1 = highest score.
    pub rank: usize,
    pub label: String,
    /// Mean of the centroid components.
    pub score: f64,
    /// Centroid the rank was computed from.
    pub centroid: Vec<f64>,
}

/// Scalar score of a centroid: the mean of its components.
///
/// For one-dimensional centroids this is the raw value.
#[inline]
pub fn centroid_score(centroid: &[f64]) -> f64 {
    if centroid.is_empty() {
        0.0
    } else {
        centroid.iter().sum::<f64>() / centroid.len() as f64
    }
}

/// Rank centroids by descending score.
///
/// The returned vector is indexed by raw cluster index, so
/// `ranked[assignment.cluster]` gives a student's rank and label. The sort
/// is stable: equal scores keep ascending raw index order.
pub fn rank_clusters(centroids: &[Vec<f64>]) -> Vec<RankedCluster> {
    let k = centroids.len();
    let scores: Vec<f64> = centroids.iter().map(|c| centroid_score(c)).collect();

    let mut order: Vec<usize> = (0..k).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let labels = labels_for_k(k);
    let mut ranks = vec![0usize; k];
    for (position, &raw_index) in order.iter().enumerate() {
        ranks[raw_index] = position + 1;
    }

    (0..k)
        .map(|raw_index| RankedCluster {
            raw_index,
            rank: ranks[raw_index],
            label: labels[ranks[raw_index] - 1].clone(),
            score: scores[raw_index],
            centroid: centroids[raw_index].clone(),
        })
        .collect()
}
