//! Cluster ranking and severity labeling.
//!
//! Raw k-means cluster indices carry no meaning; they depend on which
//! vectors the random initialization drew. Ranking maps them to display
//! ranks by centroid score so that rank 1 is always the highest-performing
//! group, whatever the draw.
//!
//! Higher mean score is better. Equal scores keep raw index order
//! (lower raw index gets the better rank).

mod labels;
mod ranker;

pub use labels::{label_for_rank, labels_for_k};
pub use ranker::{centroid_score, rank_clusters, RankedCluster};
