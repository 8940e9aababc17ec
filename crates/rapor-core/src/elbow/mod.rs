//! Elbow analysis: suggest k from the WCSS curve.
//!
//! K-Means is run for each k in `1..=max_k` and the within-cluster sum of
//! squares recorded. Random initialization may draw duplicate centroids, so
//! a single random run per k can land above WCSS(k-1). Each k therefore also
//! runs from the k-1 solution plus its farthest vector and keeps the lower
//! WCSS, which makes the curve non-increasing. The suggested k is the interior point with the largest
//! perpendicular distance to the chord joining the first and last points.
//!
//! Each k draws its own initialization from the shared RNG, so a seeded RNG
//! makes the whole curve reproducible.

mod analyzer;
mod knee;
mod types;

pub use analyzer::ElbowAnalyzer;
pub use knee::{find_elbow, perpendicular_distance};
pub use types::{ElbowAnalysis, ElbowPoint};
