//! Elbow curve types.

use serde::{Deserialize, Serialize};

/// WCSS of one k.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElbowPoint {
    pub k: usize,
    pub wcss: f64,
}

impl ElbowPoint {
    pub fn new(k: usize, wcss: f64) -> Self {
        Self { k, wcss }
    }
}

/// Result of one elbow analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElbowAnalysis {
    /// One point per k, ascending from 1.
    pub points: Vec<ElbowPoint>,
    pub optimal_k: usize,
}

impl ElbowAnalysis {
    pub fn k_values(&self) -> Vec<usize> {
        self.points.iter().map(|p| p.k).collect()
    }

    pub fn wcss_values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.wcss).collect()
    }

    /// The elbow is the suggested k.
    #[inline]
    pub fn elbow_point(&self) -> usize {
        self.optimal_k
    }

    /// Human-readable suggestion shown next to the curve.
    pub fn recommendation(&self) -> String {
        format!(
            "Berdasarkan analisis elbow, jumlah cluster optimal adalah {}",
            self.optimal_k
        )
    }
}
