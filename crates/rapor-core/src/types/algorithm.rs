//! Supported clustering algorithm names.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::constants::algorithm::{KMEANS, KMEANS_ALIAS};
use crate::error::{RaporError, RaporResult};

/// Clustering algorithm recorded with every result row.
///
/// Only K-Means is supported; other names are rejected before any data is
/// fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusteringAlgorithm {
    KMeans,
}

impl ClusteringAlgorithm {
    /// Parse an algorithm name.
    ///
    /// Case-insensitive, surrounding whitespace ignored. `"k-means"` is
    /// normalized to `"kmeans"`.
    ///
    /// # Example
    ///
    /// ```
    /// use rapor_core::types::ClusteringAlgorithm;
    ///
    /// assert_eq!(ClusteringAlgorithm::parse("K-Means").unwrap(), ClusteringAlgorithm::KMeans);
    /// assert!(ClusteringAlgorithm::parse("dbscan").is_err());
    /// ```
    pub fn parse(name: &str) -> RaporResult<Self> {
        let normalized = name.trim().to_lowercase();
        if normalized == KMEANS || normalized == KMEANS_ALIAS {
            Ok(Self::KMeans)
        } else {
            Err(RaporError::validation(format!(
                "unsupported clustering algorithm '{}'; supported: {}",
                name, KMEANS
            )))
        }
    }

    /// Canonical stored name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KMeans => KMEANS,
        }
    }
}

impl fmt::Display for ClusteringAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
