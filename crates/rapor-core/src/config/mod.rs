//! Configuration for the clustering service.
//!
//! # Loading Configuration
//!
//! ```rust,ignore
//! use rapor_core::config::ClusteringConfig;
//!
//! // Load from file
//! let config = ClusteringConfig::from_file("rapor.toml")?;
//!
//! // Or use defaults, with environment overrides
//! let config = ClusteringConfig::default().with_env_overrides();
//! config.validate()?;
//! ```
//!
//! # TOML Structure
//!
//! ```toml
//! max_iterations = 100
//! convergence_threshold = 0.001
//! max_clusters = 5
//! elbow_max_k = 10
//! default_algorithm = "kmeans"
//! random_seed = 42        # optional; omit for entropy-seeded runs
//! ```
//!
//! Invalid configuration is an error, never silently replaced by defaults.
//! Environment overrides that do not parse are logged at warn level and
//! leave the current value in place.

pub mod constants;


use std::env;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{RaporError, RaporResult};
use crate::types::ClusteringAlgorithm;

use self::constants::{algorithm, kmeans, limits};

/// Root configuration for [`ClusteringService`](crate::service::ClusteringService).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteringConfig {
    /// Iteration bound for each K-Means run.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Centroid movement below which a run is converged.
    #[serde(default = "default_convergence_threshold")]
    pub convergence_threshold: f64,

    /// Largest k accepted for a clustering run.
    #[serde(default = "default_max_clusters")]
    pub max_clusters: usize,

    /// Cap on max_k for elbow analysis.
    #[serde(default = "default_elbow_max_k")]
    pub elbow_max_k: usize,

    /// Algorithm used when a request names none.
    #[serde(default = "default_algorithm")]
    pub default_algorithm: String,

    /// Seed for the initialization RNG.
    ///
    /// `None` seeds from OS entropy on every run.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

fn default_max_iterations() -> usize {
    kmeans::DEFAULT_MAX_ITERATIONS
}

fn default_convergence_threshold() -> f64 {
    kmeans::DEFAULT_CONVERGENCE_THRESHOLD
}

fn default_max_clusters() -> usize {
    limits::DEFAULT_MAX_CLUSTERS
}

fn default_elbow_max_k() -> usize {
    limits::DEFAULT_ELBOW_MAX_K
}

fn default_algorithm() -> String {
    algorithm::KMEANS.to_string()
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            convergence_threshold: default_convergence_threshold(),
            max_clusters: default_max_clusters(),
            elbow_max_k: default_elbow_max_k(),
            default_algorithm: default_algorithm(),
            random_seed: None,
        }
    }
}

impl ClusteringConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// - `RaporError::Config` if the file cannot be read or parsed
    pub fn from_file(path: impl AsRef<Path>) -> RaporResult<Self> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|e| {
            RaporError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&contents).map_err(|e| {
            RaporError::Config(format!(
                "Failed to parse TOML in '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Create configuration from a TOML string.
    pub fn from_toml_str(toml: &str) -> RaporResult<Self> {
        toml::from_str(toml).map_err(|e| RaporError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> RaporResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| RaporError::Config(format!("Failed to serialize to TOML: {}", e)))
    }

    /// Validate all configuration values.
    ///
    /// # Errors
    /// - `RaporError::Config` naming the first invalid field
    pub fn validate(&self) -> RaporResult<()> {
        if self.max_iterations == 0 {
            return Err(RaporError::Config("max_iterations must be > 0".to_string()));
        }
        if !self.convergence_threshold.is_finite() || self.convergence_threshold <= 0.0 {
            return Err(RaporError::Config(format!(
                "convergence_threshold must be a finite positive number, got {}",
                self.convergence_threshold
            )));
        }
        if self.max_clusters == 0 {
            return Err(RaporError::Config("max_clusters must be > 0".to_string()));
        }
        if self.elbow_max_k == 0 {
            return Err(RaporError::Config("elbow_max_k must be > 0".to_string()));
        }
        ClusteringAlgorithm::parse(&self.default_algorithm)
            .map_err(|e| RaporError::Config(format!("default_algorithm: {}", e)))?;

        Ok(())
    }

    /// Apply environment variable overrides.
    ///
    /// | Variable | Field |
    /// |----------|-------|
    /// | `RAPOR_MAX_ITERATIONS` | `max_iterations` |
    /// | `RAPOR_CONVERGENCE_THRESHOLD` | `convergence_threshold` |
    /// | `RAPOR_MAX_CLUSTERS` | `max_clusters` |
    /// | `RAPOR_ELBOW_MAX_K` | `elbow_max_k` |
    /// | `RAPOR_RANDOM_SEED` | `random_seed` |
    ///
    /// Unparseable values are logged with `warn!` and the current value is
    /// kept. Parsed values still go through [`validate`](Self::validate).
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(n) = env_override("RAPOR_MAX_ITERATIONS") {
            self.max_iterations = n;
        }
        if let Some(t) = env_override("RAPOR_CONVERGENCE_THRESHOLD") {
            self.convergence_threshold = t;
        }
        if let Some(n) = env_override("RAPOR_MAX_CLUSTERS") {
            self.max_clusters = n;
        }
        if let Some(n) = env_override("RAPOR_ELBOW_MAX_K") {
            self.elbow_max_k = n;
        }
        if let Some(seed) = env_override("RAPOR_RANDOM_SEED") {
            self.random_seed = Some(seed);
        }

        self
    }

    /// Builder-style seed setter, mainly for tests.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }
}

/// Read and parse one override variable.
fn env_override<T: FromStr>(name: &str) -> Option<T>
where
    T::Err: fmt::Display,
{
    parse_override(name, env::var(name).ok().as_deref())
}

/// Parse an override value; `None` when unset or unparseable.
fn parse_override<T: FromStr>(name: &str, raw: Option<&str>) -> Option<T>
where
    T::Err: fmt::Display,
{
    let raw = raw?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(
                variable = name,
                value = raw,
                error = %e,
                "Ignoring unparseable environment override"
            );
            None
        }
    }
}
