//! Shared command plumbing: database, configuration and output.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use serde::Serialize;
use tracing::{debug, info};

use rapor_core::types::Period;
use rapor_core::{ClusteringConfig, ClusteringService, RaporResult};
use rapor_storage::{RocksDbRaporStore, StorageResult};

use crate::error::{report_failure, report_rapor_error, report_storage_error, CliExitCode};
use crate::GlobalOptions;

/// Period selection shared by the clustering and result commands.
#[derive(Args, Debug, Clone)]
pub struct PeriodArgs {
    /// Semester name, e.g. "Ganjil"
    #[arg(long)]
    pub semester: String,

    /// Academic year, e.g. "2024/2025"
    #[arg(long = "year")]
    pub academic_year: String,
}

impl PeriodArgs {
    pub fn period(&self) -> RaporResult<Period> {
        Period::new(self.semester.clone(), self.academic_year.clone())
    }
}

/// Opened database plus the effective clustering configuration.
pub struct CliContext {
    pub store: Arc<RocksDbRaporStore>,
    pub config: ClusteringConfig,
}

impl CliContext {
    /// Open the database and load configuration, reporting failures.
    ///
    /// On failure the `Err` holds the exit code to return.
    pub fn open(command: &str, options: &GlobalOptions) -> Result<Self, i32> {
        let config = load_config(options).map_err(|e| report_rapor_error(command, &e))?;
        let store = open_store(options).map_err(|e| report_storage_error(command, &e))?;
        Ok(Self {
            store: Arc::new(store),
            config,
        })
    }

    /// Service over the opened store, which serves as both collaborators.
    pub fn service(&self) -> RaporResult<ClusteringService> {
        ClusteringService::new(self.store.clone(), self.store.clone(), self.config.clone())
    }
}

/// File (if given), then environment overrides, then validation.
fn load_config(options: &GlobalOptions) -> RaporResult<ClusteringConfig> {
    let config = match &options.config_path {
        Some(path) => {
            debug!("Loading config from {:?}", path);
            ClusteringConfig::from_file(path)?
        }
        None => ClusteringConfig::default(),
    }
    .with_env_overrides();
    config.validate()?;
    Ok(config)
}

fn open_store(options: &GlobalOptions) -> StorageResult<RocksDbRaporStore> {
    let path = options.db_path.clone().unwrap_or_else(default_db_path);
    info!("Opening database at {:?}", path);
    RocksDbRaporStore::open(&path)
}

/// `$HOME/.rapor/db`, or `.rapor/db` when no home directory is known.
fn default_db_path() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(|h| PathBuf::from(h).join(".rapor").join("db"))
        .unwrap_or_else(|| PathBuf::from(".rapor/db"))
}

/// Print `value` as pretty JSON on stdout; returns the exit code.
pub fn print_json<T: Serialize>(command: &str, value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            CliExitCode::Success.into()
        }
        Err(e) => report_failure(command, CliExitCode::Warning, &e),
    }
}
