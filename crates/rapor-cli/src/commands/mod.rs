//! CLI command handlers
//!
//! # Modules
//!
//! - `grades`: Grade import and subject listing
//! - `cluster`: Clustering runs and elbow analysis
//! - `results`: Stored result listing, statistics and clearing

pub mod cluster;
pub mod grades;
pub mod results;

mod context;

pub use context::{print_json, CliContext, PeriodArgs};
