//! Rapor CLI
//!
//! Imports report-card grades into a local RocksDB database, clusters the
//! students of a period and inspects the stored results.
//!
//! # Commands
//!
//! - `grades import`: Load subjects and grades from a JSON document
//! - `grades subjects`: Print the frozen subject order
//! - `cluster run`: Cluster a period and replace its stored results
//! - `cluster elbow`: Suggest a cluster count for a period
//! - `results list|stats|clear|periods`: Inspect or remove stored results
//!
//! Every command prints JSON on stdout. Logs go to stderr.
//!
//! # Exit Codes
//! - 0: Success
//! - 1: Recoverable error (bad input, not enough data, I/O)
//! - 2: Stored data is corrupted

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;

/// Rapor CLI - Student performance clustering
#[derive(Parser)]
#[command(name = "rapor")]
#[command(version = "0.1.0")]
#[command(about = "Cluster students by report-card grades and label the groups")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// Path to RocksDB database directory
    #[arg(long = "db", env = "RAPOR_DB_PATH", global = true)]
    pub db_path: Option<PathBuf>,

    /// Path to a TOML clustering configuration file
    #[arg(long = "config", global = true)]
    pub config_path: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade and subject management
    Grades {
        #[command(subcommand)]
        action: commands::grades::GradesCommands,
    },
    /// Clustering and elbow analysis
    Cluster {
        #[command(subcommand)]
        action: commands::cluster::ClusterCommands,
    },
    /// Stored clustering results
    Results {
        #[command(subcommand)]
        action: commands::results::ResultsCommands,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match cli.command {
        Commands::Grades { action } => {
            commands::grades::handle_grades_command(&cli.global, action).await
        }
        Commands::Cluster { action } => {
            commands::cluster::handle_cluster_command(&cli.global, action).await
        }
        Commands::Results { action } => {
            commands::results::handle_results_command(&cli.global, action).await
        }
    };

    std::process::exit(exit_code);
}
