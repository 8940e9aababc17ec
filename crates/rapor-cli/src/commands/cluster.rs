//! `cluster` commands: run K-Means for a period, run elbow analysis.

use clap::{Args, Subcommand};
use tracing::{debug, info};

use rapor_core::{ClusteringRequest, ElbowRequest, RaporResult};

use super::{print_json, CliContext, PeriodArgs};
use crate::error::report_rapor_error;
use crate::GlobalOptions;

/// Cluster subcommands
#[derive(Subcommand, Debug)]
pub enum ClusterCommands {
    /// Cluster a period and replace its stored results
    Run(RunArgs),
    /// Compute WCSS for k = 1..max_k and suggest a cluster count
    Elbow(ElbowArgs),
}

/// Arguments for `cluster run`
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub period: PeriodArgs,

    /// Number of clusters
    #[arg(short, long)]
    pub k: usize,

    /// Algorithm name (defaults to the configured algorithm)
    #[arg(long)]
    pub algorithm: Option<String>,
}

/// Arguments for `cluster elbow`
#[derive(Args, Debug)]
pub struct ElbowArgs {
    #[command(flatten)]
    pub period: PeriodArgs,

    /// Largest k to evaluate (defaults to the configured cap)
    #[arg(long)]
    pub max_k: Option<usize>,
}

/// Handle cluster command dispatch
pub async fn handle_cluster_command(options: &GlobalOptions, cmd: ClusterCommands) -> i32 {
    match cmd {
        ClusterCommands::Run(args) => run_command(options, args).await,
        ClusterCommands::Elbow(args) => elbow_command(options, args).await,
    }
}

fn run_request(args: RunArgs) -> RaporResult<ClusteringRequest> {
    let request = ClusteringRequest::new(args.period.period()?, args.k);
    Ok(match args.algorithm {
        Some(name) => request.with_algorithm(name),
        None => request,
    })
}

async fn run_command(options: &GlobalOptions, args: RunArgs) -> i32 {
    const COMMAND: &str = "cluster run";
    debug!("run_command: args={:?}", args);

    let request = match run_request(args) {
        Ok(r) => r,
        Err(e) => return report_rapor_error(COMMAND, &e),
    };
    let ctx = match CliContext::open(COMMAND, options) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };
    let service = match ctx.service() {
        Ok(s) => s,
        Err(e) => return report_rapor_error(COMMAND, &e),
    };

    match service.run_clustering(request).await {
        Ok(run) => {
            info!(
                "cluster run: run_id={}, students={}, converged={}",
                run.run_id,
                run.outcomes.len(),
                run.converged
            );
            print_json(COMMAND, &run)
        }
        Err(e) => report_rapor_error(COMMAND, &e),
    }
}

async fn elbow_command(options: &GlobalOptions, args: ElbowArgs) -> i32 {
    const COMMAND: &str = "cluster elbow";
    debug!("elbow_command: args={:?}", args);

    let period = match args.period.period() {
        Ok(p) => p,
        Err(e) => return report_rapor_error(COMMAND, &e),
    };
    let ctx = match CliContext::open(COMMAND, options) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };
    let service = match ctx.service() {
        Ok(s) => s,
        Err(e) => return report_rapor_error(COMMAND, &e),
    };

    match service
        .run_elbow_analysis(ElbowRequest::new(period, args.max_k))
        .await
    {
        Ok(analysis) => {
            info!("cluster elbow: {}", analysis.recommendation());
            print_json(COMMAND, &ElbowReport::from(&analysis))
        }
        Err(e) => report_rapor_error(COMMAND, &e),
    }
}

/// Elbow output with the recommendation text alongside the curve.
#[derive(serde::Serialize)]
struct ElbowReport<'a> {
    points: &'a [rapor_core::elbow::ElbowPoint],
    optimal_k: usize,
    recommendation: String,
}

impl<'a> From<&'a rapor_core::elbow::ElbowAnalysis> for ElbowReport<'a> {
    fn from(analysis: &'a rapor_core::elbow::ElbowAnalysis) -> Self {
        Self {
            points: &analysis.points,
            optimal_k: analysis.optimal_k,
            recommendation: analysis.recommendation(),
        }
    }
}
