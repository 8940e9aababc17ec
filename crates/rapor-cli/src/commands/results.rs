//! `results` commands: list, statistics, clear, periods.

use clap::{Args, Subcommand};
use tracing::debug;

use rapor_core::types::Period;
use rapor_core::ClusteringService;

use super::{print_json, CliContext, PeriodArgs};
use crate::error::report_rapor_error;
use crate::GlobalOptions;

/// Results subcommands
#[derive(Subcommand, Debug)]
pub enum ResultsCommands {
    /// List stored results of a period
    List(ListArgs),
    /// Label distribution of the stored results of a period
    Stats(PeriodArgs),
    /// Delete the stored results of a period
    Clear(PeriodArgs),
    /// Periods that have stored results
    Periods,
}

/// Arguments for `results list`
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub period: PeriodArgs,

    /// Only rows with this label (case-insensitive)
    #[arg(long)]
    pub label: Option<String>,
}

/// Handle results command dispatch
pub async fn handle_results_command(options: &GlobalOptions, cmd: ResultsCommands) -> i32 {
    debug!("handle_results_command: cmd={:?}", cmd);
    match cmd {
        ResultsCommands::List(ListArgs { period, label }) => {
            with_period(options, "results list", &period, |service, period| async move {
                service
                    .cluster_results(&period, label.as_deref())
                    .await
                    .map(|rows| serde_json::json!(rows))
            })
            .await
        }
        ResultsCommands::Stats(args) => {
            with_period(options, "results stats", &args, |service, period| async move {
                service
                    .cluster_statistics(&period)
                    .await
                    .map(|stats| serde_json::json!(stats))
            })
            .await
        }
        ResultsCommands::Clear(args) => {
            with_period(options, "results clear", &args, |service, period| async move {
                service
                    .clear_cluster_results(&period)
                    .await
                    .map(|removed| serde_json::json!({ "period": period, "removed": removed }))
            })
            .await
        }
        ResultsCommands::Periods => periods_command(options).await,
    }
}

/// Validate the period, open the service and print what `op` returns.
async fn with_period<F, Fut>(options: &GlobalOptions, command: &str, args: &PeriodArgs, op: F) -> i32
where
    F: FnOnce(ClusteringService, Period) -> Fut,
    Fut: std::future::Future<Output = rapor_core::RaporResult<serde_json::Value>>,
{
    let period = match args.period() {
        Ok(p) => p,
        Err(e) => return report_rapor_error(command, &e),
    };
    let ctx = match CliContext::open(command, options) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };
    let service = match ctx.service() {
        Ok(s) => s,
        Err(e) => return report_rapor_error(command, &e),
    };

    match op(service, period).await {
        Ok(value) => print_json(command, &value),
        Err(e) => report_rapor_error(command, &e),
    }
}

async fn periods_command(options: &GlobalOptions) -> i32 {
    const COMMAND: &str = "results periods";
    let ctx = match CliContext::open(COMMAND, options) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };
    let service = match ctx.service() {
        Ok(s) => s,
        Err(e) => return report_rapor_error(COMMAND, &e),
    };

    match service.result_periods().await {
        Ok(periods) => print_json(COMMAND, &periods),
        Err(e) => report_rapor_error(COMMAND, &e),
    }
}
