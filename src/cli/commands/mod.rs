//! Command implementations for the lake survey CLI
//!
//! Each subcommand lives in its own module and loads the catalog through
//! the shared helpers before doing its work.

pub mod query;
pub mod serve;
pub mod shared;
pub mod stats;
pub mod summary;

use crate::cli::args::{Args, Commands};
use tokio_util::sync::CancellationToken;

/// Main command runner
///
/// Dispatches to the subcommand handler named by `args`:
/// - `serve`: load the catalog and serve it over HTTP until cancelled
/// - `query`: print one page of survey rows as JSON
/// - `stats`: print species or county statistics as JSON
/// - `summary`: print ingestion statistics
pub async fn run(args: Args, shutdown: CancellationToken) -> anyhow::Result<()> {
    shared::setup_logging(&args)?;

    let Some(command) = args.command else {
        anyhow::bail!("No command given; run with --help to list commands");
    };

    match command {
        Commands::Serve(serve_args) => serve::run_serve(&serve_args, args.quiet, shutdown).await,
        Commands::Query(query_args) => query::run_query(&query_args).await,
        Commands::Stats(stats_args) => stats::run_stats(&stats_args).await,
        Commands::Summary(summary_args) => summary::run_summary(&summary_args).await,
    }
}
