//! Serve command: load the catalog and expose it over HTTP

use crate::Error;
use crate::app::adapters::http;
use crate::cli::args::ServeArgs;
use crate::cli::commands::shared::{load_catalog, print_load_summary};
use anyhow::Context;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub async fn run_serve(
    args: &ServeArgs,
    quiet: bool,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    args.validate().context("Invalid serve arguments")?;
    let config = args.to_config();

    let catalog = load_catalog(&args.data, &config).await?;
    if !quiet {
        print_load_summary(&catalog);
    }

    // Ctrl-C during the load
    if shutdown.is_cancelled() {
        return Err(Error::processing_interrupted("Interrupted before serving").into());
    }

    info!("Serving {} lakes", catalog.store().lake_count());
    http::serve(Arc::new(catalog), &config.server, shutdown)
        .await
        .context("HTTP server failed")
}
