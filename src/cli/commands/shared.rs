//! Shared components for CLI commands
//!
//! Logging setup, catalog loading and the terminal summaries used by more
//! than one subcommand.

use crate::Result;
use crate::app::services::catalog::Catalog;
use crate::cli::args::{Args, DataArgs};
use crate::config::Config;
use anyhow::Context;
use colored::Colorize;
use tracing::debug;

/// Set up structured logging for all commands
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lake_survey={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Validate data arguments, then load the catalog from the configured paths
pub async fn load_catalog(data: &DataArgs, config: &Config) -> anyhow::Result<Catalog> {
    data.validate().context("Invalid data arguments")?;
    config.validate().context("Invalid configuration")?;

    Catalog::load(config).await.with_context(|| {
        format!(
            "Failed to load survey data from {}",
            config.data.data_dir.display()
        )
    })
}

/// Print the ingestion summary for a freshly loaded catalog
pub fn print_load_summary(catalog: &Catalog) {
    let ingest = catalog.ingest_stats();
    let enrichment = catalog.enrichment_stats();

    println!();
    println!("{}", "Load Summary".bright_green().bold());
    println!("{}", "=".repeat(40).bright_green());
    println!(
        "{} {}",
        "Files discovered:".bright_cyan(),
        ingest.files_discovered.to_string().bright_white()
    );
    println!(
        "{} {}",
        "Files loaded:".bright_cyan(),
        ingest.files_loaded.to_string().bright_white()
    );
    if ingest.files_skipped > 0 {
        println!(
            "{} {}",
            "Files skipped:".bright_cyan(),
            ingest.files_skipped.to_string().bright_yellow()
        );
    }
    println!(
        "{} {}",
        "Lakes:".bright_cyan(),
        catalog.store().lake_count().to_string().bright_white()
    );
    println!(
        "{} {}",
        "Surveys:".bright_cyan(),
        catalog.store().survey_count().to_string().bright_white()
    );
    println!(
        "{} {}",
        "Species:".bright_cyan(),
        catalog.species().len().to_string().bright_white()
    );
    println!(
        "{} {} ({} with lakes)",
        "Counties:".bright_cyan(),
        catalog.counties().len().to_string().bright_white(),
        enrichment.counties_with_lakes.to_string().bright_white()
    );
    println!(
        "{} {:.2}s",
        "Load time:".bright_cyan(),
        ingest.load_duration.as_secs_f64()
    );

    if let Some(walk_error) = &ingest.walk_error {
        println!(
            "{} {}",
            "Incomplete walk:".bright_yellow(),
            walk_error
        );
    }

    if !enrichment.unmatched_survey_counties.is_empty() {
        println!(
            "{} {}",
            "Unmatched counties:".bright_yellow(),
            enrichment.unmatched_survey_counties.join(", ")
        );
    }
}
