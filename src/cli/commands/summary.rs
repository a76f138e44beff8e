//! Summary command: load the data and report how ingestion went

use crate::cli::args::SummaryArgs;
use crate::cli::commands::shared::{load_catalog, print_load_summary};
use colored::Colorize;

pub async fn run_summary(args: &SummaryArgs) -> anyhow::Result<()> {
    let config = args.data.to_config();
    let catalog = load_catalog(&args.data, &config).await?;

    print_load_summary(&catalog);
    println!();
    println!("{}", catalog.ingest_stats().summary());

    let errors = &catalog.ingest_stats().errors;
    if args.show_errors && !errors.is_empty() {
        println!();
        println!("{}", "Skipped documents".bright_yellow().bold());
        for error in errors {
            println!("  {} {}", "-".bright_yellow(), error);
        }
    }

    Ok(())
}
