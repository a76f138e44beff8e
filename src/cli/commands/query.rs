//! Query command: run one survey query and print the page as JSON

use crate::cli::args::QueryArgs;
use crate::cli::commands::shared::load_catalog;
use anyhow::Context;
use tracing::debug;

pub async fn run_query(args: &QueryArgs) -> anyhow::Result<()> {
    let config = args.data.to_config();
    let catalog = load_catalog(&args.data, &config).await?;

    let query = args.to_query();
    debug!("Running query {:?}", query);
    let page = catalog.filter_and_sort(&query);

    let json = serde_json::to_string_pretty(&page).context("Failed to encode query results")?;
    println!("{}", json);
    Ok(())
}
