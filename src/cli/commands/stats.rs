//! Stats command: print species or county statistics as JSON

use crate::cli::args::StatsArgs;
use crate::cli::commands::shared::load_catalog;
use anyhow::Context;

pub async fn run_stats(args: &StatsArgs) -> anyhow::Result<()> {
    let config = args.data.to_config();
    let catalog = load_catalog(&args.data, &config).await?;

    let json = match (&args.species, &args.county) {
        (Some(species), _) => {
            let Some(stats) = catalog.species_stats(species) else {
                anyhow::bail!("Species '{}' not found", species);
            };
            serde_json::to_string_pretty(&stats)
        }
        (None, Some(county_id)) => {
            let Some(stats) = catalog.county_stats_by_id(county_id) else {
                anyhow::bail!("County '{}' not found", county_id);
            };
            serde_json::to_string_pretty(&stats)
        }
        (None, None) => anyhow::bail!("Either --species or --county is required"),
    }
    .context("Failed to encode statistics")?;

    println!("{}", json);
    Ok(())
}
