//! Command-line argument definitions for the lake survey service
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::services::query_engine::SurveyQuery;
use crate::config::Config;
use crate::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_DATA_DIR, DEFAULT_INGEST_WORKERS, DEFAULT_PAGE, DEFAULT_PAGE_LIMIT,
    MAX_INGEST_WORKERS,
};
use crate::{Error, Result};
use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the lake survey service
#[derive(Debug, Clone, Parser)]
#[command(
    name = "lake-survey",
    version,
    about = "Load lake fish-survey data and query it over HTTP or the command line",
    long_about = "Ingests a directory tree of per-lake fish survey JSON documents together with \
                  county and species reference lists, then answers filter, sort, pagination and \
                  statistics queries from memory."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress all output except errors"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Load the data and serve it over HTTP
    Serve(ServeArgs),
    /// Run one survey query and print the page as JSON
    Query(QueryArgs),
    /// Print species or county statistics as JSON
    Stats(StatsArgs),
    /// Load the data and print ingestion statistics
    Summary(SummaryArgs),
}

/// Data location and ingestion settings shared by every subcommand
#[derive(Debug, Clone, clap::Args)]
pub struct DataArgs {
    /// Directory holding the reference files and the surveys/ tree
    #[arg(
        short = 'd',
        long = "data-dir",
        value_name = "PATH",
        default_value = DEFAULT_DATA_DIR,
        help = "Data directory with reference files and survey documents"
    )]
    pub data_dir: PathBuf,

    /// Number of concurrent ingestion workers
    #[arg(
        short = 'j',
        long = "workers",
        value_name = "COUNT",
        default_value_t = DEFAULT_INGEST_WORKERS,
        help = "Number of concurrent ingestion workers"
    )]
    pub workers: usize,

    #[arg(long = "progress", help = "Show a progress spinner while loading")]
    pub progress: bool,
}

impl DataArgs {
    /// Validate the data arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::configuration(
                "Number of workers must be greater than 0",
            ));
        }
        if self.workers > MAX_INGEST_WORKERS {
            return Err(Error::configuration(format!(
                "Number of workers too high (max {})",
                MAX_INGEST_WORKERS
            )));
        }
        if !self.data_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Data directory does not exist: {}",
                self.data_dir.display()
            )));
        }
        Ok(())
    }

    /// Configuration with these arguments applied over the defaults
    pub fn to_config(&self) -> Config {
        Config::default()
            .with_data_dir(&self.data_dir)
            .with_workers(self.workers)
            .with_progress(self.progress)
    }
}

/// Arguments for the serve command
#[derive(Debug, Clone, Parser)]
pub struct ServeArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[arg(
        short = 'b',
        long = "bind",
        value_name = "ADDR",
        default_value = DEFAULT_BIND_ADDR,
        help = "Socket address to listen on"
    )]
    pub bind: String,

    #[arg(
        long = "default-limit",
        value_name = "ROWS",
        default_value_t = DEFAULT_PAGE_LIMIT,
        help = "Page size used when a request gives none"
    )]
    pub default_limit: usize,
}

impl ServeArgs {
    pub fn validate(&self) -> Result<()> {
        self.data.validate()?;
        if self.default_limit == 0 {
            return Err(Error::configuration(
                "Default page size must be greater than 0",
            ));
        }
        Ok(())
    }

    pub fn to_config(&self) -> Config {
        let mut config = self.data.to_config().with_bind_addr(&self.bind);
        config.server.default_limit = self.default_limit;
        config
    }
}

/// Arguments for the query command
#[derive(Debug, Clone, Parser)]
pub struct QueryArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Species identifier, code or common name (repeatable)
    #[arg(long = "species", value_name = "SPECIES")]
    pub species: Vec<String>,

    /// County identifier or name (repeatable)
    #[arg(long = "county", value_name = "COUNTY")]
    pub counties: Vec<String>,

    /// Lake name (repeatable)
    #[arg(long = "lake", value_name = "LAKE")]
    pub lakes: Vec<String>,

    #[arg(long = "min-year", value_name = "YEAR", default_value_t = 0)]
    pub min_year: i32,

    #[arg(long = "max-year", value_name = "YEAR", default_value_t = 0)]
    pub max_year: i32,

    /// survey_date, lake_name, county_name, species_name, total_catch,
    /// min_length or max_length
    #[arg(long = "sort-by", value_name = "COLUMN", default_value = "")]
    pub sort_by: String,

    /// asc or desc
    #[arg(long = "order", value_name = "ORDER", default_value = "")]
    pub order: String,

    #[arg(long = "game-fish", help = "Only include game fish")]
    pub game_fish: bool,

    #[arg(long = "search", value_name = "TEXT", default_value = "")]
    pub search: String,

    #[arg(long = "limit", value_name = "ROWS", default_value_t = DEFAULT_PAGE_LIMIT)]
    pub limit: usize,

    #[arg(long = "page", value_name = "PAGE", default_value_t = DEFAULT_PAGE)]
    pub page: usize,
}

impl QueryArgs {
    pub fn to_query(&self) -> SurveyQuery {
        SurveyQuery::new()
            .with_species(self.species.iter().cloned())
            .with_counties(self.counties.iter().cloned())
            .with_lakes(self.lakes.iter().cloned())
            .with_year_range(self.min_year, self.max_year)
            .with_sort(self.sort_by.as_str(), self.order.as_str())
            .with_game_fish_only(self.game_fish)
            .with_search(self.search.as_str())
            .with_page(self.page, self.limit)
    }
}

/// Arguments for the stats command
#[derive(Debug, Clone, Parser)]
#[command(group(ArgGroup::new("target").required(true).args(["species", "county"])))]
pub struct StatsArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Species common name
    #[arg(long = "species", value_name = "NAME")]
    pub species: Option<String>,

    /// County identifier
    #[arg(long = "county", value_name = "ID")]
    pub county: Option<String>,
}

/// Arguments for the summary command
#[derive(Debug, Clone, Parser)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[arg(long = "show-errors", help = "List every skipped survey document")]
    pub show_errors: bool,
}

impl Args {
    /// Get the log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_levels() {
        let quiet = Args::parse_from(["lake-survey", "-q", "-vv"]);
        assert_eq!(quiet.get_log_level(), "error");

        let levels: Vec<&str> = ["", "-v", "-vv", "-vvvv"]
            .iter()
            .map(|flag| {
                let mut argv = vec!["lake-survey"];
                if !flag.is_empty() {
                    argv.push(flag);
                }
                Args::parse_from(argv).get_log_level()
            })
            .collect();
        assert_eq!(levels, vec!["warn", "info", "debug", "trace"]);
    }

    #[test]
    fn test_serve_defaults() {
        let args = Args::parse_from(["lake-survey", "serve"]);
        let Some(Commands::Serve(serve)) = args.command else {
            panic!("expected serve command");
        };
        assert_eq!(serve.bind, DEFAULT_BIND_ADDR);
        assert_eq!(serve.data.workers, DEFAULT_INGEST_WORKERS);
        assert_eq!(serve.data.data_dir, PathBuf::from(DEFAULT_DATA_DIR));

        let config = serve.to_config();
        assert_eq!(config.server.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.server.default_limit, DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn test_query_args_build_query() {
        let args = Args::parse_from([
            "lake-survey",
            "query",
            "--species",
            "walleye",
            "--species",
            "NOP",
            "--county",
            "Cass",
            "--min-year",
            "2010",
            "--sort-by",
            "total_catch",
            "--order",
            "asc",
            "--game-fish",
            "--page",
            "2",
            "--limit",
            "5",
        ]);
        let Some(Commands::Query(query_args)) = args.command else {
            panic!("expected query command");
        };

        let query = query_args.to_query();
        assert_eq!(query.species, vec!["walleye", "NOP"]);
        assert_eq!(query.counties, vec!["Cass"]);
        assert_eq!((query.min_year, query.max_year), (2010, 0));
        assert_eq!(query.sort_by, "total_catch");
        assert_eq!(query.order, "asc");
        assert!(query.game_fish_only);
        assert_eq!((query.page, query.limit), (2, 5));
    }

    #[test]
    fn test_stats_requires_a_target() {
        assert!(Args::try_parse_from(["lake-survey", "stats"]).is_err());
        assert!(Args::try_parse_from(["lake-survey", "stats", "--species", "walleye"]).is_ok());
        assert!(Args::try_parse_from(["lake-survey", "stats", "--county", "cass-id"]).is_ok());
    }

    #[test]
    fn test_data_args_validation() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().to_str().unwrap();

        let valid = Args::parse_from(["lake-survey", "summary", "--data-dir", dir]);
        let Some(Commands::Summary(summary)) = valid.command else {
            panic!("expected summary command");
        };
        assert!(summary.data.validate().is_ok());

        let mut zero_workers = summary.data.clone();
        zero_workers.workers = 0;
        assert!(zero_workers.validate().is_err());

        let mut missing_dir = summary.data.clone();
        missing_dir.data_dir = temp_dir.path().join("missing");
        assert!(missing_dir.validate().is_err());
    }
}
