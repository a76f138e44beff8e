//! Configuration management and validation.
//!
//! Provides configuration structures for the data layout, the ingestion
//! worker pool and the HTTP server, with defaults from `constants`.

use crate::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_COUNTIES_FILE, DEFAULT_DATA_DIR, DEFAULT_INGEST_WORKERS,
    DEFAULT_PAGE_LIMIT, DEFAULT_QUEUE_CAPACITY, DEFAULT_SPECIES_FILE, DEFAULT_SURVEYS_DIR,
    MAX_INGEST_WORKERS,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where reference files and survey documents live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Root directory; the other paths are relative to it
    pub data_dir: PathBuf,

    /// County reference list (JSON array)
    pub counties_file: PathBuf,

    /// Species reference list (JSON object keyed by code)
    pub species_file: PathBuf,

    /// Directory tree of survey documents
    pub surveys_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            counties_file: PathBuf::from(DEFAULT_COUNTIES_FILE),
            species_file: PathBuf::from(DEFAULT_SPECIES_FILE),
            surveys_dir: PathBuf::from(DEFAULT_SURVEYS_DIR),
        }
    }
}

impl DataConfig {
    pub fn counties_path(&self) -> PathBuf {
        self.data_dir.join(&self.counties_file)
    }

    pub fn species_path(&self) -> PathBuf {
        self.data_dir.join(&self.species_file)
    }

    pub fn surveys_path(&self) -> PathBuf {
        self.data_dir.join(&self.surveys_dir)
    }
}

/// Survey ingestion worker pool settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Number of concurrent ingestion workers
    pub workers: usize,

    /// Capacity of the bounded path queue
    pub queue_capacity: usize,

    /// Show a progress spinner while ingesting
    pub show_progress: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_INGEST_WORKERS,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            show_progress: false,
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind_addr: String,

    /// Page size used when a request gives none
    pub default_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            default_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// Global configuration for the lake survey service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    pub ingest: IngestConfig,
    pub server: ServerConfig,
}

impl Config {
    /// Set the data root directory
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data.data_dir = data_dir.into();
        self
    }

    /// Set the number of ingestion workers
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.ingest.workers = workers;
        self
    }

    /// Set the ingestion queue capacity
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.ingest.queue_capacity = capacity;
        self
    }

    /// Enable the ingestion progress spinner
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.ingest.show_progress = show_progress;
        self
    }

    /// Set the HTTP bind address
    pub fn with_bind_addr(mut self, bind_addr: impl Into<String>) -> Self {
        self.server.bind_addr = bind_addr.into();
        self
    }

    /// Check settings and that the input files are present
    ///
    /// # Errors
    /// * Returns `Error::Configuration` for out-of-range settings
    /// * Returns `Error::FileNotFound` if a reference file or the survey
    ///   directory is missing
    pub fn validate(&self) -> Result<()> {
        if self.ingest.workers == 0 {
            return Err(Error::configuration("Worker count must be greater than 0"));
        }
        if self.ingest.workers > MAX_INGEST_WORKERS {
            return Err(Error::configuration(format!(
                "Worker count too high (max {})",
                MAX_INGEST_WORKERS
            )));
        }
        if self.ingest.queue_capacity == 0 {
            return Err(Error::configuration("Queue capacity must be greater than 0"));
        }
        if self.server.default_limit == 0 {
            return Err(Error::configuration("Default page size must be greater than 0"));
        }

        require_path(&self.data.counties_path(), false)?;
        require_path(&self.data.species_path(), false)?;
        require_path(&self.data.surveys_path(), true)?;
        Ok(())
    }
}

fn require_path(path: &Path, directory: bool) -> Result<()> {
    let present = if directory {
        path.is_dir()
    } else {
        path.is_file()
    };
    if present {
        Ok(())
    } else {
        Err(Error::file_not_found(path.display().to_string()))
    }
}
