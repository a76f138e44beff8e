//! Reference data loading for counties and species
//!
//! Both reference lists are read once at startup. A missing or unparseable
//! reference file is fatal: the service never starts with partial reference
//! data. Records lacking an identifier are given one derived from their
//! natural key, so the same input always yields the same identifiers.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

pub mod counties;
pub mod species;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use counties::CountyRegistry;
pub use species::SpeciesCatalog;

/// Read and decode a JSON reference file
pub(crate) async fn read_reference_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!("Reading reference file: {}", path.display());

    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
        Error::io(format!("Failed to read reference file {}", path.display()), e)
    })?;

    serde_json::from_str(&contents).map_err(|e| {
        Error::json(
            path.display().to_string(),
            "Failed to decode reference data",
            e,
        )
    })
}
