//! County reference list and county identifier resolution

use super::read_reference_file;
use crate::app::models::County;
use crate::app::services::name_normalizer::county_key;
use crate::constants::id_namespaces;
use crate::{Error, Result};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// County reference records with lookups by identifier and by normalized name
#[derive(Debug, Clone, Default)]
pub struct CountyRegistry {
    /// Counties in reference-file order
    counties: Vec<County>,

    /// Normalized, alias-resolved county name to index in `counties`
    by_key: HashMap<String, usize>,
}

impl CountyRegistry {
    /// Load the county list from a JSON array
    ///
    /// # Errors
    /// * Returns `Error::FileNotFound` if the file doesn't exist
    /// * Returns `Error::Json` if the file isn't a JSON array of counties
    /// * Returns `Error::ReferenceData` if the file holds no counties
    pub async fn load(path: &Path) -> Result<Self> {
        let raw: Vec<County> = read_reference_file(path).await?;
        if raw.is_empty() {
            return Err(Error::reference_data(
                path.display().to_string(),
                "county list is empty",
            ));
        }

        let registry = Self::from_records(raw);
        info!(
            "Loaded {} counties from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Build a registry from raw records, assigning identifiers where absent
    ///
    /// When two records normalize to the same name, name lookups resolve to
    /// the first of them.
    pub fn from_records(records: Vec<County>) -> Self {
        let mut counties = records;
        let mut by_key = HashMap::with_capacity(counties.len());

        for (index, county) in counties.iter_mut().enumerate() {
            if county.id.is_empty() {
                county.id = generated_county_id(&county.county_name);
                debug!("Assigned id {} to county {}", county.id, county.county_name);
            }

            let key = county_key(&county.county_name);
            match by_key.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
                Entry::Occupied(slot) => warn!(
                    "Duplicate county name '{}' (normalized: '{}'), first entry wins lookups",
                    county.county_name,
                    slot.key()
                ),
            }
        }

        Self { counties, by_key }
    }

    /// All counties in reference-file order
    pub fn counties(&self) -> &[County] {
        &self.counties
    }

    /// Find a county by its identifier
    pub fn county_by_id(&self, id: &str) -> Option<&County> {
        self.counties.iter().find(|county| county.id == id)
    }

    /// Find a county by any spelling of its name
    pub fn county_by_name(&self, name: &str) -> Option<&County> {
        self.by_key
            .get(&county_key(name))
            .map(|&index| &self.counties[index])
    }

    /// Identifier of the county with this name, after normalization and aliasing
    pub fn county_id_for_name(&self, name: &str) -> Option<&str> {
        self.county_by_name(name).map(|county| county.id.as_str())
    }

    pub(crate) fn counties_mut(&mut self) -> &mut [County] {
        &mut self.counties
    }

    pub fn len(&self) -> usize {
        self.counties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counties.is_empty()
    }
}

/// Stable identifier for a county name
pub fn generated_county_id(name: &str) -> String {
    Uuid::new_v5(&id_namespaces::COUNTY, county_key(name).as_bytes()).to_string()
}
