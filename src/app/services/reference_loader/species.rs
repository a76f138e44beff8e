//! Species reference list keyed by natural code

use super::read_reference_file;
use crate::app::models::Species;
use crate::app::services::name_normalizer::capitalize_words;
use crate::constants::id_namespaces;
use crate::{Error, Result};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};
use uuid::Uuid;

/// Species lookup table providing resolution from code, identifier or common name
#[derive(Debug, Clone, Default)]
pub struct SpeciesCatalog {
    /// Species indexed by natural code
    species: BTreeMap<String, Species>,
}

impl SpeciesCatalog {
    /// Load the species list from a JSON object keyed by code
    ///
    /// # Errors
    /// * Returns `Error::FileNotFound` if the file doesn't exist
    /// * Returns `Error::Json` if the file isn't a JSON object of species
    /// * Returns `Error::ReferenceData` if the file holds no species
    pub async fn load(path: &Path) -> Result<Self> {
        let raw: BTreeMap<String, Species> = read_reference_file(path).await?;
        if raw.is_empty() {
            return Err(Error::reference_data(
                path.display().to_string(),
                "species list is empty",
            ));
        }

        let catalog = Self::from_records(raw);
        info!(
            "Loaded {} species from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Build a catalog from raw records keyed by code
    ///
    /// Fills in a missing code from the key, capitalizes each word of the
    /// common name and assigns an identifier to any record lacking one.
    pub fn from_records(records: BTreeMap<String, Species>) -> Self {
        let species = records
            .into_iter()
            .map(|(code, mut record)| {
                if record.code.is_empty() {
                    record.code = code.clone();
                }
                record.common_name = capitalize_words(&record.common_name);
                if record.id.is_empty() {
                    record.id = generated_species_id(&code);
                    debug!("Assigned id {} to species {}", record.id, code);
                }
                (code, record)
            })
            .collect();

        Self { species }
    }

    /// Resolve a species by its natural code
    pub fn resolve(&self, code: &str) -> Option<&Species> {
        self.species.get(code)
    }

    /// Find the code of the species with this common name (case-insensitive)
    pub fn code_for_common_name(&self, common_name: &str) -> Option<&str> {
        let wanted = common_name.to_lowercase();
        self.species
            .iter()
            .find(|(_, species)| species.common_name.to_lowercase() == wanted)
            .map(|(code, _)| code.as_str())
    }

    /// Find a species by its surrogate identifier
    pub fn find_by_id(&self, id: &str) -> Option<(&str, &Species)> {
        self.species
            .iter()
            .find(|(_, species)| species.id == id)
            .map(|(code, species)| (code.as_str(), species))
    }

    /// Resolve a reference that may be an identifier, a code or a common name
    ///
    /// Identifiers are tried first; codes and common names are accepted for
    /// compatibility with older clients.
    pub fn resolve_reference(&self, reference: &str) -> Option<(&str, &Species)> {
        if let Some(found) = self.find_by_id(reference) {
            return Some(found);
        }
        if let Some((code, species)) = self.species.get_key_value(reference) {
            return Some((code.as_str(), species));
        }
        let code = self.code_for_common_name(reference)?;
        self.species
            .get_key_value(code)
            .map(|(code, species)| (code.as_str(), species))
    }

    /// Iterate species in code order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Species)> {
        self.species
            .iter()
            .map(|(code, species)| (code.as_str(), species))
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

/// Stable identifier for a species code
pub fn generated_species_id(code: &str) -> String {
    Uuid::new_v5(&id_namespaces::SPECIES, code.as_bytes()).to_string()
}
