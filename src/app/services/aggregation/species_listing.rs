//! Species lookups and the listing of species present in survey data

use crate::app::services::catalog::Catalog;
use serde::{Deserialize, Serialize};

/// Public view of a species, without its internal code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesSummary {
    pub id: String,
    pub common_name: String,
    pub image_url: String,
    pub description: String,
    pub game_fish: bool,
    pub scientific_name: String,
    pub species_group: String,
}

impl Catalog {
    /// Code of the species with this common name, ignoring case
    pub fn normalize_species(&self, common_name: &str) -> Option<&str> {
        self.species.code_for_common_name(common_name)
    }

    /// Whether any survey has length data for the species code
    pub fn has_survey_data_for_species(&self, code: &str) -> bool {
        self.store
            .lakes()
            .flat_map(|lake| &lake.surveys)
            .any(|survey| survey.lengths.contains_key(code))
    }

    /// Species with survey data, ordered by common name
    pub fn list_species(&self) -> Vec<SpeciesSummary> {
        let mut listed: Vec<SpeciesSummary> = self
            .species
            .iter()
            .filter(|(code, _)| self.has_survey_data_for_species(code))
            .map(|(_, species)| SpeciesSummary {
                id: species.id.clone(),
                common_name: species.common_name.clone(),
                image_url: species.image_url.clone(),
                description: species.description.clone(),
                game_fish: species.game_fish,
                scientific_name: species.scientific_name.clone(),
                species_group: species.species_group.clone(),
            })
            .collect();

        listed.sort_by(|a, b| a.common_name.cmp(&b.common_name));
        listed
    }
}
