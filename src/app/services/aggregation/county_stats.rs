//! County listing and catch statistics

use super::round_hundredths;
use crate::app::models::County;
use crate::app::services::catalog::Catalog;
use crate::app::services::name_normalizer::county_key;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountyStats {
    pub county: County,
    pub number_of_lakes: usize,
    /// Every survey recorded in the county, in store order
    pub survey_ids: Vec<String>,
    pub total_surveys: usize,
    /// Sum of catch summaries carrying both a species and a total
    pub total_fish_caught: i64,
    pub number_of_species: usize,
    /// Species identifier (or raw code when unknown) to share of the catch
    pub species_distribution: BTreeMap<String, f64>,
    pub average_fish_per_survey: f64,
}

impl Catalog {
    /// All counties in reference-file order, with their enriched lake lists
    pub fn list_counties(&self) -> &[County] {
        self.counties.counties()
    }

    pub fn county_by_id(&self, id: &str) -> Option<&County> {
        self.counties.county_by_id(id)
    }

    /// Catch statistics for a county
    ///
    /// Survey data is matched on the normalized, alias-resolved county name,
    /// so every raw spelling of the county contributes.
    pub fn county_stats(&self, county: &County) -> CountyStats {
        let key = county_key(&county.county_name);

        let mut survey_ids = Vec::new();
        let mut catch_by_species: BTreeMap<String, i64> = BTreeMap::new();
        let mut total_fish_caught = 0i64;

        let surveys = self
            .store
            .counties()
            .filter(|(raw_name, _)| county_key(raw_name) == key)
            .flat_map(|(_, lakes)| lakes)
            .flat_map(|lake| &lake.surveys);

        for survey in surveys {
            survey_ids.push(survey.survey_id.clone());

            for summary in &survey.catch_summaries {
                let (Some(code), Some(total)) = (&summary.species, summary.total_catch) else {
                    continue;
                };
                let species_id = self
                    .species
                    .resolve(code)
                    .map_or_else(|| code.clone(), |species| species.id.clone());
                let species_total = catch_by_species.entry(species_id).or_default();
                *species_total = species_total.saturating_add(total);
                total_fish_caught = total_fish_caught.saturating_add(total);
            }
        }

        let species_distribution = if total_fish_caught > 0 {
            catch_by_species
                .iter()
                .map(|(id, &count)| {
                    let share = count as f64 / total_fish_caught as f64 * 100.0;
                    (id.clone(), round_hundredths(share))
                })
                .collect()
        } else {
            BTreeMap::new()
        };

        let total_surveys = survey_ids.len();
        let average_fish_per_survey = if total_surveys > 0 {
            round_hundredths(total_fish_caught as f64 / total_surveys as f64)
        } else {
            0.0
        };

        CountyStats {
            county: county.clone(),
            number_of_lakes: county.lakes.len(),
            survey_ids,
            total_surveys,
            total_fish_caught,
            number_of_species: catch_by_species.len(),
            species_distribution,
            average_fish_per_survey,
        }
    }

    /// Catch statistics for the county with this identifier
    pub fn county_stats_by_id(&self, id: &str) -> Option<CountyStats> {
        self.county_by_id(id).map(|county| self.county_stats(county))
    }
}
