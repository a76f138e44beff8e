//! Lake coverage and length statistics for one species

use super::whole_percentage;
use crate::app::models::FishCount;
use crate::app::services::catalog::Catalog;
use crate::app::services::name_normalizer::county_key;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Share of a county's lakes where the species was recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountyPercentage {
    /// County identifier, empty when the county is not in the reference list
    pub id: String,
    pub percentage: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesStats {
    /// Species name as requested
    pub species: String,
    /// Percentage of all lakes with length data for the species
    pub percent_lakes: i64,
    /// Catch-weighted mean length
    pub average_length: f64,
    pub biggest_length: i64,
    /// 0 when no fish were measured
    pub shortest_length: i64,
    /// Quantity per length across every survey, ordered by length
    pub graph_data: Vec<FishCount>,
    pub total_fish: i64,
    /// Ordered by county identifier
    pub counties: Vec<CountyPercentage>,
}

/// Lakes seen in one county, and those where the species appeared
#[derive(Debug, Default)]
struct CountyLakes<'a> {
    id: String,
    all: HashSet<&'a str>,
    with_species: HashSet<&'a str>,
}

impl Catalog {
    /// Statistics for the species with this common name (case-insensitive)
    ///
    /// Returns `None` if no species has that common name. A known species
    /// with no survey data yields zeroed statistics.
    pub fn species_stats(&self, common_name: &str) -> Option<SpeciesStats> {
        let code = self.normalize_species(common_name)?;

        let mut all_lakes = HashSet::new();
        let mut lakes_with_species = HashSet::new();
        let mut by_county: BTreeMap<String, CountyLakes> = BTreeMap::new();
        let mut histogram: BTreeMap<i64, i64> = BTreeMap::new();
        let mut length_sum = 0i64;
        let mut total_fish = 0i64;
        let mut biggest_length = 0i64;
        let mut shortest_length: Option<i64> = None;

        for lake in self.store.lakes() {
            let lake_key = lake.lake_name.to_lowercase();
            let county = by_county
                .entry(county_key(&lake.county_name))
                .or_insert_with(|| CountyLakes {
                    id: self
                        .counties
                        .county_id_for_name(&lake.county_name)
                        .unwrap_or_default()
                        .to_string(),
                    ..Default::default()
                });
            county.all.insert(&lake.lake_name);

            for lengths in lake.surveys.iter().filter_map(|s| s.lengths.get(code)) {
                lakes_with_species.insert(lake_key.clone());
                county.with_species.insert(&lake.lake_name);

                // Counts come straight from survey files; totals saturate
                for count in &lengths.fish_count {
                    let bucket = histogram.entry(count.length).or_default();
                    *bucket = bucket.saturating_add(count.quantity);
                    length_sum =
                        length_sum.saturating_add(count.length.saturating_mul(count.quantity));
                    total_fish = total_fish.saturating_add(count.quantity);
                    biggest_length = biggest_length.max(count.length);
                    shortest_length =
                        Some(shortest_length.map_or(count.length, |s| s.min(count.length)));
                }
            }

            all_lakes.insert(lake_key);
        }

        let average_length = if total_fish > 0 {
            length_sum as f64 / total_fish as f64
        } else {
            0.0
        };
        let shortest_length = if total_fish > 0 {
            shortest_length.unwrap_or_default()
        } else {
            0
        };

        let mut counties: Vec<CountyPercentage> = by_county
            .into_values()
            .map(|county| CountyPercentage {
                percentage: whole_percentage(county.with_species.len(), county.all.len()),
                id: county.id,
            })
            .collect();
        counties.sort_by(|a, b| a.id.cmp(&b.id));

        debug!(
            "Species {} found in {} of {} lakes",
            code,
            lakes_with_species.len(),
            all_lakes.len()
        );

        Some(SpeciesStats {
            species: common_name.to_string(),
            percent_lakes: whole_percentage(lakes_with_species.len(), all_lakes.len()),
            average_length,
            biggest_length,
            shortest_length,
            graph_data: histogram
                .into_iter()
                .map(|(length, quantity)| FishCount { length, quantity })
                .collect(),
            total_fish,
            counties,
        })
    }

    /// Statistics for the species with this identifier
    pub fn species_stats_by_id(&self, id: &str) -> Option<SpeciesStats> {
        let (_, species) = self.species.find_by_id(id)?;
        self.species_stats(&species.common_name)
    }
}
