//! County enrichment with lake names found in survey data

use super::SurveyStore;
use crate::app::services::name_normalizer::county_key;
use crate::app::services::reference_loader::CountyRegistry;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info, warn};

/// Outcome of enriching counties with lake names
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichmentStats {
    /// Counties that received at least one lake
    pub counties_with_lakes: usize,
    /// Counties with no matching survey data
    pub counties_without_lakes: usize,
    /// Normalized county names in survey data that match no reference county
    pub unmatched_survey_counties: Vec<String>,
}

/// Set each county's `lakes` to the sorted distinct lake names recorded for it
///
/// Survey county names and reference county names are compared after
/// normalization and alias resolution. Counties with no survey data keep an
/// empty list.
pub fn enhance_counties_with_lakes(
    store: &SurveyStore,
    registry: &mut CountyRegistry,
) -> EnrichmentStats {
    let mut lakes_by_county: HashMap<String, BTreeSet<String>> = HashMap::new();
    for lake in store.lakes() {
        lakes_by_county
            .entry(county_key(&lake.county_name))
            .or_default()
            .insert(lake.lake_name.clone());
    }

    let mut stats = EnrichmentStats::default();
    let mut matched_keys = Vec::new();

    for county in registry.counties_mut() {
        let key = county_key(&county.county_name);
        match lakes_by_county.get(&key) {
            Some(lakes) => {
                county.lakes = lakes.iter().cloned().collect();
                stats.counties_with_lakes += 1;
                matched_keys.push(key);
            }
            None => {
                county.lakes.clear();
                stats.counties_without_lakes += 1;
                debug!(
                    "County '{}' (normalized: '{}') has no associated lakes in survey data",
                    county.county_name, key
                );
            }
        }
    }

    let mut unmatched: Vec<String> = lakes_by_county
        .into_keys()
        .filter(|key| !matched_keys.contains(key))
        .collect();
    unmatched.sort();
    for key in &unmatched {
        warn!("Survey county '{}' matches no reference county", key);
    }
    stats.unmatched_survey_counties = unmatched;

    info!(
        "Enriched {} counties with lakes ({} without survey data)",
        stats.counties_with_lakes, stats.counties_without_lakes
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{County, LakeSurvey};

    fn county(name: &str) -> County {
        serde_json::from_value(serde_json::json!({ "county_name": name })).unwrap()
    }

    fn lake(county: &str, name: &str) -> LakeSurvey {
        LakeSurvey {
            county_name: county.to_string(),
            lake_name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_saint_louis_alias_links_lakes() {
        let mut store = SurveyStore::new();
        store.insert(lake("Saint Louis", "Vermilion"));
        store.insert(lake("ST. LOUIS", "Burntside"));
        store.insert(lake("Cass", "Leech"));
        store.insert(lake("Cass County", "Leech"));
        store.insert(lake("Cass", "Cass"));

        let mut registry = CountyRegistry::from_records(vec![
            county("St. Louis County"),
            county("Cass"),
            county("Cook"),
        ]);

        let stats = enhance_counties_with_lakes(&store, &mut registry);
        assert_eq!(stats.counties_with_lakes, 2);
        assert_eq!(stats.counties_without_lakes, 1);
        assert!(stats.unmatched_survey_counties.is_empty());

        let counties = registry.counties();
        assert_eq!(counties[0].lakes, vec!["Burntside", "Vermilion"]);
        assert_eq!(counties[1].lakes, vec!["Cass", "Leech"]);
        assert!(counties[2].lakes.is_empty());
    }

    #[test]
    fn test_unmatched_survey_counties_are_reported() {
        let mut store = SurveyStore::new();
        store.insert(lake("Atlantis", "Deep Lake"));

        let mut registry = CountyRegistry::from_records(vec![county("Aitkin")]);
        let stats = enhance_counties_with_lakes(&store, &mut registry);

        assert_eq!(stats.counties_with_lakes, 0);
        assert_eq!(stats.unmatched_survey_counties, vec!["atlantis"]);
    }
}
