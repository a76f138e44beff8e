//! Tests for county listing and county statistics

use crate::app::services::catalog::fixtures::sample_catalog;

#[test]
fn test_list_counties_carries_enriched_lakes() {
    let catalog = sample_catalog();
    let counties = catalog.list_counties();
    assert_eq!(counties.len(), 4);

    let saint_louis = catalog.county_by_id("stlouis-id").unwrap();
    assert_eq!(saint_louis.lakes, vec!["Burntside", "Vermilion"]);

    let crow_wing = catalog.county_by_id("crowwing-id").unwrap();
    assert!(crow_wing.lakes.is_empty());

    assert!(catalog.county_by_id("nowhere").is_none());
}

#[test]
fn test_county_stats_for_cass() {
    let catalog = sample_catalog();
    let stats = catalog.county_stats_by_id("cass-id").unwrap();

    assert_eq!(stats.county.county_name, "Cass");
    assert_eq!(stats.number_of_lakes, 2);
    assert_eq!(stats.survey_ids, vec!["s3", "s1", "s2"]);
    assert_eq!(stats.total_surveys, 3);
    assert_eq!(stats.total_fish_caught, 19);
    // Unknown codes keep their raw code as the key
    assert_eq!(stats.number_of_species, 4);
    assert_eq!(stats.species_distribution["sp-wae"], 63.16);
    assert_eq!(stats.species_distribution["sp-wts"], 21.05);
    assert_eq!(stats.species_distribution["sp-nop"], 10.53);
    assert_eq!(stats.species_distribution["QQQ"], 5.26);
    assert_eq!(stats.average_fish_per_survey, 6.33);
}

#[test]
fn test_county_stats_merge_alias_spellings() {
    let catalog = sample_catalog();
    let stats = catalog.county_stats_by_id("stlouis-id").unwrap();

    // "Saint Louis" and "St. Louis County" raw names
    assert_eq!(stats.survey_ids, vec!["s5", "s4"]);
    assert_eq!(stats.total_fish_caught, 6);
    assert_eq!(stats.number_of_species, 2);
    assert_eq!(stats.average_fish_per_survey, 3.0);
}

#[test]
fn test_county_without_surveys() {
    let catalog = sample_catalog();
    let stats = catalog.county_stats_by_id("crowwing-id").unwrap();

    assert!(stats.survey_ids.is_empty());
    assert_eq!(stats.total_surveys, 0);
    assert_eq!(stats.total_fish_caught, 0);
    assert_eq!(stats.number_of_species, 0);
    assert!(stats.species_distribution.is_empty());
    assert_eq!(stats.average_fish_per_survey, 0.0);
    assert_eq!(stats.number_of_lakes, 0);
}

#[test]
fn test_unknown_county_has_no_stats() {
    let catalog = sample_catalog();
    assert!(catalog.county_stats_by_id("nowhere").is_none());
}
