//! In-memory survey store keyed by raw county name
//!
//! The store is filled by a single owner during ingestion and is read-only
//! afterwards. There is no update or delete path; a reload builds a new store.

use crate::app::models::LakeSurvey;
use std::collections::BTreeMap;

pub mod enrichment;

pub use enrichment::{EnrichmentStats, enhance_counties_with_lakes};

/// Lake surveys grouped by the county name recorded in each survey document
#[derive(Debug, Clone, Default)]
pub struct SurveyStore {
    /// Raw county name to the lakes recorded against it
    lakes_by_county: BTreeMap<String, Vec<LakeSurvey>>,
}

impl SurveyStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one lake under its raw county name
    pub fn insert(&mut self, lake: LakeSurvey) {
        self.lakes_by_county
            .entry(lake.county_name.clone())
            .or_default()
            .push(lake);
    }

    /// Put each county's lakes into source order
    ///
    /// Workers finish in arbitrary order; sorting by source path makes two
    /// loads of the same tree produce the same store.
    pub(crate) fn finalize(&mut self) {
        for lakes in self.lakes_by_county.values_mut() {
            lakes.sort_by(|a, b| {
                a.source_path
                    .cmp(&b.source_path)
                    .then(a.dow_number.cmp(&b.dow_number))
            });
        }
    }

    /// Iterate `(raw county name, lakes)` pairs in county-name order
    pub fn counties(&self) -> impl Iterator<Item = (&str, &[LakeSurvey])> {
        self.lakes_by_county
            .iter()
            .map(|(county, lakes)| (county.as_str(), lakes.as_slice()))
    }

    /// Iterate every lake in the store
    pub fn lakes(&self) -> impl Iterator<Item = &LakeSurvey> {
        self.lakes_by_county.values().flatten()
    }

    /// Lakes recorded under exactly this raw county name
    pub fn lakes_in_county(&self, raw_county_name: &str) -> &[LakeSurvey] {
        self.lakes_by_county
            .get(raw_county_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Lakes with this DOW number
    pub fn lakes_by_dow(&self, dow_number: i64) -> impl Iterator<Item = &LakeSurvey> {
        self.lakes().filter(move |lake| lake.dow_number == dow_number)
    }

    /// Number of distinct raw county names
    pub fn county_count(&self) -> usize {
        self.lakes_by_county.len()
    }

    /// Number of lake documents loaded
    pub fn lake_count(&self) -> usize {
        self.lakes_by_county.values().map(Vec::len).sum()
    }

    /// Number of surveys across all lakes
    pub fn survey_count(&self) -> usize {
        self.lakes().map(|lake| lake.surveys.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lakes_by_county.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::Survey;
    use std::path::PathBuf;

    fn lake(county: &str, name: &str, dow: i64, path: &str, surveys: usize) -> LakeSurvey {
        LakeSurvey {
            dow_number: dow,
            county_name: county.to_string(),
            lake_name: name.to_string(),
            surveys: vec![Survey::default(); surveys],
            source_path: PathBuf::from(path),
        }
    }

    #[test]
    fn test_insert_groups_by_raw_county_name() {
        let mut store = SurveyStore::new();
        store.insert(lake("Cass", "Leech", 11020300, "b.json", 2));
        store.insert(lake("Cass", "Cass", 4003000, "a.json", 1));
        store.insert(lake("St. Louis", "Vermilion", 69037800, "c.json", 3));

        assert_eq!(store.county_count(), 2);
        assert_eq!(store.lake_count(), 3);
        assert_eq!(store.survey_count(), 6);
        assert_eq!(store.lakes_in_county("Cass").len(), 2);
        assert!(store.lakes_in_county("Saint Louis").is_empty());
        assert_eq!(store.lakes_by_dow(69037800).count(), 1);
    }

    #[test]
    fn test_finalize_orders_lakes_by_source_path() {
        let mut store = SurveyStore::new();
        store.insert(lake("Cass", "Leech", 2, "z/leech.json", 1));
        store.insert(lake("Cass", "Cass", 1, "a/cass.json", 1));
        store.finalize();

        let names: Vec<&str> = store
            .lakes_in_county("Cass")
            .iter()
            .map(|lake| lake.lake_name.as_str())
            .collect();
        assert_eq!(names, vec!["Cass", "Leech"]);
    }
}
