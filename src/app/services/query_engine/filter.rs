//! Survey query parameters and the predicates compiled from them

use crate::app::models::{LakeSurvey, Species, Survey};
use crate::app::services::name_normalizer::{county_key, lowercase_set};
use crate::app::services::reference_loader::{CountyRegistry, SpeciesCatalog};
use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_LIMIT};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Filter, sort and paging parameters for a survey query
///
/// Empty lists and zero year bounds mean "no filter".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyQuery {
    /// Species identifiers; codes and common names are also accepted
    pub species: Vec<String>,

    /// Inclusive lower bound on the survey year, 0 for none
    pub min_year: i32,

    /// Inclusive upper bound on the survey year, 0 for none
    pub max_year: i32,

    /// County identifiers; county names in any spelling are also accepted
    pub counties: Vec<String>,

    /// Lake names, matched case-insensitively
    pub lakes: Vec<String>,

    pub sort_by: String,
    pub order: String,
    pub game_fish_only: bool,

    /// Case-insensitive substring of the species, county or lake name,
    /// matched as given; surrounding whitespace is significant
    pub search: String,

    pub limit: usize,
    pub page: usize,
}

impl Default for SurveyQuery {
    fn default() -> Self {
        Self {
            species: Vec::new(),
            min_year: 0,
            max_year: 0,
            counties: Vec::new(),
            lakes: Vec::new(),
            sort_by: String::new(),
            order: String::new(),
            game_fish_only: false,
            search: String::new(),
            limit: DEFAULT_PAGE_LIMIT,
            page: DEFAULT_PAGE,
        }
    }
}

impl SurveyQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_species<S: Into<String>>(mut self, species: impl IntoIterator<Item = S>) -> Self {
        self.species = species.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_counties<S: Into<String>>(mut self, counties: impl IntoIterator<Item = S>) -> Self {
        self.counties = counties.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_lakes<S: Into<String>>(mut self, lakes: impl IntoIterator<Item = S>) -> Self {
        self.lakes = lakes.into_iter().map(Into::into).collect();
        self
    }

    /// Set inclusive year bounds; 0 leaves a side unbounded
    pub fn with_year_range(mut self, min_year: i32, max_year: i32) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    pub fn with_sort(mut self, sort_by: impl Into<String>, order: impl Into<String>) -> Self {
        self.sort_by = sort_by.into();
        self.order = order.into();
        self
    }

    pub fn with_game_fish_only(mut self, game_fish_only: bool) -> Self {
        self.game_fish_only = game_fish_only;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_page(mut self, page: usize, limit: usize) -> Self {
        self.page = page;
        self.limit = limit;
        self
    }
}

/// Predicates of one query, resolved against the reference data once
#[derive(Debug)]
pub(crate) struct CompiledFilter {
    /// Species codes allowed, `None` when the species filter is empty
    species_codes: Option<HashSet<String>>,
    county_ids: HashSet<String>,
    county_keys: HashSet<String>,
    lakes: HashSet<String>,
    min_year: i32,
    max_year: i32,
    game_fish_only: bool,
    search: Option<String>,
}

impl CompiledFilter {
    pub(crate) fn compile(query: &SurveyQuery, species: &SpeciesCatalog) -> Self {
        let species_codes = (!query.species.is_empty())
            .then(|| matching_species_codes(species, &query.species));

        // Every county value doubles as a name, matched after normalization.
        let county_keys = query.counties.iter().map(|name| county_key(name)).collect();

        Self {
            species_codes,
            county_ids: lowercase_set(&query.counties),
            county_keys,
            lakes: lowercase_set(&query.lakes),
            min_year: query.min_year,
            max_year: query.max_year,
            game_fish_only: query.game_fish_only,
            search: (!query.search.is_empty()).then(|| query.search.to_lowercase()),
        }
    }

    /// Whether lakes recorded under this raw county name are in scope
    pub(crate) fn accepts_county(&self, raw_county_name: &str, counties: &CountyRegistry) -> bool {
        if self.county_ids.is_empty() {
            return true;
        }
        if let Some(id) = counties.county_id_for_name(raw_county_name) {
            if self.county_ids.contains(&id.to_lowercase()) {
                return true;
            }
        }
        self.county_keys.contains(&county_key(raw_county_name))
    }

    pub(crate) fn accepts_lake(&self, lake: &LakeSurvey) -> bool {
        self.lakes.is_empty() || self.lakes.contains(&lake.lake_name.to_lowercase())
    }

    /// Year bounds; a zero bound is unset, so year 0 only fails a set bound
    pub(crate) fn accepts_survey(&self, survey: &Survey) -> bool {
        let year = survey.year();
        if self.min_year > 0 && year < self.min_year {
            return false;
        }
        !(self.max_year > 0 && year > self.max_year)
    }

    pub(crate) fn accepts_species(&self, code: &str, species: &Species) -> bool {
        if self.game_fish_only && !species.game_fish {
            return false;
        }
        self.species_codes
            .as_ref()
            .is_none_or(|codes| codes.contains(code))
    }

    pub(crate) fn matches_search(
        &self,
        species_name: &str,
        county_name: &str,
        lake_name: &str,
    ) -> bool {
        let Some(needle) = &self.search else {
            return true;
        };
        [species_name, county_name, lake_name]
            .iter()
            .any(|field| field.to_lowercase().contains(needle.as_str()))
    }
}

/// Codes of every species named by identifier, code or common name
fn matching_species_codes(catalog: &SpeciesCatalog, wanted: &[String]) -> HashSet<String> {
    let wanted = lowercase_set(wanted);
    catalog
        .iter()
        .filter(|(code, species)| {
            wanted.contains(&species.id.to_lowercase())
                || wanted.contains(&code.to_lowercase())
                || wanted.contains(&species.common_name.to_lowercase())
        })
        .map(|(code, _)| code.to_string())
        .collect()
}
