//! Data models for lake survey processing
//!
//! This module contains the core data structures for reference data (species and
//! counties) and for the per-lake survey documents, using the field names of the
//! raw JSON inputs on the wire.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

// =============================================================================
// Reference Data
// =============================================================================

/// Species reference record, keyed by its short natural code (e.g. "WAE")
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Species {
    /// Natural key used inside survey documents
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,

    /// Stable surrogate identifier exposed to API consumers
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    /// Display name, capitalized per word after loading
    #[serde(default, deserialize_with = "null_as_default")]
    pub common_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub scientific_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub game_fish: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub species_group: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// County reference record
///
/// `lakes` is never read from the reference file; it is filled in after
/// ingestion from the lakes recorded against the county in survey data.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct County {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    pub county_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub fips_code: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub county_seat: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub established: i32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub origin: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub etymology: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub population: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub area_sq_miles: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub map_image_url: String,

    /// Sorted distinct lake names found in survey data for this county
    #[serde(default, skip_deserializing, skip_serializing_if = "Vec::is_empty")]
    pub lakes: Vec<String>,
}

// =============================================================================
// Survey Documents
// =============================================================================

/// One bucket of a length histogram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct FishCount {
    pub length: i64,
    pub quantity: i64,
}

/// Length data for one species within one survey
///
/// The species itself is identified by the key of the enclosing map and
/// resolved against the species catalog at read time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LengthSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub minimum_length: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub maximum_length: i64,

    #[serde(rename = "fishCount", default, deserialize_with = "null_as_default")]
    pub fish_count: Vec<FishCount>,
}

impl LengthSummary {
    /// Total number of fish recorded in the histogram
    pub fn total_quantity(&self) -> i64 {
        self.fish_count
            .iter()
            .fold(0i64, |total, count| total.saturating_add(count.quantity))
    }
}

/// Catch total reported for one species in a survey; either side may be absent
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CatchSummary {
    #[serde(default)]
    pub species: Option<String>,

    #[serde(rename = "totalCatch", default)]
    pub total_catch: Option<i64>,
}

/// A single survey of a lake
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Survey {
    #[serde(rename = "surveyID", default, deserialize_with = "null_as_default")]
    pub survey_id: String,

    /// `YYYY-MM-DD`, or a prefix of it
    #[serde(rename = "surveyDate", default, deserialize_with = "null_as_default")]
    pub survey_date: String,

    #[serde(rename = "surveyType", default, deserialize_with = "null_as_default")]
    pub survey_type: String,

    // Older exports carry the misspelled key.
    #[serde(
        rename = "surveySubType",
        alias = "suveySubType",
        default,
        deserialize_with = "null_as_default"
    )]
    pub survey_sub_type: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub narrative: String,

    /// Length data keyed by species code
    #[serde(default, deserialize_with = "null_as_default")]
    pub lengths: BTreeMap<String, LengthSummary>,

    #[serde(
        rename = "fishCatchSummaries",
        default,
        deserialize_with = "null_as_default"
    )]
    pub catch_summaries: Vec<CatchSummary>,
}

impl Survey {
    /// Year taken from the first four characters of the survey date, or 0
    pub fn year(&self) -> i32 {
        self.survey_date
            .get(..4)
            .and_then(|prefix| prefix.parse().ok())
            .unwrap_or(0)
    }

    /// Sum of every catch summary in this survey reported for `code`,
    /// saturating at `i64::MAX`
    pub fn total_catch_for(&self, code: &str) -> i64 {
        self.catch_summaries
            .iter()
            .filter(|summary| summary.species.as_deref() == Some(code))
            .filter_map(|summary| summary.total_catch)
            .fold(0i64, i64::saturating_add)
    }
}

/// All surveys of one lake, as decoded from one survey document
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LakeSurvey {
    #[serde(rename = "DOWNumber", default, deserialize_with = "null_as_default")]
    pub dow_number: i64,

    /// County name exactly as it appears in the survey document
    #[serde(rename = "countyName", default, deserialize_with = "null_as_default")]
    pub county_name: String,

    #[serde(rename = "lakeName", default, deserialize_with = "null_as_default")]
    pub lake_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub surveys: Vec<Survey>,

    /// File the lake was loaded from
    #[serde(skip)]
    pub source_path: PathBuf,
}

/// Top-level shape of a survey document: `{ "result": { ... } }`
#[derive(Debug, Clone, Deserialize)]
pub struct SurveyDocument {
    pub result: LakeSurvey,
}

/// Treat an explicit JSON `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
