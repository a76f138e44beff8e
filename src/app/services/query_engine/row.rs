//! Flattened (survey × species) rows

use crate::app::models::{LakeSurvey, LengthSummary, Species, Survey};
use serde::{Deserialize, Serialize};

/// One row per species with length data in a survey
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlattenedRow {
    #[serde(rename = "surveyID")]
    pub survey_id: String,
    pub dow_number: i64,
    pub survey_type: String,
    pub survey_sub_type: String,
    /// County name as recorded in the survey document
    pub county_name: String,
    pub lake_name: String,
    pub survey_date: String,
    /// Display common name of the species
    pub species_name: String,
    pub image_url: String,
    pub narrative: String,
    /// Taken from the length summary as recorded, not recomputed
    pub min_length: i64,
    pub max_length: i64,
    /// Sum of this survey's catch summaries for the species
    pub total_catch: i64,
}

impl FlattenedRow {
    pub(crate) fn new(
        lake: &LakeSurvey,
        survey: &Survey,
        code: &str,
        species: &Species,
        lengths: &LengthSummary,
    ) -> Self {
        Self {
            survey_id: survey.survey_id.clone(),
            dow_number: lake.dow_number,
            survey_type: survey.survey_type.clone(),
            survey_sub_type: survey.survey_sub_type.clone(),
            county_name: lake.county_name.clone(),
            lake_name: lake.lake_name.clone(),
            survey_date: survey.survey_date.clone(),
            species_name: species.common_name.clone(),
            image_url: species.image_url.clone(),
            narrative: survey.narrative.clone(),
            min_length: lengths.minimum_length,
            max_length: lengths.maximum_length,
            total_catch: survey.total_catch_for(code),
        }
    }
}
