//! Length histogram of one species in one survey

use crate::app::models::FishCount;
use crate::app::services::catalog::Catalog;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FishCountData {
    /// Species as requested
    pub species: String,
    #[serde(rename = "surveyDate")]
    pub survey_date: String,
    pub data: Vec<FishCount>,
}

impl Catalog {
    /// Histogram recorded for a species in the survey of lake `dow_number`
    /// taken on `survey_date`
    ///
    /// The species may be given by identifier, code or common name. The date
    /// must match exactly. Returns `None` if the species is unknown, no such
    /// survey exists, or the survey has no length data for the species.
    pub fn fish_count_data(
        &self,
        dow_number: i64,
        species: &str,
        survey_date: &str,
    ) -> Option<FishCountData> {
        let Some((code, _)) = self.species.resolve_reference(species) else {
            debug!("Fish count lookup for unknown species '{}'", species);
            return None;
        };

        let lengths = self
            .store
            .lakes_by_dow(dow_number)
            .flat_map(|lake| &lake.surveys)
            .filter(|survey| survey.survey_date == survey_date)
            .find_map(|survey| survey.lengths.get(code))?;

        Some(FishCountData {
            species: species.to_string(),
            survey_date: survey_date.to_string(),
            data: lengths.fish_count.clone(),
        })
    }
}
