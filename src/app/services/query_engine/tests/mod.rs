//! Shared test utilities for query engine tests

use crate::app::services::query_engine::{FlattenedRow, SurveyQuery};
use std::collections::HashSet;

pub mod ordering_tests;

/// Identity of a row for set comparisons
pub fn row_keys(rows: &[FlattenedRow]) -> HashSet<(String, String)> {
    rows.iter()
        .map(|row| (row.survey_id.clone(), row.species_name.clone()))
        .collect()
}

/// Query matching everything, on a single page
pub fn all_rows_query() -> SurveyQuery {
    SurveyQuery::new().with_page(1, 1000)
}
