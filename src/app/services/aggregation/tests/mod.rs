//! Shared test utilities for aggregation tests

use crate::app::services::aggregation::CountyPercentage;

pub mod county_tests;

pub fn county_percentage(id: &str, percentage: i64) -> CountyPercentage {
    CountyPercentage {
        id: id.to_string(),
        percentage,
    }
}
