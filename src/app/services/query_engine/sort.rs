//! Row ordering over a closed set of sort keys
//!
//! String columns compare lexicographically and numeric columns numerically.
//! A row whose sort column is empty is placed before every row that has a
//! value, in both directions. Rows that compare equal keep their relative
//! order; there is no secondary key.

use super::row::FlattenedRow;
use crate::constants::{DEFAULT_SORT_COLUMN, ORDER_ASCENDING};
use std::cmp::Ordering;

/// Columns a survey query can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    SurveyDate,
    LakeName,
    CountyName,
    SpeciesName,
    TotalCatch,
    MinLength,
    MaxLength,
}

impl SortKey {
    /// Parse a column name; unrecognized names yield `None`
    pub fn parse(column: &str) -> Option<Self> {
        match column {
            "survey_date" => Some(Self::SurveyDate),
            "lake_name" => Some(Self::LakeName),
            "county_name" => Some(Self::CountyName),
            "species_name" => Some(Self::SpeciesName),
            "total_catch" => Some(Self::TotalCatch),
            "min_length" => Some(Self::MinLength),
            "max_length" => Some(Self::MaxLength),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SurveyDate => "survey_date",
            Self::LakeName => "lake_name",
            Self::CountyName => "county_name",
            Self::SpeciesName => "species_name",
            Self::TotalCatch => "total_catch",
            Self::MinLength => "min_length",
            Self::MaxLength => "max_length",
        }
    }

    /// Compare two rows on this column in `order`
    pub fn compare(&self, a: &FlattenedRow, b: &FlattenedRow, order: SortOrder) -> Ordering {
        match self {
            Self::SurveyDate => compare_text(&a.survey_date, &b.survey_date, order),
            Self::LakeName => compare_text(&a.lake_name, &b.lake_name, order),
            Self::CountyName => compare_text(&a.county_name, &b.county_name, order),
            Self::SpeciesName => compare_text(&a.species_name, &b.species_name, order),
            Self::TotalCatch => order.apply(a.total_catch.cmp(&b.total_catch)),
            Self::MinLength => order.apply(a.min_length.cmp(&b.min_length)),
            Self::MaxLength => order.apply(a.max_length.cmp(&b.max_length)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// `asc` is ascending; anything else is descending
    pub fn parse(order: &str) -> Self {
        if order == ORDER_ASCENDING {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Empty values first, then the values themselves in `order`
fn compare_text(a: &str, b: &str, order: SortOrder) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => order.apply(a.cmp(b)),
    }
}

/// Resolve the sort requested by a query
///
/// An empty column means the default: survey date, newest first, whatever
/// `order` says. An unrecognized column means no sort at all.
pub fn resolve_sort(sort_by: &str, order: &str) -> Option<(SortKey, SortOrder)> {
    if sort_by.is_empty() {
        return SortKey::parse(DEFAULT_SORT_COLUMN).map(|key| (key, SortOrder::Descending));
    }
    SortKey::parse(sort_by).map(|key| (key, SortOrder::parse(order)))
}

/// Stable-sort rows in place as requested by `sort_by` and `order`
pub fn sort_rows(rows: &mut [FlattenedRow], sort_by: &str, order: &str) {
    if let Some((key, order)) = resolve_sort(sort_by, order) {
        rows.sort_by(|a, b| key.compare(a, b, order));
    }
}
