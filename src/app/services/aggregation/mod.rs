//! Per-species and per-county statistics over the catalog
//!
//! Each operation is a single pass over the survey store. Percentages of
//! lakes are whole numbers; distribution shares and averages are rounded to
//! two decimal places.

pub mod county_stats;
pub mod fish_counts;
pub mod species_listing;
pub mod species_stats;

#[cfg(test)]
pub mod tests;

pub use county_stats::CountyStats;
pub use fish_counts::FishCountData;
pub use species_listing::SpeciesSummary;
pub use species_stats::{CountyPercentage, SpeciesStats};

/// `100 * part / whole` rounded half away from zero, 0 when `whole` is 0
pub(crate) fn whole_percentage(part: usize, whole: usize) -> i64 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as i64
}

/// Round to two decimal places
pub(crate) fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
