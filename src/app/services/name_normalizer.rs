//! Name normalization shared by county enrichment, filtering and statistics
//!
//! Survey documents and the county reference list disagree on spelling
//! ("St. Louis County" vs "Saint Louis"), so names are reduced to a
//! normalized key and then mapped through a small alias table before being
//! compared.

use crate::constants::{COUNTY_ALIASES, COUNTY_SUFFIX};
use std::collections::HashSet;

/// Normalize a county name for use as a lookup key
///
/// Lower-cases, trims, removes `.` and `,`, and strips a trailing " county".
pub fn normalize_county_name(name: &str) -> String {
    let mut normalized = name.trim().to_lowercase().replace(['.', ','], "");
    if let Some(stripped) = normalized.strip_suffix(COUNTY_SUFFIX) {
        normalized = stripped.trim().to_string();
    }
    normalized
}

/// Map a normalized county name onto its canonical form if it is a known alias
pub fn resolve_county_alias(normalized: &str) -> &str {
    COUNTY_ALIASES
        .iter()
        .find(|(variant, _)| *variant == normalized)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(normalized)
}

/// Normalize a county name and resolve known aliases in one step
pub fn county_key(name: &str) -> String {
    resolve_county_alias(&normalize_county_name(name)).to_string()
}

/// Capitalize the first letter of each word and lower-case the rest
///
/// Words are split on whitespace and re-joined with single spaces.
pub fn capitalize_words(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Build a set of lower-cased values for case-insensitive membership tests
pub fn lowercase_set<S: AsRef<str>>(items: &[S]) -> HashSet<String> {
    items
        .iter()
        .map(|item| item.as_ref().to_lowercase())
        .collect()
}
