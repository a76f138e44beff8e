//! Application constants for the lake survey service
//!
//! This module contains default paths, worker settings, query defaults and
//! the known county-name aliases used throughout the service.

// =============================================================================
// Data Layout
// =============================================================================

/// Default root directory holding reference files and survey documents
pub const DEFAULT_DATA_DIR: &str = "data";

/// County reference list, relative to the data directory
pub const DEFAULT_COUNTIES_FILE: &str = "minnesota_counties.json";

/// Species reference list, relative to the data directory
pub const DEFAULT_SPECIES_FILE: &str = "fish_species.json";

/// Survey document tree, relative to the data directory
pub const DEFAULT_SURVEYS_DIR: &str = "surveys";

/// Extension of survey documents picked up by the directory walk
pub const SURVEY_FILE_EXTENSION: &str = "json";

// =============================================================================
// Ingestion Configuration Defaults
// =============================================================================

/// Default number of ingestion workers
pub const DEFAULT_INGEST_WORKERS: usize = 8;

/// Upper bound accepted for the ingestion worker count
pub const MAX_INGEST_WORKERS: usize = 128;

/// Capacity of the bounded path queue feeding the workers
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

/// Capacity of the channel carrying parsed lakes to the store owner
pub const RESULT_CHANNEL_CAPACITY: usize = 64;

/// Raw JSON key holding `[length, quantity]` pairs before reshaping
pub const FISH_COUNT_KEY: &str = "fishCount";

// =============================================================================
// Identifier Namespaces
// =============================================================================

/// Name-based UUID namespaces, so generated identifiers are stable across reloads
pub mod id_namespaces {
    use uuid::Uuid;

    /// Namespace for species identifiers derived from the species code
    pub const SPECIES: Uuid = Uuid::from_u128(0x6c1f_2d7e_51a4_4b8e_9f0a_3e2d_1c4b_5a01);

    /// Namespace for county identifiers derived from the county name
    pub const COUNTY: Uuid = Uuid::from_u128(0x6c1f_2d7e_51a4_4b8e_9f0a_3e2d_1c4b_5a02);

    /// Namespace for survey identifiers derived from file, lake and position
    pub const SURVEY: Uuid = Uuid::from_u128(0x6c1f_2d7e_51a4_4b8e_9f0a_3e2d_1c4b_5a03);
}

// =============================================================================
// Name Normalization
// =============================================================================

/// Suffix stripped from county names during normalization
pub const COUNTY_SUFFIX: &str = " county";

/// Known spellings in survey data that differ from the county reference list,
/// as `(normalized variant, normalized canonical)` pairs
pub const COUNTY_ALIASES: &[(&str, &str)] = &[("st louis", "saint louis")];

// =============================================================================
// Query Defaults
// =============================================================================

/// Default page size for survey queries
pub const DEFAULT_PAGE_LIMIT: usize = 50;

/// Default page number (pages are 1-indexed)
pub const DEFAULT_PAGE: usize = 1;

/// Sort column applied when a query names none
pub const DEFAULT_SORT_COLUMN: &str = "survey_date";

/// Sort direction keyword for ascending order; anything else is descending
pub const ORDER_ASCENDING: &str = "asc";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default bind address for the HTTP server
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
