//! Ingestion statistics tracking

use std::time::Duration;

/// Statistics about one survey ingestion run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestStats {
    /// Survey documents found by the directory walk
    pub files_discovered: usize,

    /// Documents decoded and merged into the store
    pub files_loaded: usize,

    /// Documents skipped because they could not be read or decoded
    pub files_skipped: usize,

    /// Lakes merged into the store
    pub lakes_loaded: usize,

    /// Surveys merged into the store
    pub surveys_loaded: usize,

    /// `fishCount` fields rewritten from pairs into records
    pub fish_counts_reshaped: usize,

    /// Survey identifiers generated for surveys lacking one
    pub survey_ids_generated: usize,

    /// Time taken by the whole run
    pub load_duration: Duration,

    /// One message per skipped document
    pub errors: Vec<String>,

    /// First error met below the root while walking; the walk carried on
    pub walk_error: Option<String>,
}

impl IngestStats {
    /// Create new empty ingestion statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a skipped document
    pub fn add_skipped(&mut self, message: String) {
        self.files_skipped += 1;
        self.errors.push(message);
    }

    /// Check if any documents were skipped or the walk was incomplete
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || self.walk_error.is_some()
    }

    /// Percentage of processed documents that loaded successfully
    pub fn success_rate(&self) -> f64 {
        let processed = self.files_loaded + self.files_skipped;
        if processed == 0 {
            100.0
        } else {
            (self.files_loaded as f64 / processed as f64) * 100.0
        }
    }

    /// Get a summary string of the ingestion run
    pub fn summary(&self) -> String {
        format!(
            "Loaded {} of {} files ({} skipped, {:.1}% success): {} lakes, {} surveys in {:.2}s",
            self.files_loaded,
            self.files_discovered,
            self.files_skipped,
            self.success_rate(),
            self.lakes_loaded,
            self.surveys_loaded,
            self.load_duration.as_secs_f64()
        )
    }
}
