//! The read-only catalog served to every consumer
//!
//! A `Catalog` bundles the survey store with the species and county
//! reference data. It is built once at startup, then shared behind an `Arc`
//! and read without locking. Query and aggregation operations are
//! implemented on it in their own modules.

use crate::app::services::reference_loader::{CountyRegistry, SpeciesCatalog};
use crate::app::services::survey_ingestor::{IngestStats, SurveyIngestor};
use crate::app::services::survey_store::{
    EnrichmentStats, SurveyStore, enhance_counties_with_lakes,
};
use crate::config::Config;
use crate::Result;
use tracing::info;

#[cfg(test)]
pub mod fixtures;

/// Survey store plus reference data, immutable once built
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) store: SurveyStore,
    pub(crate) species: SpeciesCatalog,
    pub(crate) counties: CountyRegistry,
    pub(crate) ingest_stats: IngestStats,
    pub(crate) enrichment_stats: EnrichmentStats,
}

impl Catalog {
    /// Assemble a catalog and enrich counties with the lakes found in `store`
    pub fn new(store: SurveyStore, species: SpeciesCatalog, mut counties: CountyRegistry) -> Self {
        let enrichment_stats = enhance_counties_with_lakes(&store, &mut counties);
        Self {
            store,
            species,
            counties,
            ingest_stats: IngestStats::default(),
            enrichment_stats,
        }
    }

    /// Attach the statistics of the ingestion run that produced the store
    pub fn with_ingest_stats(mut self, stats: IngestStats) -> Self {
        self.ingest_stats = stats;
        self
    }

    /// Load reference data, ingest surveys and enrich counties
    ///
    /// Reference data is loaded first so a bad reference file fails fast,
    /// before any survey document is read.
    ///
    /// # Errors
    /// * Any error loading the county or species list
    /// * A directory-walk error if the survey root itself cannot be walked
    pub async fn load(config: &Config) -> Result<Self> {
        let counties = CountyRegistry::load(&config.data.counties_path()).await?;
        let species = SpeciesCatalog::load(&config.data.species_path()).await?;

        let ingestor = SurveyIngestor::new()
            .with_workers(config.ingest.workers)
            .with_queue_capacity(config.ingest.queue_capacity)
            .with_progress(config.ingest.show_progress);
        let (store, ingest_stats) = ingestor.ingest(&config.data.surveys_path()).await?;

        let catalog = Self::new(store, species, counties).with_ingest_stats(ingest_stats);
        info!(
            "Catalog ready: {} counties, {} species, {} lakes, {} surveys",
            catalog.counties.len(),
            catalog.species.len(),
            catalog.store.lake_count(),
            catalog.store.survey_count()
        );
        Ok(catalog)
    }

    pub fn store(&self) -> &SurveyStore {
        &self.store
    }

    pub fn species(&self) -> &SpeciesCatalog {
        &self.species
    }

    pub fn counties(&self) -> &CountyRegistry {
        &self.counties
    }

    pub fn ingest_stats(&self) -> &IngestStats {
        &self.ingest_stats
    }

    pub fn enrichment_stats(&self) -> &EnrichmentStats {
        &self.enrichment_stats
    }
}
