//! Survey query engine
//!
//! Flattens the store into one row per (survey, species) pair, filters the
//! rows, sorts them and cuts out the requested page. Every query is a full
//! scan of the catalog with no caching between requests.

use crate::app::services::catalog::Catalog;
use tracing::debug;

pub mod filter;
pub mod pagination;
pub mod row;
pub mod sort;

#[cfg(test)]
pub mod tests;

pub use filter::SurveyQuery;
pub use pagination::{SurveyPage, paginate};
pub use row::FlattenedRow;
pub use sort::{SortKey, SortOrder, sort_rows};

use filter::CompiledFilter;

impl Catalog {
    /// Filter, sort and paginate survey rows
    pub fn filter_and_sort(&self, query: &SurveyQuery) -> SurveyPage {
        let mut rows = self.flatten_rows(query);
        sort_rows(&mut rows, &query.sort_by, &query.order);
        let page = paginate(rows, query.limit, query.page);

        debug!(
            "Survey query matched {} rows, returning page {} ({} rows)",
            page.total,
            page.page,
            page.data.len()
        );
        page
    }

    /// Every row passing the query's filters, in store order and unpaginated
    ///
    /// Species codes missing from the species catalog produce no row.
    pub fn flatten_rows(&self, query: &SurveyQuery) -> Vec<FlattenedRow> {
        let filter = CompiledFilter::compile(query, &self.species);
        let mut rows = Vec::new();

        for (county_name, lakes) in self.store.counties() {
            if !filter.accepts_county(county_name, &self.counties) {
                continue;
            }

            for lake in lakes.iter().filter(|lake| filter.accepts_lake(lake)) {
                for survey in lake.surveys.iter().filter(|s| filter.accepts_survey(s)) {
                    for (code, lengths) in &survey.lengths {
                        let Some(species) = self.species.resolve(code) else {
                            continue;
                        };
                        if !filter.accepts_species(code, species) {
                            continue;
                        }
                        if !filter.matches_search(
                            &species.common_name,
                            &lake.county_name,
                            &lake.lake_name,
                        ) {
                            continue;
                        }
                        rows.push(FlattenedRow::new(lake, survey, code, species, lengths));
                    }
                }
            }
        }

        rows
    }
}
