//! Page slicing for query results

use super::row::FlattenedRow;
use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_LIMIT};
use serde::{Deserialize, Serialize};

/// One page of query results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyPage {
    pub data: Vec<FlattenedRow>,
    pub limit: usize,
    pub page: usize,
    pub prev_page: usize,
    /// `page + 1` while rows remain, otherwise `page`
    pub next_page: usize,
    /// Number of rows before pagination
    pub total: usize,
}

/// Cut `rows` down to the requested 1-indexed page
///
/// A page of 0 is treated as the first page and a limit of 0 as the default
/// page size. A page past the end is empty and reports itself as the next page.
pub fn paginate(mut rows: Vec<FlattenedRow>, limit: usize, page: usize) -> SurveyPage {
    let limit = if limit == 0 { DEFAULT_PAGE_LIMIT } else { limit };
    let page = page.max(DEFAULT_PAGE);
    let total = rows.len();
    let prev_page = page.saturating_sub(1).max(1);

    let start = (page - 1).saturating_mul(limit);
    if start >= total {
        return SurveyPage {
            data: Vec::new(),
            limit,
            page,
            prev_page,
            next_page: page,
            total,
        };
    }

    let end = start.saturating_add(limit).min(total);
    rows.truncate(end);
    let data = rows.split_off(start);

    SurveyPage {
        data,
        limit,
        page,
        prev_page,
        next_page: page + 1,
        total,
    }
}
