//! Tests for query ordering and paging over the sample catalog

use super::*;
use crate::app::services::catalog::fixtures::{TOTAL_ROWS, sample_catalog};

#[test]
fn test_default_order_is_newest_first_with_undated_leading() {
    let catalog = sample_catalog();
    let page = catalog.filter_and_sort(&all_rows_query());

    let dates: Vec<&str> = page.data.iter().map(|row| row.survey_date.as_str()).collect();
    assert_eq!(
        dates,
        vec![
            "",
            "2021-05-30",
            "2020-09-01",
            "2020-09-01",
            "2019-06-10",
            "2019-06-10",
            "2015-08-20",
            "2012-07-01",
        ]
    );
}

#[test]
fn test_total_catch_descending_is_non_increasing() {
    let catalog = sample_catalog();
    let query = all_rows_query().with_sort("total_catch", "desc");
    let page = catalog.filter_and_sort(&query);

    assert_eq!(page.data[0].total_catch, 7);
    assert!(
        page.data
            .windows(2)
            .all(|pair| pair[0].total_catch >= pair[1].total_catch)
    );
}

#[test]
fn test_string_column_ascending() {
    let catalog = sample_catalog();
    let query = all_rows_query().with_sort("county_name", "asc");
    let page = catalog.filter_and_sort(&query);

    assert_eq!(page.data[0].county_name, "Aitkin County");
    assert_eq!(page.data[TOTAL_ROWS - 1].county_name, "St. Louis County");
    assert!(
        page.data
            .windows(2)
            .all(|pair| pair[0].county_name <= pair[1].county_name)
    );
}

#[test]
fn test_max_length_ascending() {
    let catalog = sample_catalog();
    let query = all_rows_query().with_sort("max_length", "asc");
    let page = catalog.filter_and_sort(&query);

    assert_eq!(page.data[0].max_length, 10);
    assert_eq!(page.data[TOTAL_ROWS - 1].max_length, 30);
}

#[test]
fn test_unknown_sort_key_keeps_store_order() {
    let catalog = sample_catalog();
    let unsorted = catalog.flatten_rows(&all_rows_query());
    let page = catalog.filter_and_sort(&all_rows_query().with_sort("narrative", "asc"));

    assert_eq!(page.data, unsorted);
}

#[test]
fn test_pages_reconstruct_full_result() {
    let catalog = sample_catalog();
    let full = catalog.filter_and_sort(&all_rows_query().with_sort("lake_name", "asc"));

    let limit = 3;
    let pages = full.total.div_ceil(limit);
    let mut collected = Vec::new();
    for page in 1..=pages {
        let query = SurveyQuery::new()
            .with_sort("lake_name", "asc")
            .with_page(page, limit);
        let result = catalog.filter_and_sort(&query);
        assert_eq!(result.total, full.total);
        assert_eq!(result.page, page);
        collected.extend(result.data);
    }

    assert_eq!(collected, full.data);
}

#[test]
fn test_page_past_end() {
    let catalog = sample_catalog();
    let query = SurveyQuery::new().with_page(5, 50);
    let page = catalog.filter_and_sort(&query);

    assert!(page.data.is_empty());
    assert_eq!(page.total, TOTAL_ROWS);
    assert_eq!(page.prev_page, 4);
    assert_eq!(page.next_page, 5);
}
