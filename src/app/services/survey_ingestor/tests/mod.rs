//! Shared test utilities and fixtures for survey ingestion tests

use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};


/// Build a raw survey document for one lake with `[length, quantity]` pairs
pub fn survey_document(county: &str, lake: &str, dow: i64, surveys: Vec<Value>) -> Value {
    json!({
        "result": {
            "DOWNumber": dow,
            "countyName": county,
            "lakeName": lake,
            "surveys": surveys
        }
    })
}

/// A raw survey with one species' length histogram and catch total
pub fn raw_survey(date: &str, code: &str, pairs: &[(i64, i64)], total_catch: i64) -> Value {
    let min = pairs.iter().map(|pair| pair.0).min().unwrap_or(0);
    let max = pairs.iter().map(|pair| pair.0).max().unwrap_or(0);
    let fish_count: Vec<Value> = pairs.iter().map(|&(l, q)| json!([l, q])).collect();

    json!({
        "surveyDate": date,
        "surveyType": "Standard Survey",
        "surveySubType": "Population Assessment",
        "narrative": "Test narrative",
        "lengths": {
            code: {
                "minimum_length": min,
                "maximum_length": max,
                "fishCount": fish_count
            }
        },
        "fishCatchSummaries": [{"species": code, "totalCatch": total_catch}]
    })
}

/// Write a survey document at `relative` under `root`, creating parent directories
pub fn write_survey_file(root: &Path, relative: &str, document: &Value) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, serde_json::to_string_pretty(document).unwrap()).unwrap();
    path
}
