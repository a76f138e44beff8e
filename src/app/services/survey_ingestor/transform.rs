//! Reshaping raw survey documents into the canonical schema
//!
//! Raw documents store length histograms as `[[length, quantity], ...]`
//! pairs. Before decoding, every `fishCount` field anywhere in the tree is
//! rewritten into `[{"length": .., "quantity": ..}, ...]` records.

use crate::app::models::{LakeSurvey, SurveyDocument};
use crate::constants::{FISH_COUNT_KEY, id_namespaces};
use crate::{Error, Result};
use serde_json::{Map, Value};
use std::path::Path;
use uuid::Uuid;

/// Recursively rewrite every `fishCount` array into length/quantity records
///
/// Malformed entries (wrong arity, non-numeric values) are dropped. Entries
/// already in record form are kept, so reshaping twice is harmless.
/// Returns the number of `fishCount` fields rewritten.
pub fn reshape_fish_counts(value: &mut Value) -> usize {
    match value {
        Value::Object(map) => {
            let mut reshaped = 0;
            for (key, child) in map.iter_mut() {
                if key == FISH_COUNT_KEY {
                    if let Value::Array(entries) = child {
                        let records: Vec<Value> =
                            entries.iter().filter_map(fish_count_record).collect();
                        *child = Value::Array(records);
                        reshaped += 1;
                        continue;
                    }
                }
                reshaped += reshape_fish_counts(child);
            }
            reshaped
        }
        Value::Array(items) => items.iter_mut().map(reshape_fish_counts).sum(),
        _ => 0,
    }
}

/// Convert one histogram entry into record form, or `None` if malformed
fn fish_count_record(entry: &Value) -> Option<Value> {
    let (length, quantity) = match entry {
        Value::Array(pair) if pair.len() == 2 => (as_integer(&pair[0])?, as_integer(&pair[1])?),
        Value::Object(record) => (
            as_integer(record.get("length")?)?,
            as_integer(record.get("quantity")?)?,
        ),
        _ => return None,
    };

    let mut record = Map::with_capacity(2);
    record.insert("length".to_string(), Value::from(length));
    record.insert("quantity".to_string(), Value::from(quantity));
    Some(Value::Object(record))
}

/// Integer value of a JSON number; fractional values are truncated
fn as_integer(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|float| float as i64))
}

/// Parse, reshape and decode one survey document
///
/// Returns the decoded lake and the number of `fishCount` fields rewritten.
pub fn parse_survey_document(path: &Path, contents: &[u8]) -> Result<(LakeSurvey, usize)> {
    let file = path.display().to_string();

    let mut tree: Value = serde_json::from_slice(contents)
        .map_err(|e| Error::json(file.clone(), "Failed to parse survey document", e))?;

    let reshaped = reshape_fish_counts(&mut tree);

    let document: SurveyDocument = serde_json::from_value(tree)
        .map_err(|e| Error::json(file, "Survey document does not match schema", e))?;

    let mut lake = document.result;
    lake.source_path = path.to_path_buf();
    Ok((lake, reshaped))
}

/// Give every survey lacking an identifier a stable one
///
/// Identifiers are derived from the document's location under the ingest
/// root, the lake and the survey's position, so reloading the same tree
/// reproduces them. Returns the number of identifiers generated.
pub fn assign_survey_ids(lake: &mut LakeSurvey, source_key: &str) -> usize {
    let mut generated = 0;
    for (index, survey) in lake.surveys.iter_mut().enumerate() {
        if !survey.survey_id.is_empty() {
            continue;
        }
        let name = format!(
            "{}#{}#{}#{}",
            source_key, lake.dow_number, index, survey.survey_date
        );
        survey.survey_id = Uuid::new_v5(&id_namespaces::SURVEY, name.as_bytes()).to_string();
        generated += 1;
    }
    generated
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reshape_nested_fish_counts() {
        let mut tree = json!({
            "result": {
                "surveys": [{
                    "lengths": {
                        "WAE": {"fishCount": [[10, 2], [12, 1]]},
                        "NOP": {"fishCount": [[20, 1]]}
                    }
                }]
            }
        });

        assert_eq!(reshape_fish_counts(&mut tree), 2);
        assert_eq!(
            tree["result"]["surveys"][0]["lengths"]["WAE"]["fishCount"],
            json!([{"length": 10, "quantity": 2}, {"length": 12, "quantity": 1}])
        );
        assert_eq!(
            tree["result"]["surveys"][0]["lengths"]["NOP"]["fishCount"],
            json!([{"length": 20, "quantity": 1}])
        );
    }

    #[test]
    fn test_reshape_skips_malformed_pairs() {
        let mut tree = json!({
            "fishCount": [[10, 2], [11], [12, 1, 5], ["x", 1], "bad", [13.9, 4.0], null]
        });

        reshape_fish_counts(&mut tree);
        assert_eq!(
            tree["fishCount"],
            json!([{"length": 10, "quantity": 2}, {"length": 13, "quantity": 4}])
        );
    }

    #[test]
    fn test_reshape_is_idempotent() {
        let mut tree = json!({"fishCount": [[10, 2]]});
        reshape_fish_counts(&mut tree);
        let once = tree.clone();
        reshape_fish_counts(&mut tree);
        assert_eq!(tree, once);
    }

    #[test]
    fn test_non_array_fish_count_is_left_alone() {
        let mut tree = json!({"fishCount": null, "other": {"fishCount": "n/a"}});
        assert_eq!(reshape_fish_counts(&mut tree), 0);
        assert_eq!(tree["fishCount"], Value::Null);
    }

    #[test]
    fn test_parse_survey_document() {
        let contents = br#"{
            "result": {
                "DOWNumber": 18030800,
                "countyName": "Crow Wing",
                "lakeName": "Gull",
                "surveys": [{
                    "surveyDate": "2018-06-11",
                    "surveyType": "Standard Survey",
                    "lengths": {
                        "WAE": {"minimum_length": 10, "maximum_length": 12,
                                "fishCount": [[10, 2], [12, 1]]}
                    },
                    "fishCatchSummaries": [{"species": "WAE", "totalCatch": 3}]
                }]
            }
        }"#;

        let path = Path::new("surveys/gull.json");
        let (lake, reshaped) = parse_survey_document(path, contents).unwrap();
        assert_eq!(reshaped, 1);
        assert_eq!(lake.dow_number, 18030800);
        assert_eq!(lake.county_name, "Crow Wing");
        assert_eq!(lake.source_path, path);

        let lengths = &lake.surveys[0].lengths["WAE"];
        assert_eq!(lengths.minimum_length, 10);
        assert_eq!(lengths.total_quantity(), 3);
    }

    #[test]
    fn test_parse_rejects_documents_without_result() {
        let path = Path::new("bad.json");
        assert!(parse_survey_document(path, br#"{"lakeName": "Gull"}"#).is_err());
        assert!(parse_survey_document(path, b"[1, 2").is_err());
    }

    #[test]
    fn test_assign_survey_ids_only_fills_missing() {
        let mut lake = LakeSurvey {
            dow_number: 1,
            surveys: vec![
                crate::app::models::Survey {
                    survey_id: "keep-me".to_string(),
                    ..Default::default()
                },
                crate::app::models::Survey::default(),
                crate::app::models::Survey::default(),
            ],
            ..Default::default()
        };

        assert_eq!(assign_survey_ids(&mut lake, "a/b.json"), 2);
        assert_eq!(lake.surveys[0].survey_id, "keep-me");
        assert!(!lake.surveys[1].survey_id.is_empty());
        assert_ne!(lake.surveys[1].survey_id, lake.surveys[2].survey_id);

        // Same input, same identifiers
        let mut again = lake.clone();
        again.surveys[1].survey_id.clear();
        again.surveys[2].survey_id.clear();
        assign_survey_ids(&mut again, "a/b.json");
        assert_eq!(again, lake);
    }
}
