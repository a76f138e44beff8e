//! Shared in-memory catalog used by query and aggregation tests
//!
//! | county (raw)      | lake       | DOW      | survey | date       | lengths         |
//! |-------------------|------------|----------|--------|------------|-----------------|
//! | Cass              | Leech      | 11020300 | s1     | 2019-06-10 | WAE, NOP        |
//! | Cass              | Leech      | 11020300 | s2     | 2012-07-01 | WAE             |
//! | Cass              | Cass       | 4003000  | s3     | 2015-08-20 | WTS, QQQ (unknown) |
//! | St. Louis County  | Vermilion  | 69037800 | s4     | 2021-05-30 | WAE             |
//! | Saint Louis       | Burntside  | 69011800 | s5     | (none)     | NOP             |
//! | Aitkin County     | Mille Lacs | 48000200 | s6     | 2020-09-01 | WAE, WTS        |
//!
//! Eight rows come out of an unfiltered query; the QQQ entry is unknown.

use super::Catalog;
use crate::app::models::{
    CatchSummary, County, FishCount, LakeSurvey, LengthSummary, Species, Survey,
};
use crate::app::services::reference_loader::{CountyRegistry, SpeciesCatalog};
use crate::app::services::survey_store::SurveyStore;
use std::collections::BTreeMap;
use std::path::PathBuf;

pub const TOTAL_ROWS: usize = 8;

pub fn species(code: &str, id: &str, name: &str, game_fish: bool) -> Species {
    Species {
        code: code.to_string(),
        id: id.to_string(),
        common_name: name.to_string(),
        scientific_name: format!("{} scientificus", name),
        game_fish,
        species_group: "Test".to_string(),
        image_url: format!("https://example.test/{}.png", code.to_lowercase()),
        description: String::new(),
    }
}

pub fn county(id: &str, name: &str) -> County {
    County {
        id: id.to_string(),
        county_name: name.to_string(),
        fips_code: String::new(),
        county_seat: String::new(),
        established: 1857,
        origin: String::new(),
        etymology: String::new(),
        population: 1000,
        area_sq_miles: 10.0,
        map_image_url: String::new(),
        lakes: Vec::new(),
    }
}

pub fn lengths(min: i64, max: i64, counts: &[(i64, i64)]) -> LengthSummary {
    LengthSummary {
        minimum_length: min,
        maximum_length: max,
        fish_count: counts
            .iter()
            .map(|&(length, quantity)| FishCount { length, quantity })
            .collect(),
    }
}

pub fn survey(
    id: &str,
    date: &str,
    length_data: Vec<(&str, LengthSummary)>,
    catches: &[(&str, i64)],
) -> Survey {
    Survey {
        survey_id: id.to_string(),
        survey_date: date.to_string(),
        survey_type: "Standard Survey".to_string(),
        survey_sub_type: "Population Assessment".to_string(),
        narrative: format!("Narrative for {}", id),
        lengths: length_data
            .into_iter()
            .map(|(code, summary)| (code.to_string(), summary))
            .collect(),
        catch_summaries: catches
            .iter()
            .map(|&(code, total)| CatchSummary {
                species: Some(code.to_string()),
                total_catch: Some(total),
            })
            .collect(),
    }
}

pub fn lake(county: &str, name: &str, dow: i64, path: &str, surveys: Vec<Survey>) -> LakeSurvey {
    LakeSurvey {
        dow_number: dow,
        county_name: county.to_string(),
        lake_name: name.to_string(),
        surveys,
        source_path: PathBuf::from(path),
    }
}

pub fn sample_species() -> SpeciesCatalog {
    let records: BTreeMap<String, Species> = [
        species("WAE", "sp-wae", "walleye", true),
        species("NOP", "sp-nop", "northern pike", true),
        species("WTS", "sp-wts", "white sucker", false),
        species("YEP", "sp-yep", "yellow perch", true),
    ]
    .into_iter()
    .map(|record| (record.code.clone(), record))
    .collect();
    SpeciesCatalog::from_records(records)
}

pub fn sample_counties() -> CountyRegistry {
    CountyRegistry::from_records(vec![
        county("aitkin-id", "Aitkin"),
        county("cass-id", "Cass"),
        county("stlouis-id", "Saint Louis"),
        county("crowwing-id", "Crow Wing"),
    ])
}

pub fn sample_store() -> SurveyStore {
    let mut store = SurveyStore::new();

    store.insert(lake(
        "Cass",
        "Leech",
        11020300,
        "cass/leech.json",
        vec![
            survey(
                "s1",
                "2019-06-10",
                vec![
                    ("WAE", lengths(10, 12, &[(10, 2), (12, 1)])),
                    ("NOP", lengths(20, 30, &[(20, 1), (30, 1)])),
                ],
                &[("WAE", 3), ("WAE", 4), ("NOP", 2)],
            ),
            survey(
                "s2",
                "2012-07-01",
                vec![("WAE", lengths(14, 14, &[(14, 5)]))],
                &[("WAE", 5)],
            ),
        ],
    ));

    store.insert(lake(
        "Cass",
        "Cass",
        4003000,
        "cass/cass.json",
        vec![survey(
            "s3",
            "2015-08-20",
            vec![
                ("WTS", lengths(8, 16, &[(8, 1), (16, 3)])),
                ("QQQ", lengths(1, 1, &[(1, 1)])),
            ],
            &[("WTS", 4), ("QQQ", 1)],
        )],
    ));

    store.insert(lake(
        "St. Louis County",
        "Vermilion",
        69037800,
        "stlouis/vermilion.json",
        vec![survey(
            "s4",
            "2021-05-30",
            vec![("WAE", lengths(16, 20, &[(16, 2), (20, 2)]))],
            &[("WAE", 4), ("NOP", 1)],
        )],
    ));

    store.insert(lake(
        "Saint Louis",
        "Burntside",
        69011800,
        "stlouis/burntside.json",
        vec![survey(
            "s5",
            "",
            vec![("NOP", lengths(22, 22, &[(22, 1)]))],
            &[("NOP", 1)],
        )],
    ));

    store.insert(lake(
        "Aitkin County",
        "Mille Lacs",
        48000200,
        "aitkin/millelacs.json",
        vec![survey(
            "s6",
            "2020-09-01",
            vec![
                ("WAE", lengths(18, 25, &[(18, 3), (25, 1)])),
                ("WTS", lengths(10, 10, &[])),
            ],
            &[("WAE", 4)],
        )],
    ));

    store.finalize();
    store
}

pub fn sample_catalog() -> Catalog {
    Catalog::new(sample_store(), sample_species(), sample_counties())
}
