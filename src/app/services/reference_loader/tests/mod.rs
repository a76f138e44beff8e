//! Shared test utilities and fixtures for reference loader tests

use std::fs;
use std::path::{Path, PathBuf};


/// Write a county reference file with the given county names
pub fn write_counties_file(dir: &Path, names: &[&str]) -> PathBuf {
    let counties: Vec<serde_json::Value> = names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            serde_json::json!({
                "county_name": name,
                "fips_code": format!("27{:03}", index * 2 + 1),
                "county_seat": format!("{} Seat", name),
                "established": 1850 + index as i32,
                "origin": "Test origin",
                "etymology": "Test etymology",
                "population": 1000 * (index + 1),
                "area_sq_miles": 100.5,
                "map_image_url": format!("https://example.test/{}.png", index)
            })
        })
        .collect();

    let path = dir.join("counties.json");
    fs::write(&path, serde_json::to_string_pretty(&counties).unwrap()).unwrap();
    path
}

/// Write a species reference file keyed by code
pub fn write_species_file(dir: &Path) -> PathBuf {
    let species = serde_json::json!({
        "WAE": {
            "common_name": "walleye",
            "scientific_name": "Sander vitreus",
            "game_fish": true,
            "species_group": "Perch",
            "image_url": "https://example.test/wae.png",
            "description": "Popular game fish"
        },
        "NOP": {
            "common_name": "NORTHERN PIKE",
            "scientific_name": "Esox lucius",
            "game_fish": true,
            "species_group": "Pike",
            "image_url": "https://example.test/nop.png",
            "description": "Toothy predator"
        },
        "WTS": {
            "id": "fixed-white-sucker-id",
            "common_name": "white sucker",
            "scientific_name": "Catostomus commersonii",
            "game_fish": false,
            "species_group": "Sucker",
            "image_url": "",
            "description": ""
        }
    });

    let path = dir.join("species.json");
    fs::write(&path, serde_json::to_string_pretty(&species).unwrap()).unwrap();
    path
}
