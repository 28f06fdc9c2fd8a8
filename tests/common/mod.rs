#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub const INPUT_FILE: &str = "classified_timestamps_with_location.txt";
pub const OUTPUT_FILE: &str = "beacons.json";

pub fn create_test_log(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// A log line the way the classifier writes them
pub fn log_line(timestamp: &str, mode: &str, iccid: &str, lat: f64, lon: f64) -> String {
    format!(
        "Classified point: {} Mode: {} ICCID: {} Latitude: {} Longitude: {}",
        timestamp, mode, iccid, lat, lon
    )
}
