//! CSV loaders for light and vehicle tables.
//!
//! # CSV formats
//!
//! ```csv
//! x,y,intensity
//! 0.0,0.0,3.5
//! 6.0,-2.0,-1.0
//! ```
//!
//! ```csv
//! x,y,heading,speed,behavior
//! 0.0,0.0,0.0,1.0,master_ccw
//! 1.5,2.0,3.14,0.0,follower
//! ```
//!
//! Fields are trimmed.  The same validation as the textual records applies:
//! non-finite numbers, negative speeds, and unknown behavior names reject
//! the whole file.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use bv_core::Vec2;
use bv_light::LightSource;
use bv_vehicle::{Behavior, Vehicle};

use crate::record::{parse_number, parse_speed};
use crate::{ScenarioError, ScenarioResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LightRow {
    x:         String,
    y:         String,
    intensity: String,
}

#[derive(Deserialize)]
struct VehicleRow {
    x:        String,
    y:        String,
    heading:  String,
    speed:    String,
    behavior: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every light from a CSV file.
pub fn load_lights_csv(path: &Path) -> ScenarioResult<Vec<LightSource>> {
    let file = std::fs::File::open(path).map_err(ScenarioError::Io)?;
    load_lights_reader(file)
}

/// Like [`load_lights_csv`] but accepts any `Read` source.
pub fn load_lights_reader<R: Read>(reader: R) -> ScenarioResult<Vec<LightSource>> {
    let mut csv_reader = csv_reader(reader);
    let mut lights = Vec::new();

    for (i, result) in csv_reader.deserialize::<LightRow>().enumerate() {
        let row = result?;
        let label = row_label(i);
        let x = parse_number(&label, "x", &row.x)?;
        let y = parse_number(&label, "y", &row.y)?;
        let intensity = parse_number(&label, "intensity", &row.intensity)?;
        lights.push(LightSource::new(Vec2::new(x, y), intensity));
    }

    Ok(lights)
}

/// Load every vehicle from a CSV file.
pub fn load_vehicles_csv(path: &Path) -> ScenarioResult<Vec<Vehicle>> {
    let file = std::fs::File::open(path).map_err(ScenarioError::Io)?;
    load_vehicles_reader(file)
}

/// Like [`load_vehicles_csv`] but accepts any `Read` source.
pub fn load_vehicles_reader<R: Read>(reader: R) -> ScenarioResult<Vec<Vehicle>> {
    let mut csv_reader = csv_reader(reader);
    let mut vehicles = Vec::new();

    for (i, result) in csv_reader.deserialize::<VehicleRow>().enumerate() {
        let row = result?;
        let label = row_label(i);
        let x = parse_number(&label, "x", &row.x)?;
        let y = parse_number(&label, "y", &row.y)?;
        let heading = parse_number(&label, "heading", &row.heading)?;
        let speed = parse_speed(&label, &row.speed)?;
        let behavior: Behavior = row.behavior.parse()?;
        vehicles.push(Vehicle::new(Vec2::new(x, y), heading, speed, behavior));
    }

    Ok(vehicles)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

/// Data rows are 1-based and the header occupies line 1.
fn row_label(index: usize) -> String {
    format!("CSV line {}", index + 2)
}
