//! TOML scenario files.
//!
//! # Format
//!
//! ```toml
//! seed            = 12345
//! random_lights   = 4
//! random_vehicles = 40
//! add_light       = ["0 0 3.5", "6 -2 -1"]
//! add_vehicle     = ["0 0 0 1 master_ccw"]
//! lights_csv      = "lights.csv"      # relative to this file
//! vehicles_csv    = "vehicles.csv"
//! ```
//!
//! Every key is optional.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use bv_core::DEFAULT_SEED;

use crate::{ScenarioError, ScenarioResult};

/// Declarative description of an initial world.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Seed of the single RNG used for generation.
    pub seed: u64,

    /// Number of lights to generate.
    pub random_lights: usize,

    /// Number of followers to generate.
    pub random_vehicles: usize,

    /// Light records, `"x y intensity"`.
    pub add_light: Vec<String>,

    /// Vehicle records, `"x y heading speed behavior"`.
    pub add_vehicle: Vec<String>,

    /// CSV table of lights.
    pub lights_csv: Option<PathBuf>,

    /// CSV table of vehicles.
    pub vehicles_csv: Option<PathBuf>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            seed:            DEFAULT_SEED,
            random_lights:   0,
            random_vehicles: 0,
            add_light:       Vec::new(),
            add_vehicle:     Vec::new(),
            lights_csv:      None,
            vehicles_csv:    None,
        }
    }
}

impl ScenarioConfig {
    /// Parse a scenario from TOML text.  CSV paths are left as written.
    pub fn from_toml_str(text: &str) -> ScenarioResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a scenario file.
    ///
    /// Relative CSV paths are resolved against the directory holding `path`.
    pub fn load(path: &Path) -> ScenarioResult<Self> {
        let text = std::fs::read_to_string(path).map_err(ScenarioError::Io)?;
        let mut config = Self::from_toml_str(&text)?;
        if let Some(dir) = path.parent() {
            config.resolve_relative_to(dir);
        }
        Ok(config)
    }

    /// Rewrite relative CSV paths so they are anchored at `dir`.
    pub fn resolve_relative_to(&mut self, dir: &Path) {
        for csv in [&mut self.lights_csv, &mut self.vehicles_csv].into_iter().flatten() {
            if csv.is_relative() {
                *csv = dir.join(&*csv);
            }
        }
    }
}
