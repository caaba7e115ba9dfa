//! Command-line options.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use bv_scenario::{ScenarioBuilder, ScenarioConfig};
use bv_sim::NeighborSearch;

#[derive(Parser, Debug)]
#[command(name = "headless")]
#[command(about = "Run a braitenberg vehicle flock without a window")]
pub struct Args {
    /// Add a light: "x y intensity".  Repeatable.
    #[arg(long = "add-light", value_name = "RECORD")]
    pub add_light: Vec<String>,

    /// Number of randomly placed lights.
    #[arg(long = "random-lights", value_name = "N")]
    pub random_lights: Option<usize>,

    /// Add a vehicle: "x y heading speed behavior".  Repeatable.
    #[arg(long = "add-vehicle", value_name = "RECORD")]
    pub add_vehicle: Vec<String>,

    /// Number of randomly placed followers.
    #[arg(long = "random-vehicles", value_name = "N")]
    pub random_vehicles: Option<usize>,

    /// TOML scenario file to load.  Command-line records come before the
    /// file's, and command-line counts and seed replace the file's.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Generation seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Wall-clock run length.
    #[arg(long, default_value_t = 10.0, conflicts_with = "ticks")]
    pub seconds: f64,

    /// Run exactly this many ticks instead of a fixed wall-clock time.
    #[arg(long)]
    pub ticks: Option<u64>,

    /// Write trajectories as CSV into this directory.
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Scan every vehicle for neighbours instead of using the spatial index.
    #[arg(long)]
    pub linear_search: bool,
}

impl Args {
    /// Merge the scenario file (if any) with the command-line additions.
    pub fn scenario_builder(&self) -> Result<ScenarioBuilder> {
        let config = match &self.file {
            Some(path) => ScenarioConfig::load(path)
                .with_context(|| format!("loading scenario file {}", path.display()))?,
            None => ScenarioConfig::default(),
        };
        Ok(ScenarioBuilder::from_config(&self.merge(config)))
    }

    /// Overlay the command-line values on a loaded scenario file.
    pub fn merge(&self, mut config: ScenarioConfig) -> ScenarioConfig {
        config.add_light = self.add_light.iter().cloned().chain(config.add_light).collect();
        config.add_vehicle = self.add_vehicle.iter().cloned().chain(config.add_vehicle).collect();
        if let Some(n) = self.random_lights {
            config.random_lights = n;
        }
        if let Some(m) = self.random_vehicles {
            config.random_vehicles = m;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config
    }

    /// `--seconds` as a duration; negative or non-finite values are rejected.
    pub fn run_length(&self) -> Result<Duration> {
        Duration::try_from_secs_f64(self.seconds)
            .map_err(|e| anyhow!("invalid --seconds {}: {e}", self.seconds))
    }

    pub fn search(&self) -> NeighborSearch {
        if self.linear_search {
            NeighborSearch::Linear
        } else {
            NeighborSearch::Indexed
        }
    }
}
