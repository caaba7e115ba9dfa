//! `bv-scenario`: everything needed to assemble the initial world.
//!
//! # Crate layout
//!
//! | Module       | Contents                                        |
//! |--------------|-------------------------------------------------|
//! | [`record`]   | `parse_light_record`, `parse_vehicle_record`    |
//! | [`loader`]   | CSV loaders for light and vehicle tables        |
//! | [`generate`] | `generate_lights`, `generate_vehicles` (seeded) |
//! | [`config`]   | `ScenarioConfig`: TOML scenario files           |
//! | [`scenario`] | `Scenario`, `ScenarioBuilder`                   |
//! | [`error`]    | `ScenarioError`, `ScenarioResult<T>`            |
//!
//! # Error boundary
//!
//! All fallible work in the simulator happens here.  `ScenarioBuilder::build`
//! either returns a complete `Scenario` or an error; a malformed record, an
//! unknown behavior name, or an unreadable file never yields a partial world.

pub mod config;
pub mod error;
pub mod generate;
pub mod loader;
pub mod record;
pub mod scenario;


pub use config::ScenarioConfig;
pub use error::{ScenarioError, ScenarioResult};
pub use generate::{generate_lights, generate_vehicles};
pub use loader::{load_lights_csv, load_lights_reader, load_vehicles_csv, load_vehicles_reader};
pub use record::{parse_light_record, parse_vehicle_record};
pub use scenario::{Scenario, ScenarioBuilder};
