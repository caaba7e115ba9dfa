//! `bv-core`: foundational types for the braitenberg vehicle simulator.
//!
//! This crate is a dependency of every other `bv-*` crate.  It has no `bv-*`
//! dependencies and few external ones (`glam`, `rand`, `rand_distr`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                         |
//! |-----------|--------------------------------------------------|
//! | [`geo`]   | `Vec2`, clamped norms, heading helpers           |
//! | [`ids`]   | `VehicleId`, `LightId`                           |
//! | [`time`]  | `Tick`, `SimTime`, `TimingConfig`                |
//! | [`rng`]   | `SimRng` (seeded, reproducible world generation) |
//! | [`error`] | `BvError`, `BvResult`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{BvError, BvResult};
pub use geo::Vec2;
pub use ids::{LightId, VehicleId};
pub use rng::{DEFAULT_SEED, SimRng};
pub use time::{SimTime, Tick, TimingConfig};
