//! `bv-vehicle`: vehicle state and the per-tick steering rule.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                          |
//! |--------------|-------------------------------------------------------------------|
//! | [`behavior`] | `Behavior`: follower / clockwise leader / counter-rotating leader |
//! | [`vehicle`]  | `Vehicle`: position, heading, speed, behavior                     |
//! | [`steering`] | `NeighborSummary`, `Vehicle::evolve`, steering constants          |
//!
//! # Design notes
//!
//! `Vehicle::evolve` is a pure function of the vehicle, the light field, and
//! a read-only view of the previous generation.  It never mutates its inputs,
//! so the caller can evolve vehicles in any order (or in parallel) and get
//! the same next generation.

pub mod behavior;
pub mod steering;
pub mod vehicle;


pub use behavior::Behavior;
pub use steering::NeighborSummary;
pub use vehicle::Vehicle;
