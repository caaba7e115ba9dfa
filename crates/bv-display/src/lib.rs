//! `bv-display`: what a renderer needs from a running flock.
//!
//! Nothing here draws.  A [`DisplaySnapshot`] is a [`FlockObserver`]
//! (`bv_sim`) that copies light and vehicle state on each render hand-off and
//! animates the light pulses by the simulated time that passed.
//!
//! | Module       | Contents                                         |
//! |--------------|--------------------------------------------------|
//! | [`light`]    | `logistic`, `LightDisplay`, `Halo`, `UnitCircle` |
//! | [`vehicle`]  | `VehicleDisplay`                                 |
//! | [`snapshot`] | `DisplaySnapshot`                                |
//!
//! [`FlockObserver`]: bv_sim::FlockObserver

pub mod light;
pub mod snapshot;
pub mod vehicle;

#[cfg(test)]
mod tests;

pub use light::{Halo, LightDisplay, UnitCircle, logistic};
pub use snapshot::DisplaySnapshot;
pub use vehicle::VehicleDisplay;
