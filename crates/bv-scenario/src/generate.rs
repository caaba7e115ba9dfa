//! Seeded random world generation.
//!
//! | Population   | Position                | Other fields                                  |
//! |--------------|-------------------------|-----------------------------------------------|
//! | `n` lights   | `N(0, 2·√n)` per axis   | intensity `U[1, 5]`                           |
//! | `m` vehicles | `N(0, 1.5·√m)` per axis | heading `U[0, 2π)`, speed `U[0, 3]`, follower |
//!
//! Each item draws `x`, then `y`, then its remaining fields, so the sequence
//! consumed from the RNG is fixed for a given count.

use std::f64::consts::TAU;

use bv_core::{SimRng, Vec2};
use bv_light::LightSource;
use bv_vehicle::{Behavior, Vehicle};

const LIGHT_SPREAD: f64 = 2.0;
const LIGHT_INTENSITY_MIN: f64 = 1.0;
const LIGHT_INTENSITY_MAX: f64 = 5.0;

const VEHICLE_SPREAD: f64 = 1.5;
const VEHICLE_SPEED_MAX: f64 = 3.0;

/// Generate `n` lights scattered around the origin.
pub fn generate_lights(n: usize, rng: &mut SimRng) -> Vec<LightSource> {
    let spread = LIGHT_SPREAD * (n as f64).sqrt();
    (0..n)
        .map(|_| {
            let x = rng.normal(spread);
            let y = rng.normal(spread);
            let intensity = rng.gen_range(LIGHT_INTENSITY_MIN..=LIGHT_INTENSITY_MAX);
            LightSource::new(Vec2::new(x, y), intensity)
        })
        .collect()
}

/// Generate `m` followers scattered around the origin.
pub fn generate_vehicles(m: usize, rng: &mut SimRng) -> Vec<Vehicle> {
    let spread = VEHICLE_SPREAD * (m as f64).sqrt();
    (0..m)
        .map(|_| {
            let x = rng.normal(spread);
            let y = rng.normal(spread);
            let heading = rng.gen_range(0.0..TAU);
            let speed = rng.gen_range(0.0..=VEHICLE_SPEED_MAX);
            Vehicle::new(Vec2::new(x, y), heading, speed, Behavior::Follower)
        })
        .collect()
}
