//! The vehicle state record.

use bv_core::Vec2;
use bv_core::geo::unit_heading;

use crate::Behavior;

/// One reactive agent.
///
/// `speed` is always the norm of the last computed velocity, so it never goes
/// negative.  `heading` is left as computed (`atan2` range, or whatever the
/// scenario supplied); nothing in the physics relies on it being wrapped.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub(crate) position: Vec2,
    pub(crate) heading:  f64,
    pub(crate) speed:    f64,
    pub(crate) behavior: Behavior,
}

impl Vehicle {
    /// Build a vehicle.  `speed` must be non-negative.
    pub fn new(position: Vec2, heading: f64, speed: f64, behavior: Behavior) -> Self {
        debug_assert!(speed >= 0.0, "vehicle speed must be non-negative, got {speed}");
        Self { position, heading, speed, behavior }
    }

    /// A stationary follower at `position` facing +x.
    pub fn follower_at(position: Vec2) -> Self {
        Self::new(position, 0.0, 0.0, Behavior::Follower)
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[inline]
    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    /// Velocity vector: `(cos heading, sin heading) * speed`.
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        unit_heading(self.heading) * self.speed
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn set_heading(&mut self, heading: f64) {
        self.heading = heading;
    }

    /// Negative inputs are clamped to zero.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed.max(0.0);
    }
}
