//! The per-tick steering and flocking rule.
//!
//! # One tick for one vehicle
//!
//! ```text
//! summary  = NeighborSummary::gather(self, neighbours)
//! velocity = match behavior {
//!     Follower  => 0.8·v + cohesion/2 + alignment/10 + field.gradient_at(p) + repulsion
//!     LeaderCw  => v
//!     LeaderCcw => rotate(v, 0.5·dt)
//! }
//! position += dt · velocity
//! speed     = |velocity|
//! heading   = atan2(velocity)   only when speed > 0.2
//! ```

use bv_core::Vec2;
use bv_core::geo::{clamped_norm, heading_of};
use bv_light::LightField;

use crate::{Behavior, Vehicle};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Peers closer than this are taken to be the vehicle itself.
pub const SELF_EPSILON: f64 = 0.01;

/// Peers farther than this are ignored.
pub const NEIGHBOR_RADIUS: f64 = 20.0;

/// Peers closer than this push the vehicle away.
pub const REPULSION_RADIUS: f64 = 4.0;

/// Distance floor for the inverse-square repulsion.
pub const MIN_REPULSION_DISTANCE: f64 = 0.1;

/// Every peer's offset is divided by this before averaging.
pub const PEER_PULL_DIVISOR: f64 = 4.0;

/// Extra offset multiplier applied to leaders on top of the peer pull.
pub const LEADER_PULL: f64 = 10.0;

/// Fraction of the previous velocity a follower keeps each tick.
pub const FOLLOWER_DAMPING: f64 = 0.8;

/// Time constant (s) for closing the gap to the neighbourhood centre.
pub const COHESION_TIME_CONSTANT: f64 = 2.0;

/// Time constant (ticks) for matching the neighbourhood velocity.
pub const ALIGNMENT_TIME_CONSTANT: f64 = 10.0;

/// Turn rate (rad/s) of a counter-rotating leader.
pub const CCW_TURN_RATE: f64 = 0.5;

/// Below this speed the heading is frozen to avoid jitter.
pub const HEADING_LOCK_SPEED: f64 = 0.2;

// ── NeighborSummary ───────────────────────────────────────────────────────────

/// What a vehicle learns from one pass over its neighbours.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct NeighborSummary {
    /// Number of peers inside the locality radius (self excluded).
    pub count: usize,

    /// Mean weighted offset towards the peers.  Zero when `count == 0`.
    pub cohesion: Vec2,

    /// Mean peer velocity.  Zero when `count == 0`.
    pub alignment: Vec2,

    /// Summed inverse-square push away from close peers.  Not averaged.
    pub repulsion: Vec2,
}

impl NeighborSummary {
    /// Aggregate cohesion, alignment, and repulsion for `me` over `peers`.
    ///
    /// `peers` may contain `me` itself; anything within [`SELF_EPSILON`] is
    /// skipped.
    pub fn gather<'a, I>(me: &Vehicle, peers: I) -> Self
    where
        I: IntoIterator<Item = &'a Vehicle>,
    {
        let mut summary = NeighborSummary::default();

        for peer in peers {
            let r = peer.position - me.position;
            let distance = r.length();

            if distance < SELF_EPSILON || distance > NEIGHBOR_RADIUS {
                continue;
            }

            summary.count += 1;

            summary.cohesion += r / PEER_PULL_DIVISOR;
            if peer.behavior.is_leader() {
                summary.cohesion += r * LEADER_PULL;
            }

            summary.alignment += peer.velocity();

            summary.repulsion += repulsion_from(r);
        }

        if summary.count > 0 {
            let n = summary.count as f64;
            summary.cohesion /= n;
            summary.alignment /= n;
        }

        summary
    }
}

/// Repulsion felt from a peer at offset `r` (peer minus self).
///
/// Zero at or beyond [`REPULSION_RADIUS`]; otherwise `-r / max(|r|, 0.1)²`.
pub fn repulsion_from(r: Vec2) -> Vec2 {
    let distance = r.length();
    if distance >= REPULSION_RADIUS {
        return Vec2::ZERO;
    }
    let d = clamped_norm(r, MIN_REPULSION_DISTANCE);
    -(r / d.powi(2))
}

// ── Evolution ────────────────────────────────────────────────────────────────

impl Vehicle {
    /// Next velocity for this vehicle given its neighbourhood.
    pub fn steer(&self, dt: f64, field: &LightField, summary: &NeighborSummary) -> Vec2 {
        let old = self.velocity();

        match self.behavior {
            Behavior::Follower => {
                old * FOLLOWER_DAMPING
                    + summary.cohesion / COHESION_TIME_CONSTANT
                    + summary.alignment / ALIGNMENT_TIME_CONSTANT
                    + field.gradient_at(self.position)
                    + summary.repulsion
            }
            Behavior::LeaderCw => old,
            Behavior::LeaderCcw => Vec2::from_angle(CCW_TURN_RATE * dt).rotate(old),
        }
    }

    /// This vehicle's state one step of `dt` seconds later.
    ///
    /// `peers` is the previous generation (it may include `self`).  Nothing
    /// is mutated; the caller writes the result into the next generation.
    pub fn evolve<'a, I>(&self, dt: f64, field: &LightField, peers: I) -> Vehicle
    where
        I: IntoIterator<Item = &'a Vehicle>,
    {
        let summary = NeighborSummary::gather(self, peers);
        let velocity = self.steer(dt, field, &summary);
        self.integrate(dt, velocity)
    }

    /// Apply `velocity` for `dt` seconds.
    pub fn integrate(&self, dt: f64, velocity: Vec2) -> Vehicle {
        let speed = velocity.length();
        let heading = if speed > HEADING_LOCK_SPEED {
            heading_of(velocity)
        } else {
            self.heading
        };

        Vehicle {
            position: self.position + dt * velocity,
            heading,
            speed,
            behavior: self.behavior,
        }
    }
}
