//! Simulation time model.
//!
//! # Design
//!
//! Two clocks run side by side:
//!
//! - **Real time** is wall-clock time, measured by the scheduler's `Clock`.
//! - **Simulated time** is the sum of the steps actually applied to the
//!   physics.  Each step is the real time elapsed since the previous tick,
//!   clamped to [`TimingConfig::max_step`].
//!
//! When the host cannot keep up, simulated time falls behind real time
//! instead of taking larger (unstable) steps.  A `Tick` counts physics
//! steps; `SimTime` pairs it with the accumulated simulated duration.

use std::fmt;
use std::time::Duration;

use crate::{BvError, BvResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute physics-step counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimTime ───────────────────────────────────────────────────────────────────

/// Tick counter plus the total simulated time applied so far.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime {
    /// Number of physics steps taken.
    pub tick: Tick,
    /// Sum of every clamped step applied to the physics.
    pub simulated: Duration,
}

impl SimTime {
    /// Record one physics step of length `step`.
    #[inline]
    pub fn advance(&mut self, step: Duration) {
        self.tick = self.tick + 1;
        self.simulated += step;
    }

    /// Total simulated time in seconds.
    #[inline]
    pub fn simulated_secs(&self) -> f64 {
        self.simulated.as_secs_f64()
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3} s simulated)", self.tick, self.simulated_secs())
    }
}

// ── TimingConfig ──────────────────────────────────────────────────────────────

/// Step-size and render-cadence policy for the scheduler.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingConfig {
    /// Largest simulated step applied in one tick.  Default: 10 ms.
    pub max_step: Duration,

    /// Real time that must pass (strictly exceeded) between two render
    /// hand-offs.  Default: 15 ms.
    pub render_interval: Duration,
}

impl TimingConfig {
    /// Clamp a measured real-time interval to the simulated step size.
    #[inline]
    pub fn clamp_step(&self, real_elapsed: Duration) -> Duration {
        real_elapsed.min(self.max_step)
    }

    /// `true` once more than `render_interval` of real time has passed.
    #[inline]
    pub fn render_due(&self, since_last_render: Duration) -> bool {
        since_last_render > self.render_interval
    }

    /// Reject configurations under which the physics could never advance.
    pub fn validate(&self) -> BvResult<()> {
        if self.max_step.is_zero() {
            return Err(BvError::Config(
                "max_step must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            max_step:        Duration::from_millis(10),
            render_interval: Duration::from_millis(15),
        }
    }
}
