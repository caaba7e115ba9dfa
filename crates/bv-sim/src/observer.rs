//! Scheduler observer trait for rendering and data collection.

use std::time::Duration;

use bv_core::{SimTime, Tick};

use crate::Flock;

/// Callbacks invoked by the [`Scheduler`][crate::Scheduler] at key points
/// of each tick.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: frame counter
///
/// ```rust,ignore
/// struct FrameCounter(u64);
///
/// impl FlockObserver for FrameCounter {
///     fn on_render(&mut self, _tick: Tick, _elapsed: f64, _flock: &Flock) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait FlockObserver {
    /// Called before the tick reads the clock.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the tick, with the simulated step it applied.
    fn on_tick_end(&mut self, _tick: Tick, _step: Duration) {}

    /// Render hand-off.
    ///
    /// `elapsed_simulated_secs` is the simulated time applied since the
    /// previous hand-off.  `flock` is the freshly published generation and is
    /// read-only for the duration of the call.
    fn on_render(&mut self, _tick: Tick, _elapsed_simulated_secs: f64, _flock: &Flock) {}

    /// Called once when [`Scheduler::run`][crate::Scheduler::run] stops.
    fn on_stop(&mut self, _time: SimTime) {}
}

/// A [`FlockObserver`] that does nothing.
pub struct NoopObserver;

impl FlockObserver for NoopObserver {}

impl<O: FlockObserver + ?Sized> FlockObserver for &mut O {
    fn on_tick_start(&mut self, tick: Tick) {
        (**self).on_tick_start(tick);
    }

    fn on_tick_end(&mut self, tick: Tick, step: Duration) {
        (**self).on_tick_end(tick, step);
    }

    fn on_render(&mut self, tick: Tick, elapsed_simulated_secs: f64, flock: &Flock) {
        (**self).on_render(tick, elapsed_simulated_secs, flock);
    }

    fn on_stop(&mut self, time: SimTime) {
        (**self).on_stop(time);
    }
}

/// Fan every callback out to both observers, left first.
impl<A: FlockObserver, B: FlockObserver> FlockObserver for (A, B) {
    fn on_tick_start(&mut self, tick: Tick) {
        self.0.on_tick_start(tick);
        self.1.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, tick: Tick, step: Duration) {
        self.0.on_tick_end(tick, step);
        self.1.on_tick_end(tick, step);
    }

    fn on_render(&mut self, tick: Tick, elapsed_simulated_secs: f64, flock: &Flock) {
        self.0.on_render(tick, elapsed_simulated_secs, flock);
        self.1.on_render(tick, elapsed_simulated_secs, flock);
    }

    fn on_stop(&mut self, time: SimTime) {
        self.0.on_stop(time);
        self.1.on_stop(time);
    }
}
