//! The real-time tick loop.

use std::time::Duration;

use bv_core::{SimTime, Tick, TimingConfig};

use crate::{Clock, Flock, FlockObserver, StopToken};

/// What one call to [`Scheduler::tick`] did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickReport {
    pub tick: Tick,
    /// Simulated step applied (real elapsed time, clamped).
    pub step: Duration,
    /// Real time that passed since the previous tick, before clamping.
    pub real_elapsed: Duration,
    /// Whether this tick handed a frame to the observer.
    pub rendered: bool,
}

/// Drives a [`Flock`] from a [`Clock`].
///
/// Each tick:
///
/// 1. Read the clock.  The step is the real time since the previous tick,
///    clamped to `timing.max_step`; it is also added to the simulated time
///    accumulated since the last render.
/// 2. Evolve the flock by that step and publish the new generation.
/// 3. If more than `timing.render_interval` of real time has passed since the
///    last render, call [`FlockObserver::on_render`] with the accumulated
///    simulated time, then reset the accumulator.
///
/// When the host falls behind, simulated time runs slower than real time
/// instead of taking larger steps.
///
/// Create via [`SchedulerBuilder`][crate::SchedulerBuilder].
pub struct Scheduler<C: Clock> {
    pub(crate) flock:        Flock,
    pub(crate) clock:        C,
    pub(crate) timing:       TimingConfig,
    pub(crate) time:         SimTime,
    pub(crate) last_calc:    Duration,
    pub(crate) last_render:  Duration,
    pub(crate) since_render: Duration,
    pub(crate) renders:      u64,
}

impl<C: Clock> Scheduler<C> {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn flock(&self) -> &Flock {
        &self.flock
    }

    /// Mutable access between ticks.
    pub fn flock_mut(&mut self) -> &mut Flock {
        &mut self.flock
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Number of render hand-offs so far.
    pub fn renders(&self) -> u64 {
        self.renders
    }

    pub fn into_flock(self) -> Flock {
        self.flock
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Run one tick.
    pub fn tick<O: FlockObserver>(&mut self, observer: &mut O) -> TickReport {
        let tick = self.time.tick;
        observer.on_tick_start(tick);

        let now = self.clock.elapsed();
        let real_elapsed = now.saturating_sub(self.last_calc);
        let step = self.timing.clamp_step(real_elapsed);
        if step < real_elapsed {
            tracing::trace!(%tick, ?real_elapsed, ?step, "step clamped");
        }
        self.since_render += step;

        self.flock.step(step.as_secs_f64());

        let rendered = self.timing.render_due(now.saturating_sub(self.last_render));
        if rendered {
            let elapsed = self.since_render.as_secs_f64();
            tracing::debug!(%tick, elapsed_simulated_secs = elapsed, "render hand-off");
            observer.on_render(tick, elapsed, &self.flock);
            self.since_render = Duration::ZERO;
            self.last_render = now;
            self.renders += 1;
        }

        self.last_calc = now;
        self.time.advance(step);
        observer.on_tick_end(tick, step);

        TickReport { tick, step, real_elapsed, rendered }
    }

    /// Run exactly `n` ticks.  Useful for tests and incremental stepping.
    pub fn run_ticks<O: FlockObserver>(&mut self, n: u64, observer: &mut O) -> SimTime {
        for _ in 0..n {
            self.tick(observer);
        }
        self.time
    }

    /// Tick until `stop` is signalled, then call [`FlockObserver::on_stop`].
    pub fn run<O: FlockObserver>(&mut self, observer: &mut O, stop: &StopToken) -> SimTime {
        while !stop.is_stopped() {
            self.tick(observer);
        }
        tracing::info!(
            ticks = self.time.tick.0,
            simulated_secs = self.time.simulated_secs(),
            renders = self.renders,
            "simulation stopped",
        );
        observer.on_stop(self.time);
        self.time
    }

    /// The tick the next call to [`tick`](Self::tick) will run.
    pub fn current_tick(&self) -> Tick {
        self.time.tick
    }
}
