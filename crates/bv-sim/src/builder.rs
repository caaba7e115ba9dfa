//! Fluent builder for constructing a [`Scheduler`].

use std::time::Duration;

use bv_core::{SimTime, TimingConfig};

use crate::{Clock, Flock, NeighborSearch, Scheduler, SimResult, SystemClock};

/// Fluent builder for [`Scheduler<C>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                         |
/// |-----------------------|---------------------------------|
/// | `.timing(t)`          | `TimingConfig::default()`       |
/// | `.neighbor_search(s)` | whatever the flock already uses |
///
/// # Example
///
/// ```rust,ignore
/// let flock = Flock::from_scenario(ScenarioBuilder::new().random_vehicles(40).build()?);
/// let mut scheduler = SchedulerBuilder::new(flock, SystemClock::new()).build()?;
/// scheduler.run(&mut NoopObserver, &stop);
/// ```
pub struct SchedulerBuilder<C: Clock> {
    flock:  Flock,
    clock:  C,
    timing: TimingConfig,
    search: Option<NeighborSearch>,
}

impl SchedulerBuilder<SystemClock> {
    /// A builder driven by wall-clock time.
    pub fn realtime(flock: Flock) -> Self {
        Self::new(flock, SystemClock::new())
    }
}

impl<C: Clock> SchedulerBuilder<C> {
    pub fn new(flock: Flock, clock: C) -> Self {
        Self {
            flock,
            clock,
            timing: TimingConfig::default(),
            search: None,
        }
    }

    pub fn timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    pub fn neighbor_search(mut self, search: NeighborSearch) -> Self {
        self.search = Some(search);
        self
    }

    /// Validate the timing policy and return a ready-to-run [`Scheduler`].
    ///
    /// The clock is read once here; the first tick measures from this point.
    pub fn build(self) -> SimResult<Scheduler<C>> {
        self.timing.validate()?;

        let mut flock = self.flock;
        if let Some(search) = self.search {
            flock.set_search(search);
        }

        let start = self.clock.elapsed();
        Ok(Scheduler {
            flock,
            clock:        self.clock,
            timing:       self.timing,
            time:         SimTime::default(),
            last_calc:    start,
            last_render:  start,
            since_render: Duration::ZERO,
            renders:      0,
        })
    }
}
