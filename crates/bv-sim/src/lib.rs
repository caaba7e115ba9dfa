//! `bv-sim`: the runtime that advances a flock in real time.
//!
//! # Tick loop
//!
//! ```text
//! loop until stopped:
//!   ① Clock  : step = min(real time since last tick, max_step)
//!   ② Evolve : every vehicle of the write target is computed from the
//!              authoritative generation (parallel with `parallel`)
//!   ③ Publish: flip the double buffer
//!   ④ Render : if > render_interval of real time since the last hand-off,
//!              call on_render with the simulated time accumulated since
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                              |
//! |------------|-----------------------------------------------------|
//! | `parallel` | Runs the evolve phase on Rayon's thread pool.       |
//! | `serde`    | Adds `Serialize`/`Deserialize` to `NeighborSearch`. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bv_scenario::ScenarioBuilder;
//! use bv_sim::{Flock, NoopObserver, SchedulerBuilder, StopToken};
//!
//! let scenario = ScenarioBuilder::new().random_lights(4).random_vehicles(40).build()?;
//! let mut scheduler = SchedulerBuilder::realtime(Flock::from(scenario)).build()?;
//! scheduler.run(&mut NoopObserver, &StopToken::new());
//! ```

pub mod builder;
pub mod clock;
pub mod error;
pub mod flock;
pub mod generation;
pub mod neighbors;
pub mod observer;
pub mod scheduler;
pub mod stop;

#[cfg(test)]
mod tests;

pub use builder::SchedulerBuilder;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{SimError, SimResult};
pub use flock::Flock;
pub use generation::Generations;
pub use neighbors::{NeighborIndex, NeighborSearch};
pub use observer::{FlockObserver, NoopObserver};
pub use scheduler::{Scheduler, TickReport};
pub use stop::StopToken;
