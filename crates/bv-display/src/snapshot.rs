//! The frame handed to a renderer.

use bv_core::{Tick, VehicleId};
use bv_sim::{Flock, FlockObserver};

use crate::{LightDisplay, UnitCircle, VehicleDisplay};

/// Display state of every light and vehicle.
///
/// A snapshot never touches the flock.  It copies what it needs on each
/// render hand-off and owns the only mutable display state, the light pulse
/// phases.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplaySnapshot {
    pub lights:     Vec<LightDisplay>,
    pub vehicles:   Vec<VehicleDisplay>,
    /// Tick of the most recent hand-off.
    pub tick:       Tick,
    /// Number of hand-offs received.
    pub frames:     u64,
    /// Simulated seconds shown so far.
    pub shown_secs: f64,
    circle:         UnitCircle,
}

impl DisplaySnapshot {
    /// Project a flock with every light at its initial phases.
    pub fn capture(flock: &Flock) -> Self {
        let mut snapshot = Self::default();
        snapshot.sync(flock);
        snapshot
    }

    /// Use a different halo polygon resolution.
    pub fn with_circle(mut self, circle: UnitCircle) -> Self {
        self.circle = circle;
        self
    }

    /// Unit circle shared by every halo outline.
    pub fn circle(&self) -> &UnitCircle {
        &self.circle
    }

    /// Copy poses from the authoritative generation and advance every light
    /// pulse by `elapsed_simulated` seconds.
    pub fn advance_display(&mut self, elapsed_simulated: f64, flock: &Flock) {
        self.sync(flock);
        for light in &mut self.lights {
            light.advance(elapsed_simulated);
        }
        self.shown_secs += elapsed_simulated;
    }

    /// Refresh positions and headings.  Phases survive unless the number of
    /// lights changed.
    fn sync(&mut self, flock: &Flock) {
        let sources = flock.lights().sources();
        if self.lights.len() == sources.len() {
            for (display, source) in self.lights.iter_mut().zip(sources) {
                display.sync(source);
            }
        } else {
            self.lights = sources.iter().map(LightDisplay::from_source).collect();
        }

        let vehicles = flock.vehicles();
        if self.vehicles.len() == vehicles.len() {
            for (display, vehicle) in self.vehicles.iter_mut().zip(vehicles) {
                display.sync(vehicle);
            }
        } else {
            self.vehicles = flock
                .iter()
                .map(|(id, v)| VehicleDisplay::new(id, v))
                .collect();
        }
    }

    pub fn vehicle(&self, id: VehicleId) -> Option<&VehicleDisplay> {
        self.vehicles.get(id.index())
    }
}

impl FlockObserver for DisplaySnapshot {
    fn on_render(&mut self, tick: Tick, elapsed_simulated_secs: f64, flock: &Flock) {
        self.advance_display(elapsed_simulated_secs, flock);
        self.tick = tick;
        self.frames += 1;
        tracing::trace!(%tick, frame = self.frames, "display snapshot refreshed");
    }
}
