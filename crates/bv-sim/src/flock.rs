//! The simulated world: lights plus a double-buffered population.

use bv_core::VehicleId;
use bv_light::LightField;
use bv_scenario::Scenario;
use bv_vehicle::Vehicle;
use bv_vehicle::steering::NEIGHBOR_RADIUS;

use crate::{Generations, NeighborIndex, NeighborSearch};

/// Lights and vehicles, stepped one generation at a time.
///
/// Every vehicle of the next generation is computed from the authoritative
/// generation alone, so the update order (and, with the `parallel` feature,
/// thread scheduling) has no effect on the result.
#[derive(Clone, Debug)]
pub struct Flock {
    lights:      LightField,
    generations: Generations,
    search:      NeighborSearch,
}

impl Flock {
    pub fn new(lights: LightField, vehicles: Vec<Vehicle>) -> Self {
        Self {
            lights,
            generations: Generations::new(vehicles),
            search: NeighborSearch::default(),
        }
    }

    pub fn from_scenario(scenario: Scenario) -> Self {
        Self::new(scenario.lights, scenario.vehicles)
    }

    /// Choose how candidate neighbours are found.
    pub fn with_search(mut self, search: NeighborSearch) -> Self {
        self.search = search;
        self
    }

    pub fn set_search(&mut self, search: NeighborSearch) {
        self.search = search;
    }

    pub fn search(&self) -> NeighborSearch {
        self.search
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn lights(&self) -> &LightField {
        &self.lights
    }

    /// Mutable light access for edits between steps.
    pub fn lights_mut(&mut self) -> &mut LightField {
        &mut self.lights
    }

    /// The authoritative generation, in slot order.
    pub fn vehicles(&self) -> &[Vehicle] {
        self.generations.current()
    }

    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.generations.current().get(id.index())
    }

    /// Edit a vehicle of the authoritative generation between steps.
    pub fn vehicle_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
        self.generations.current_mut().get_mut(id.index())
    }

    /// Iterator over `(VehicleId, &Vehicle)` in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (VehicleId, &Vehicle)> + '_ {
        self.generations
            .current()
            .iter()
            .enumerate()
            .map(|(i, v)| (VehicleId(i as u32), v))
    }

    pub fn len(&self) -> usize {
        self.generations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    pub fn generations(&self) -> &Generations {
        &self.generations
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance every vehicle by `dt` seconds and publish the new generation.
    pub fn step(&mut self, dt: f64) {
        let lights = &self.lights;
        let (current, next) = self.generations.split();

        match self.search {
            NeighborSearch::Linear => {
                evolve_into(next, |slot| current[slot].evolve(dt, lights, current));
            }
            NeighborSearch::Indexed => {
                let index = NeighborIndex::build(current);
                evolve_into(next, |slot| {
                    let me = &current[slot];
                    let candidates = index.candidates(me.position(), NEIGHBOR_RADIUS);
                    me.evolve(dt, lights, candidates.iter().map(|&j| &current[j]))
                });
            }
        }

        self.generations.flip();
    }
}

impl From<Scenario> for Flock {
    fn from(scenario: Scenario) -> Self {
        Flock::from_scenario(scenario)
    }
}

/// Fill every slot of `next` with `evolve(slot)`.
fn evolve_into<F>(next: &mut [Vehicle], evolve: F)
where
    F: Fn(usize) -> Vehicle + Sync,
{
    #[cfg(not(feature = "parallel"))]
    {
        for (slot, out) in next.iter_mut().enumerate() {
            *out = evolve(slot);
        }
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        next.par_iter_mut()
            .enumerate()
            .for_each(|(slot, out)| *out = evolve(slot));
    }
}
