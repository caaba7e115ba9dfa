//! Candidate-neighbour search.
//!
//! The steering rule only considers peers within
//! [`NEIGHBOR_RADIUS`](bv_vehicle::steering::NEIGHBOR_RADIUS).  With
//! [`NeighborSearch::Indexed`] an R-tree (via `rstar`) is bulk-loaded from the
//! authoritative generation once per step and each vehicle visits only the
//! peers it returns.  Candidates come back in ascending slot order, the same
//! order a linear scan visits them, so both modes accumulate the same
//! floating-point sums.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use bv_core::Vec2;
use bv_vehicle::Vehicle;

/// How each vehicle finds its candidate neighbours.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NeighborSearch {
    /// Visit every vehicle.  O(N²) per step.
    Linear,
    /// Query a per-step R-tree.
    #[default]
    Indexed,
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct VehicleEntry {
    point: [f64; 2],
    slot:  usize,
}

impl RTreeObject for VehicleEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for VehicleEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── NeighborIndex ─────────────────────────────────────────────────────────────

/// Spatial index over one generation.
pub struct NeighborIndex {
    tree: RTree<VehicleEntry>,
}

impl NeighborIndex {
    pub fn build(vehicles: &[Vehicle]) -> Self {
        let entries = vehicles
            .iter()
            .enumerate()
            .map(|(slot, v)| VehicleEntry { point: v.position().to_array(), slot })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    /// Slots of every vehicle within `radius` of `center`, ascending.
    ///
    /// The query radius is padded by a relative 1e-9 so rounding can only add
    /// candidates, never drop one; the steering rule applies the exact cut.
    pub fn candidates(&self, center: Vec2, radius: f64) -> Vec<usize> {
        let padded = radius * (1.0 + 1e-9);
        let mut slots: Vec<usize> = self
            .tree
            .locate_within_distance(center.to_array(), padded * padded)
            .map(|e| e.slot)
            .collect();
        slots.sort_unstable();
        slots
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
