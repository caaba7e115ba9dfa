//! Superposition of all light sources.

use bv_core::geo::clamped_norm;
use bv_core::{LightId, Vec2};

use crate::LightSource;

/// Radius floor used when normalising the source-to-point direction.
const MIN_GRADIENT_RADIUS: f64 = 0.1;

/// Owns every light in the world and answers field queries by summing the
/// contribution of each source.
///
/// Summation is commutative, so the order of `sources` does not affect any
/// query beyond floating-point rounding.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightField {
    sources: Vec<LightSource>,
}

impl LightField {
    pub fn new(sources: Vec<LightSource>) -> Self {
        Self { sources }
    }

    /// A field with no lights: zero intensity and zero gradient everywhere.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn sources(&self) -> &[LightSource] {
        &self.sources
    }

    pub fn get(&self, id: LightId) -> Option<&LightSource> {
        self.sources.get(id.index())
    }

    /// Mutable access for explicit setter calls between runs.
    pub fn get_mut(&mut self, id: LightId) -> Option<&mut LightSource> {
        self.sources.get_mut(id.index())
    }

    /// Iterator over `(LightId, &LightSource)` in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (LightId, &LightSource)> + '_ {
        self.sources
            .iter()
            .enumerate()
            .map(|(i, s)| (LightId(i as u32), s))
    }

    /// Total intensity at `point`.
    pub fn intensity_at(&self, point: Vec2) -> f64 {
        self.sources.iter().map(|s| s.intensity_at(point)).sum()
    }

    /// Steering vector at `point`.
    ///
    /// Each source contributes the unit direction from the source to `point`
    /// (radius floored at 0.1) scaled by that source's intensity at `point`.
    /// This is a hand-tuned phototaxis term, not the analytic gradient of
    /// [`intensity_at`](Self::intensity_at).
    pub fn gradient_at(&self, point: Vec2) -> Vec2 {
        let mut sum = Vec2::ZERO;
        for source in &self.sources {
            let r = point - source.position();
            let radius = clamped_norm(r, MIN_GRADIENT_RADIUS);
            sum += r / radius * source.intensity_at(point);
        }
        sum
    }
}

impl From<Vec<LightSource>> for LightField {
    fn from(sources: Vec<LightSource>) -> Self {
        Self::new(sources)
    }
}
