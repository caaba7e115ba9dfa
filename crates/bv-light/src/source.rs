//! A single point light.

use bv_core::Vec2;

/// Squared distance below which a source's contribution is capped at its raw
/// intensity.  Stops close passes from producing unbounded values.
pub const NEAR_FIELD_RADIUS_SQ: f64 = 1.0;

/// A point emitter with a signed intensity.
///
/// Negative intensity is a "dark" source: it contributes negatively to the
/// field and its gradient term pushes vehicles towards it rather than away.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightSource {
    position:  Vec2,
    intensity: f64,
}

impl LightSource {
    pub fn new(position: Vec2, intensity: f64) -> Self {
        Self { position, intensity }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn set_intensity(&mut self, intensity: f64) {
        self.intensity = intensity;
    }

    /// Inverse-square intensity of this source at `point`.
    ///
    /// Inside the unit near field the raw intensity is returned unchanged.
    #[inline]
    pub fn intensity_at(&self, point: Vec2) -> f64 {
        let r2 = (point - self.position).length_squared();
        if r2 < NEAR_FIELD_RADIUS_SQ {
            return self.intensity;
        }
        self.intensity / r2
    }
}
