//! Light projection: color, pulse phases, and halo geometry.

use std::f64::consts::TAU;

use bv_core::Vec2;
use bv_light::LightSource;

/// Initial pulse phases of every light.
pub const INITIAL_PHASES: [f64; 3] = [0.0, 0.33, 0.66];

/// A phase past this value wraps back to zero.
pub const PHASE_PERIOD: f64 = 1.0;

/// Radius of a halo at full phase.
pub const MAX_HALO_RADIUS: f64 = 0.5;

const GREEN: f64 = 0.2;
const BASE_ALPHA: f64 = 0.2;

/// Standard logistic function `1 / (1 + e^-x)`.
#[inline]
pub fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// One expanding (positive light) or contracting (negative light) ring.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Halo {
    pub radius: f64,
    pub alpha:  f64,
}

/// What a renderer needs to draw one light.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightDisplay {
    pub position:  Vec2,
    pub intensity: f64,
    /// RGBA.  Red grows with intensity, blue with its negation.
    pub color:     [f64; 4],
    pub phases:    [f64; 3],
}

impl LightDisplay {
    pub fn from_source(source: &LightSource) -> Self {
        Self {
            position:  source.position(),
            intensity: source.intensity(),
            color:     light_color(source.intensity()),
            phases:    INITIAL_PHASES,
        }
    }

    /// Follow edits to the underlying source without resetting the pulse.
    pub fn sync(&mut self, source: &LightSource) {
        self.position = source.position();
        if self.intensity != source.intensity() {
            self.intensity = source.intensity();
            self.color = light_color(self.intensity);
        }
    }

    /// Move every phase forward by `elapsed` simulated seconds.
    pub fn advance(&mut self, elapsed: f64) {
        for phase in &mut self.phases {
            *phase += elapsed;
            if *phase > PHASE_PERIOD {
                *phase = 0.0;
            }
        }
    }

    /// One halo per phase.
    pub fn halos(&self) -> [Halo; 3] {
        self.phases.map(|phase| halo(self.intensity, phase))
    }
}

fn light_color(intensity: f64) -> [f64; 4] {
    [logistic(intensity), GREEN, logistic(-intensity), BASE_ALPHA]
}

fn halo(intensity: f64, phase: f64) -> Halo {
    let t = phase / PHASE_PERIOD;
    if intensity > 0.0 {
        Halo { radius: t * MAX_HALO_RADIUS, alpha: 1.0 - t }
    } else {
        Halo { radius: (1.0 - t) * MAX_HALO_RADIUS, alpha: t }
    }
}

// ── Unit circle ───────────────────────────────────────────────────────────────

/// Precomputed unit-circle vertices for drawing halos as polygons.
///
/// Built once by the owner of a [`DisplaySnapshot`](crate::DisplaySnapshot)
/// and shared by every light.
#[derive(Clone, Debug, PartialEq)]
pub struct UnitCircle {
    points: Vec<Vec2>,
}

impl UnitCircle {
    pub const DEFAULT_SEGMENTS: usize = 60;

    pub fn new(segments: usize) -> Self {
        let points = (0..segments)
            .map(|i| Vec2::from_angle(TAU * i as f64 / segments as f64))
            .collect();
        Self { points }
    }

    pub fn segments(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Closed outline of a halo around `center`: the first vertex repeats at
    /// the end.
    pub fn outline(&self, center: Vec2, halo: Halo) -> Vec<Vec2> {
        let mut outline: Vec<Vec2> = self
            .points
            .iter()
            .map(|&p| center + p * halo.radius)
            .collect();
        if let Some(&first) = outline.first() {
            outline.push(first);
        }
        outline
    }
}

impl Default for UnitCircle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEGMENTS)
    }
}
