//! Planar vector type and the small amount of geometry the simulation needs.
//!
//! World coordinates are unitless `f64` metres-ish; nothing in the model is
//! tied to physical units.  `Vec2` is glam's `DVec2` so callers get the full
//! operator set (`+`, `-`, scalar `*` and `/`, `length`, `dot`, `rotate`).

pub use glam::DVec2 as Vec2;

/// Euclidean length of `v`, floored at `min`.
///
/// Every inverse-distance term in the model divides by this instead of the
/// raw length so coincident points never produce a division by zero.
#[inline]
pub fn clamped_norm(v: Vec2, min: f64) -> f64 {
    v.length().max(min)
}

/// Unit vector pointing along `heading` (radians, counter-clockwise from +x).
#[inline]
pub fn unit_heading(heading: f64) -> Vec2 {
    Vec2::new(heading.cos(), heading.sin())
}

/// Heading of `v` in radians, in `(-π, π]`.
#[inline]
pub fn heading_of(v: Vec2) -> f64 {
    v.y.atan2(v.x)
}

/// Wrap an angle into `[0, 2π)`.  For display only; the physics never
/// normalises headings.
#[inline]
pub fn wrap_angle(angle: f64) -> f64 {
    angle.rem_euclid(std::f64::consts::TAU)
}
