//! Whitespace-separated textual records.
//!
//! # Formats
//!
//! ```text
//! light:   x y intensity
//! vehicle: x y heading speed behavior
//! ```
//!
//! Numbers are any finite `f64` literal.  `behavior` is one of `follower`,
//! `master_cw`, `master_ccw`.  Any other field count, a non-numeric or
//! non-finite number, a negative speed, or an unknown behavior name fails the
//! whole record.

use bv_core::Vec2;
use bv_light::LightSource;
use bv_vehicle::{Behavior, Vehicle};

use crate::{ScenarioError, ScenarioResult};

/// Parse `"x y intensity"` into a [`LightSource`].
pub fn parse_light_record(record: &str) -> ScenarioResult<LightSource> {
    let fields = split_fields::<3>(record)?;
    let x = parse_number(record, "x", fields[0])?;
    let y = parse_number(record, "y", fields[1])?;
    let intensity = parse_number(record, "intensity", fields[2])?;
    Ok(LightSource::new(Vec2::new(x, y), intensity))
}

/// Parse `"x y heading speed behavior"` into a [`Vehicle`].
pub fn parse_vehicle_record(record: &str) -> ScenarioResult<Vehicle> {
    let fields = split_fields::<5>(record)?;
    let x = parse_number(record, "x", fields[0])?;
    let y = parse_number(record, "y", fields[1])?;
    let heading = parse_number(record, "heading", fields[2])?;
    let speed = parse_speed(record, fields[3])?;
    let behavior: Behavior = fields[4].parse()?;
    Ok(Vehicle::new(Vec2::new(x, y), heading, speed, behavior))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn split_fields<const N: usize>(record: &str) -> ScenarioResult<[&str; N]> {
    let fields: Vec<&str> = record.split_whitespace().collect();
    <[&str; N]>::try_from(fields.as_slice()).map_err(|_| {
        ScenarioError::record(
            record,
            format!("expected {N} whitespace-separated fields, found {}", fields.len()),
        )
    })
}

pub(crate) fn parse_number(record: &str, name: &str, field: &str) -> ScenarioResult<f64> {
    let value: f64 = field
        .parse()
        .map_err(|_| ScenarioError::record(record, format!("{name}: {field:?} is not a number")))?;
    if !value.is_finite() {
        return Err(ScenarioError::record(record, format!("{name}: {field:?} is not finite")));
    }
    Ok(value)
}

pub(crate) fn parse_speed(record: &str, field: &str) -> ScenarioResult<f64> {
    let speed = parse_number(record, "speed", field)?;
    if speed < 0.0 {
        return Err(ScenarioError::record(record, format!("speed {speed} is negative")));
    }
    Ok(speed)
}
