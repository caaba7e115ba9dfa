//! Plain data row types written by output backends.

/// One vehicle's state at a render hand-off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleSnapshotRow {
    pub frame:      u64,
    pub tick:       u64,
    pub vehicle_id: u32,
    pub x:          f64,
    pub y:          f64,
    pub heading:    f64,
    pub speed:      f64,
    /// Record name of the behavior (`follower`, `master_cw`, `master_ccw`).
    pub behavior:   &'static str,
}

/// Aggregate figures for one render hand-off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSummaryRow {
    pub frame:                  u64,
    pub tick:                   u64,
    /// Simulated seconds since the previous hand-off.
    pub elapsed_simulated_secs: f64,
    /// Simulated seconds since the run started.
    pub total_simulated_secs:   f64,
    pub vehicle_count:          u64,
    /// Zero for an empty flock.
    pub mean_speed:             f64,
}
