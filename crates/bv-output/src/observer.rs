//! `TrackObserver<W>`: bridges `FlockObserver` to an `OutputWriter`.

use bv_core::{SimTime, Tick};
use bv_sim::{Flock, FlockObserver};

use crate::row::{FrameSummaryRow, VehicleSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`FlockObserver`] that records every vehicle at render hand-offs.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `scheduler.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct TrackObserver<W: OutputWriter> {
    writer:          W,
    /// Record every `interval`-th hand-off.
    interval:        u64,
    hand_offs:       u64,
    frames:          u64,
    total_simulated: f64,
    last_error:      Option<OutputError>,
}

impl<W: OutputWriter> TrackObserver<W> {
    /// Record every render hand-off.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            interval:        1,
            hand_offs:       0,
            frames:          0,
            total_simulated: 0.0,
            last_error:      None,
        }
    }

    /// Record only every `n`-th hand-off.  `0` is treated as `1`.
    pub fn every(mut self, n: u64) -> Self {
        self.interval = n.max(1);
        self
    }

    /// Number of frames written so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer now instead of waiting for `on_stop`.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                tracing::warn!(error = %e, "trajectory output failed");
                self.last_error = Some(e);
            }
        }
    }

    fn write_frame(&mut self, tick: Tick, elapsed_simulated_secs: f64, flock: &Flock) {
        let frame = self.frames;
        let rows: Vec<VehicleSnapshotRow> = flock
            .iter()
            .map(|(id, v)| VehicleSnapshotRow {
                frame,
                tick:       tick.0,
                vehicle_id: id.0,
                x:          v.position().x,
                y:          v.position().y,
                heading:    v.heading(),
                speed:      v.speed(),
                behavior:   v.behavior().as_str(),
            })
            .collect();

        let vehicle_count = rows.len() as u64;
        let mean_speed = if rows.is_empty() {
            0.0
        } else {
            rows.iter().map(|r| r.speed).sum::<f64>() / rows.len() as f64
        };

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }

        let summary = FrameSummaryRow {
            frame,
            tick: tick.0,
            elapsed_simulated_secs,
            total_simulated_secs: self.total_simulated,
            vehicle_count,
            mean_speed,
        };
        let result = self.writer.write_frame_summary(&summary);
        self.store_err(result);

        self.frames += 1;
    }
}

impl<W: OutputWriter> FlockObserver for TrackObserver<W> {
    fn on_render(&mut self, tick: Tick, elapsed_simulated_secs: f64, flock: &Flock) {
        self.total_simulated += elapsed_simulated_secs;
        let due = self.hand_offs % self.interval == 0;
        self.hand_offs += 1;
        if due {
            self.write_frame(tick, elapsed_simulated_secs, flock);
        }
    }

    fn on_stop(&mut self, _time: SimTime) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
