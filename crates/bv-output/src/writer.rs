//! The `OutputWriter` trait implemented by all backend writers.

use crate::{FrameSummaryRow, OutputResult, VehicleSnapshotRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors are returned to the caller; [`TrackObserver`](crate::TrackObserver)
/// stores them and exposes the first through `take_error`.
pub trait OutputWriter {
    /// Write every vehicle of one frame.
    fn write_snapshots(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()>;

    /// Write one frame summary row.
    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
