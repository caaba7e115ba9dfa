//! `bv-output`: trajectory writers for the braitenberg vehicle simulator.
//!
//! Two backends are provided:
//!
//! | Feature  | Backend | Files created                                  |
//! |----------|---------|------------------------------------------------|
//! | *(none)* | CSV     | `vehicle_snapshots.csv`, `frame_summaries.csv` |
//! | `sqlite` | SQLite  | `output.db`                                    |
//!
//! Both implement [`OutputWriter`] and are driven by [`TrackObserver`], which
//! implements `bv_sim::FlockObserver` and writes one frame per render
//! hand-off.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bv_output::{CsvWriter, TrackObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TrackObserver::new(writer);
//! scheduler.run(&mut obs, &stop);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TrackObserver;
pub use row::{FrameSummaryRow, VehicleSnapshotRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
