//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `vehicle_snapshots` and `frame_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{FrameSummaryRow, OutputResult, VehicleSnapshotRow};

/// Writes trajectories to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS vehicle_snapshots (
                 frame      INTEGER NOT NULL,
                 tick       INTEGER NOT NULL,
                 vehicle_id INTEGER NOT NULL,
                 x          REAL    NOT NULL,
                 y          REAL    NOT NULL,
                 heading    REAL    NOT NULL,
                 speed      REAL    NOT NULL,
                 behavior   TEXT    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS frame_summaries (
                 frame                  INTEGER PRIMARY KEY,
                 tick                   INTEGER NOT NULL,
                 elapsed_simulated_secs REAL    NOT NULL,
                 total_simulated_secs   REAL    NOT NULL,
                 vehicle_count          INTEGER NOT NULL,
                 mean_speed             REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_snapshots(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO vehicle_snapshots \
                 (frame, tick, vehicle_id, x, y, heading, speed, behavior) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.frame as i64,
                    row.tick as i64,
                    row.vehicle_id,
                    row.x,
                    row.y,
                    row.heading,
                    row.speed,
                    row.behavior,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO frame_summaries \
             (frame, tick, elapsed_simulated_secs, total_simulated_secs, vehicle_count, mean_speed) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                row.frame as i64,
                row.tick as i64,
                row.elapsed_simulated_secs,
                row.total_simulated_secs,
                row.vehicle_count as i64,
                row.mean_speed,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
