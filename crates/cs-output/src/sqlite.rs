//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `trajectories` and `waypoints`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{OutputResult, TrajectoryRow, WaypointRow};

/// Writes run output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS trajectories (
                 courier_id INTEGER NOT NULL,
                 courier    TEXT    NOT NULL,
                 tick       INTEGER NOT NULL,
                 x          REAL    NOT NULL,
                 y          REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS waypoints (
                 courier_id     INTEGER NOT NULL,
                 courier        TEXT    NOT NULL,
                 seq            INTEGER NOT NULL,
                 x              REAL    NOT NULL,
                 y              REAL    NOT NULL,
                 departure_time REAL,
                 label          TEXT,
                 marker         TEXT    NOT NULL,
                 color          TEXT    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_waypoints(&mut self, rows: &[WaypointRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO waypoints \
                 (courier_id, courier, seq, x, y, departure_time, label, marker, color) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.courier_id,
                    row.courier,
                    row.seq,
                    row.x,
                    row.y,
                    row.departure_time,
                    row.label,
                    row.marker.as_str(),
                    row.color,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_trajectory(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO trajectories (courier_id, courier, tick, x, y) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.courier_id, row.courier, row.tick, row.x, row.y])?;
            }
        }
        tx.commit()?;
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
