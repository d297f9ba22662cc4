//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `trace`, `passenger_times`, and `summary`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{OutputResult, PassengerRow, SummaryRow, TraceRow};

/// Writes simulation output to an SQLite database.
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
             CREATE TABLE IF NOT EXISTS trace (
                 time_secs   INTEGER NOT NULL,
                 floor       INTEGER NOT NULL,
                 direction   TEXT    NOT NULL,
                 occupants   TEXT    NOT NULL,
                 floor_queue TEXT    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS passenger_times (
                 person_id   INTEGER PRIMARY KEY,
                 wait_secs   INTEGER NOT NULL,
                 travel_secs INTEGER
             );
             CREATE TABLE IF NOT EXISTS summary (
                 metric TEXT PRIMARY KEY,
                 value  TEXT NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_trace(&mut self, row: &TraceRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO trace (time_secs, floor, direction, occupants, floor_queue) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                row.time_secs,
                row.floor,
                row.direction,
                row.occupants,
                row.floor_queue,
            ],
        )?;
        Ok(())
    }

    fn write_passengers(&mut self, rows: &[PassengerRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO passenger_times (person_id, wait_secs, travel_secs) \
                 VALUES (?1, ?2, ?3)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.person_id,
                    row.wait_secs,
                    row.travel_secs,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_summary(&mut self, rows: &[SummaryRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO summary (metric, value) VALUES (?1, ?2)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.metric, row.value])?;
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
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
