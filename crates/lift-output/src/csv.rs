//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `trace.csv` — one row per floor visit
//! - `passenger_times.csv` — one row per delivered passenger
//! - `summary.csv` — aggregate `metric,value` rows

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PassengerRow, SummaryRow, TraceRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    trace:      Writer<File>,
    passengers: Writer<File>,
    summary:    Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trace = Writer::from_path(dir.join("trace.csv"))?;
        trace.write_record(["time_secs", "floor", "direction", "occupants", "floor_queue"])?;

        let mut passengers = Writer::from_path(dir.join("passenger_times.csv"))?;
        passengers.write_record(["person_id", "wait_secs", "travel_secs"])?;

        let mut summary = Writer::from_path(dir.join("summary.csv"))?;
        summary.write_record(["metric", "value"])?;

        Ok(Self {
            trace,
            passengers,
            summary,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_trace(&mut self, row: &TraceRow) -> OutputResult<()> {
        self.trace.write_record(&[
            row.time_secs.to_string(),
            row.floor.to_string(),
            row.direction.clone(),
            row.occupants.clone(),
            row.floor_queue.clone(),
        ])?;
        Ok(())
    }

    fn write_passengers(&mut self, rows: &[PassengerRow]) -> OutputResult<()> {
        for row in rows {
            self.passengers.write_record(&[
                row.person_id.to_string(),
                row.wait_secs.to_string(),
                row.travel_secs.map(|s| s.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, rows: &[SummaryRow]) -> OutputResult<()> {
        for row in rows {
            self.summary
                .write_record([row.metric, row.value.as_str()])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trace.flush()?;
        self.passengers.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
