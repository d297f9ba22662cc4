//! `RunOutputObserver<W>` — bridges `RunObserver` to an `OutputWriter`.

use lift_sim::{FloorSnapshot, RunObserver, RunReport};

use crate::row::{passenger_rows, summary_rows, TraceRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`RunObserver`] that streams the floor-visit trace and the final report
/// to any [`OutputWriter`] backend (CSV, SQLite).
///
/// Errors from the writer are stored internally because `RunObserver`
/// methods have no return value.  After the run returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct RunOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> RunOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> RunObserver for RunOutputObserver<W> {
    fn on_floor_visit(&mut self, snapshot: &FloorSnapshot) {
        let row = TraceRow::from_snapshot(snapshot);
        let result = self.writer.write_trace(&row);
        self.store_err(result);
    }

    fn on_run_end(&mut self, report: &RunReport) {
        let result = self.writer.write_passengers(&passenger_rows(report));
        self.store_err(result);
        let result = self.writer.write_summary(&summary_rows(report));
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
