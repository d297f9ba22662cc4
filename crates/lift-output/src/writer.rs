//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, PassengerRow, SummaryRow, TraceRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`RunOutputObserver::take_error`][crate::RunOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one elevator state row (one floor visit).
    fn write_trace(&mut self, row: &TraceRow) -> OutputResult<()>;

    /// Write the per-passenger timing rows of the final report.
    fn write_passengers(&mut self, rows: &[PassengerRow]) -> OutputResult<()>;

    /// Write the aggregate `metric,value` rows of the final report.
    fn write_summary(&mut self, rows: &[SummaryRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
