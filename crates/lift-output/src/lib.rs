//! `lift-output` — persisted tabular output for the rust_lift simulator.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`row`]      | `TraceRow`, `PassengerRow`, `SummaryRow` + converters  |
//! | [`writer`]   | The `OutputWriter` trait                               |
//! | [`csv`]      | CSV backend (`trace.csv`, `passenger_times.csv`, `summary.csv`) |
//! | [`sqlite`]   | SQLite backend (feature `sqlite`)                      |
//! | [`observer`] | `RunOutputObserver<W>` — bridges `RunObserver` to a writer |
//! | [`error`]    | `OutputError`, `OutputResult<T>`                       |
//!
//! # Cargo features
//!
//! | Feature  | Effect                                     |
//! |----------|--------------------------------------------|
//! | `sqlite` | Adds the `SqliteWriter` backend (rusqlite). |

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
#[cfg(feature = "sqlite")]
pub mod sqlite;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RunOutputObserver;
pub use row::{passenger_rows, summary_rows, PassengerRow, SummaryRow, TraceRow};
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
pub use writer::OutputWriter;
