//! `lift-requests` — passenger travel requests and CSV loading.
//!
//! # Crate layout
//!
//! | Module      | Contents                                         |
//! |-------------|--------------------------------------------------|
//! | [`request`] | `Request`, `validate_requests`                   |
//! | [`loader`]  | `load_requests_csv`, `load_requests_reader`      |
//! | [`error`]   | `RequestError`, `RequestResult<T>`               |
//!
//! # Lifecycle (summary)
//!
//! A `Request` is created once from input and handed to the engine, which
//! owns it for the rest of the run:
//!
//! ```text
//! pending ──pickup──▶ occupant ──dropoff──▶ completed
//!            └─ entry_time/wait_secs fixed here, exactly once
//! ```
//!
//! Validation happens at this boundary: the engine assumes every request it
//! receives has in-range floors, distinct calling/destination floors, and a
//! unique person id.

pub mod error;
pub mod loader;
pub mod request;


pub use error::{RequestError, RequestResult};
pub use loader::{load_requests_csv, load_requests_reader};
pub use request::{validate_requests, Request};
