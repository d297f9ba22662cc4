//! `lift-core` — foundational types for the `rust_lift` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `thiserror`).
//!
//! # What lives here
//!
//! | Module        | Contents                                   |
//! |---------------|--------------------------------------------|
//! | [`ids`]       | `PersonId`                                 |
//! | [`floor`]     | `Floor`, `FloorRange`                      |
//! | [`direction`] | `Direction` enum                           |
//! | [`time`]      | `SimTime`                                  |
//! | [`config`]    | `LiftConfig`                               |
//! | [`error`]     | `LiftError`, `LiftResult`                  |

pub mod config;
pub mod direction;
pub mod error;
pub mod floor;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::LiftConfig;
pub use direction::Direction;
pub use error::{LiftError, LiftResult};
pub use floor::{Floor, FloorRange};
pub use ids::PersonId;
pub use time::SimTime;
