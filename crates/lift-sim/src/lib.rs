//! `lift-sim` — scan-scheduling engine for the rust_lift simulator.
//!
//! # The scan loop
//!
//! ```text
//! while pending or occupants remain:
//!   ① Idle    — nothing active and cabin empty → clock += idle step, retry.
//!   ② Sweep   — service floors one by one in the current direction:
//!       drop off   occupants whose destination is this floor
//!       pick up    active same-direction callers, up to capacity
//!       snapshot   emit cabin state to the observer
//!       continue?  demand strictly beyond this floor → move one floor
//!                  (clock += travel step, directional total += travel step);
//!                  otherwise terminate (pending empty) or reverse and
//!                  re-service this floor in the new direction.
//! ```
//!
//! The engine owns the elevator, the pending queue, and the analytics
//! collector for the whole run; `run` consumes the engine and returns every
//! emitted snapshot plus the aggregate report.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::LiftConfig;
//! use lift_requests::load_requests_csv;
//! use lift_sim::{LiftSim, NoopObserver};
//!
//! let config = LiftConfig::default();
//! let requests = load_requests_csv(path, config.floors)?;
//! let outcome = LiftSim::new(config, requests)?.run(&mut NoopObserver)?;
//! println!("{} snapshots", outcome.snapshots.len());
//! ```

pub mod analytics;
pub mod engine;
pub mod error;
pub mod lift;
pub mod observer;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use analytics::{Analytics, RunReport, Sample, SampleStats};
pub use engine::{LiftSim, RunOutcome};
pub use error::{SimError, SimResult};
pub use lift::Lift;
pub use observer::{NoopObserver, RunObserver};
pub use snapshot::FloorSnapshot;
