//! Run configuration.
//!
//! Floor range, cabin capacity, and the two time increments are explicit
//! parameters rather than embedded constants, so tests can run buildings at
//! other scales.  `Default` reproduces the reference ten-floor building.

use crate::{Floor, FloorRange, LiftError, LiftResult};

/// Top-level simulation configuration.
///
/// Typically built in code by the application crate and passed to
/// `LiftSim::new`.
#[derive(Clone, Debug)]
pub struct LiftConfig {
    /// The closed floor interval the elevator services.
    pub floors: FloorRange,

    /// Maximum number of simultaneous occupants.  An eligible passenger who
    /// would exceed this stays queued — a deferral, never an error.
    pub capacity: usize,

    /// Simulated seconds consumed by one floor-to-floor movement.
    pub travel_step_secs: u64,

    /// Simulated seconds the clock advances per idle poll while waiting for
    /// the first request to become active.
    pub idle_step_secs: u64,
}

impl Default for LiftConfig {
    /// The reference building: floors 1–10, capacity 8, 10 s per floor,
    /// 1 s idle poll.
    fn default() -> Self {
        Self {
            floors:           FloorRange::new(Floor(1), Floor(10)),
            capacity:         8,
            travel_step_secs: 10,
            idle_step_secs:   1,
        }
    }
}

impl LiftConfig {
    /// Check the configuration for values that would stall or break a run.
    ///
    /// A zero idle step would loop forever waiting for a future request; a
    /// zero capacity could never board anyone.
    pub fn validate(&self) -> LiftResult<()> {
        if self.capacity == 0 {
            return Err(LiftError::Config("capacity must be at least 1".into()));
        }
        if self.travel_step_secs == 0 {
            return Err(LiftError::Config("travel_step_secs must be non-zero".into()));
        }
        if self.idle_step_secs == 0 {
            return Err(LiftError::Config("idle_step_secs must be non-zero".into()));
        }
        Ok(())
    }
}
