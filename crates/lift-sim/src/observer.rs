//! Run observer trait for progress reporting and data collection.

use lift_core::{Direction, Floor, PersonId, SimTime};

use crate::analytics::RunReport;
use crate::snapshot::FloorSnapshot;

/// Callbacks invoked by [`LiftSim::run`][crate::LiftSim::run] at key points
/// in the scan loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl RunObserver for ProgressPrinter {
///     fn on_floor_visit(&mut self, snapshot: &FloorSnapshot) {
///         println!("[{}] lift reaches floor {}", snapshot.time, snapshot.floor);
///     }
/// }
/// ```
pub trait RunObserver {
    /// Called once per idle poll, before the clock advances, while the run
    /// waits for its first active request.
    fn on_idle(&mut self, _now: SimTime) {}

    /// Called after each floor is serviced (drop-off and pickup applied).
    fn on_floor_visit(&mut self, _snapshot: &FloorSnapshot) {}

    /// Called for each passenger admitted to the cabin.
    fn on_pickup(&mut self, _now: SimTime, _person: PersonId, _floor: Floor) {}

    /// Called for each passenger leaving the cabin at their destination.
    fn on_dropoff(&mut self, _now: SimTime, _person: PersonId, _floor: Floor) {}

    /// Called when a full cabin turns away the first eligible caller at a
    /// floor (the rest of the queue at that floor is deferred with them).
    fn on_capacity_deferral(&mut self, _now: SimTime, _person: PersonId, _floor: Floor) {}

    /// Called after the scan reverses, with the new direction.
    fn on_direction_change(&mut self, _now: SimTime, _direction: Direction) {}

    /// Called once after the run terminates, with the aggregate report.
    fn on_run_end(&mut self, _report: &RunReport) {}
}

/// A [`RunObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
