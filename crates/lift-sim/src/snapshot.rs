//! Immutable per-floor state records emitted during a run.

use lift_core::{Direction, Floor, PersonId, SimTime};

/// Elevator state after servicing one floor.
///
/// Snapshots are emitted in strict simulated-time order, one per floor
/// visit.  A reversal floor is visited once per direction and yields one
/// snapshot per visit, both carrying the same clock value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FloorSnapshot {
    /// Simulated time of the visit.
    pub time: SimTime,

    /// The floor just serviced.
    pub floor: Floor,

    /// Scan direction during the visit.
    pub direction: Direction,

    /// Occupants after drop-off and pickup, in boarding order.
    pub occupants: Vec<PersonId>,

    /// Outstanding call floors and occupant destinations, deduplicated and
    /// direction-ordered: the same-direction side first (ascending above the
    /// cabin when moving up, descending below when moving down), then the
    /// reversal-bound side in reverse.
    pub floor_queue: Vec<Floor>,
}
