//! Elevator cabin state.
//!
//! One `Lift` exists per run, owned exclusively by the engine.  All mutation
//! goes through the methods here, which maintain the invariants the scan
//! relies on: the floor stays inside the serviced range, the clock never
//! goes backwards, and directional totals only grow.

use lift_core::{Direction, Floor, FloorRange, LiftError, LiftResult, SimTime};
use lift_requests::Request;

/// The elevator cabin: position, direction, occupants, and the run clock.
#[derive(Debug)]
pub struct Lift {
    floor:     Floor,
    direction: Direction,
    occupants: Vec<Request>,
    clock:     SimTime,
    range:     FloorRange,

    direction_changes: u32,
    up_travel_secs:    u64,
    down_travel_secs:  u64,
}

impl Lift {
    /// A cabin parked at the bottom of `range`, facing up, at time zero.
    pub fn new(range: FloorRange) -> Self {
        Self {
            floor:             range.min(),
            direction:         Direction::Up,
            occupants:         Vec::new(),
            clock:             SimTime::ZERO,
            range,
            direction_changes: 0,
            up_travel_secs:    0,
            down_travel_secs:  0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn clock(&self) -> SimTime {
        self.clock
    }

    #[inline]
    pub fn occupants(&self) -> &[Request] {
        &self.occupants
    }

    #[inline]
    pub fn occupant_count(&self) -> usize {
        self.occupants.len()
    }

    #[inline]
    pub fn direction_changes(&self) -> u32 {
        self.direction_changes
    }

    #[inline]
    pub fn up_travel_secs(&self) -> u64 {
        self.up_travel_secs
    }

    #[inline]
    pub fn down_travel_secs(&self) -> u64 {
        self.down_travel_secs
    }

    /// `true` if any occupant's destination lies strictly beyond `self.floor`
    /// in `direction`.
    pub fn demand_beyond(&self, direction: Direction) -> bool {
        self.occupants
            .iter()
            .any(|r| direction.is_beyond(r.destination_floor(), self.floor))
    }

    // ── Mutators ──────────────────────────────────────────────────────────

    /// Move the cabin to `floor`.
    ///
    /// Out-of-range targets are rejected, never silently ignored.  The scan
    /// never asks for one (its turning points are the range bounds), so
    /// reaching this error means the engine was fed unvalidated requests.
    pub fn move_to(&mut self, floor: Floor) -> LiftResult<()> {
        if !self.range.contains(floor) {
            return Err(LiftError::FloorOutOfRange { floor, range: self.range });
        }
        self.floor = floor;
        Ok(())
    }

    /// Flip the scan direction and count the change.
    pub fn reverse(&mut self) {
        self.direction = self.direction.flip();
        self.direction_changes += 1;
    }

    /// Account one floor-to-floor movement: advance the clock and the
    /// current direction's total by `secs`.
    pub fn travel_step(&mut self, secs: u64) {
        self.clock += secs;
        match self.direction {
            Direction::Up => self.up_travel_secs += secs,
            Direction::Down => self.down_travel_secs += secs,
        }
    }

    /// Advance the clock by `secs` without moving (idle poll).
    pub fn idle_step(&mut self, secs: u64) {
        self.clock += secs;
    }

    /// Admit a picked-up passenger.  Capacity is enforced by the engine
    /// before calling this.
    pub fn board(&mut self, request: Request) {
        self.occupants.push(request);
    }

    /// Remove and return every occupant whose destination is `floor`.
    ///
    /// Computes the departing set first and applies all removals at once;
    /// boarding order of the remaining occupants is preserved.
    pub fn alight_at(&mut self, floor: Floor) -> Vec<Request> {
        let (departing, staying): (Vec<Request>, Vec<Request>) = std::mem::take(&mut self.occupants)
            .into_iter()
            .partition(|r| r.destination_floor() == floor);
        self.occupants = staying;
        departing
    }
}
