//! The `LiftSim` engine and its scan loop.

use lift_core::{Direction, Floor, LiftConfig, SimTime};
use lift_requests::Request;

use crate::analytics::{Analytics, RunReport};
use crate::lift::Lift;
use crate::observer::RunObserver;
use crate::snapshot::FloorSnapshot;
use crate::SimResult;

// ── RunOutcome ────────────────────────────────────────────────────────────────

/// Everything a completed run produced: the full snapshot trace and the
/// aggregate report.
#[derive(Clone, Debug)]
pub struct RunOutcome {
    /// One snapshot per floor visit, in emission (strict simulated-time)
    /// order.
    pub snapshots: Vec<FloorSnapshot>,

    /// The aggregate efficiency report.
    pub report: RunReport,
}

// ── LiftSim ───────────────────────────────────────────────────────────────────

/// The simulation engine.
///
/// Owns the elevator, the pending request queue, and the analytics collector
/// for exactly one run.  No other entry point mutates elevator state while a
/// run is in progress — [`run`][Self::run] consumes the engine.
pub struct LiftSim {
    config:    LiftConfig,
    lift:      Lift,
    pending:   Vec<Request>,
    analytics: Analytics,
    snapshots: Vec<FloorSnapshot>,
}

impl LiftSim {
    /// Create an engine for one request batch.
    ///
    /// The batch must already be validated (see
    /// [`lift_requests::validate_requests`]); the engine assumes in-range
    /// floors and distinct calling/destination pairs.  Anything else
    /// surfaces as a
    /// [`LiftError::FloorOutOfRange`][lift_core::LiftError::FloorOutOfRange]
    /// mid-run.
    pub fn new(config: LiftConfig, requests: Vec<Request>) -> SimResult<Self> {
        config.validate()?;
        debug_assert!(
            requests.iter().all(|r| {
                config.floors.contains(r.calling_floor())
                    && config.floors.contains(r.destination_floor())
                    && r.calling_floor() != r.destination_floor()
            }),
            "engine input must be pre-validated by the request source"
        );
        Ok(Self {
            lift:      Lift::new(config.floors),
            config,
            pending:   requests,
            analytics: Analytics::new(),
            snapshots: Vec::new(),
        })
    }

    /// Read-only view of the cabin (pre-run inspection and tests).
    pub fn lift(&self) -> &Lift {
        &self.lift
    }

    /// Requests not yet picked up.
    pub fn pending(&self) -> &[Request] {
        &self.pending
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Drive the scan to completion: every request picked up and delivered.
    ///
    /// Observer hooks fire as the run progresses; the returned
    /// [`RunOutcome`] carries the same snapshots plus the final report.
    pub fn run<O: RunObserver>(mut self, observer: &mut O) -> SimResult<RunOutcome> {
        while !self.pending.is_empty() || self.lift.occupant_count() > 0 {
            // Nothing to do yet: poll the clock forward until the earliest
            // request becomes active.  Request times are finite, so this
            // always ends.
            if self.lift.occupant_count() == 0 && !self.any_active() {
                observer.on_idle(self.lift.clock());
                self.lift.idle_step(self.config.idle_step_secs);
                continue;
            }
            self.sweep(observer)?;
        }

        let report = self.analytics.summarize(&self.lift);
        observer.on_run_end(&report);
        Ok(RunOutcome { snapshots: self.snapshots, report })
    }

    // ── Scan ──────────────────────────────────────────────────────────────

    /// Service floors in the current direction until the scan reverses or
    /// the run completes.
    fn sweep<O: RunObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let direction = self.lift.direction();
        loop {
            self.service_floor(observer);

            if !self.demand_beyond(direction) {
                if self.pending.is_empty() {
                    // Occupants are provably empty here: anyone aboard was
                    // picked up travelling in `direction` and would still
                    // have a destination beyond this floor.
                    debug_assert_eq!(self.lift.occupant_count(), 0);
                    return Ok(());
                }
                self.lift.reverse();
                observer.on_direction_change(self.lift.clock(), self.lift.direction());
                // The outer loop re-services this floor in the new direction.
                return Ok(());
            }

            self.lift.travel_step(self.config.travel_step_secs);
            let next = self.lift.floor().next(direction);
            self.lift.move_to(next)?;
        }
    }

    /// One floor visit: drop off, pick up, snapshot.
    fn service_floor<O: RunObserver>(&mut self, observer: &mut O) {
        let now = self.lift.clock();
        let here = self.lift.floor();

        // Drop off every occupant destined here.
        for passenger in self.lift.alight_at(here) {
            if let Some(travel) = passenger.travel_secs(now) {
                self.analytics.record_travel(passenger.person(), travel);
            }
            observer.on_dropoff(now, passenger.person(), here);
        }

        self.pick_up(observer, now, here);

        let snapshot = self.take_snapshot();
        observer.on_floor_visit(&snapshot);
        self.snapshots.push(snapshot);
    }

    /// Admit active same-direction callers at `here`, in encounter order,
    /// until the cabin is full.  The first refused passenger blocks the rest
    /// of the floor's queue — they all wait for a later visit.
    fn pick_up<O: RunObserver>(&mut self, observer: &mut O, now: SimTime, here: Floor) {
        let direction = self.lift.direction();

        // Determine the eligible set first, then apply all removals — the
        // pending queue is never mutated mid-iteration.
        let eligible: Vec<usize> = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, r)| {
                r.is_active(now)
                    && r.calling_floor() == here
                    && r.travel_direction() == direction
            })
            .map(|(i, _)| i)
            .collect();

        let seats = self.config.capacity.saturating_sub(self.lift.occupant_count());
        let (admitted, deferred) = eligible.split_at(eligible.len().min(seats));

        if let Some(&first) = deferred.first() {
            observer.on_capacity_deferral(now, self.pending[first].person(), here);
        }

        // Remove back-to-front so earlier indices stay valid, then restore
        // encounter order for boarding.
        let mut boarding: Vec<Request> = admitted
            .iter()
            .rev()
            .map(|&i| self.pending.remove(i))
            .collect();
        boarding.reverse();

        for mut request in boarding {
            let wait = request.board(now);
            self.analytics.record_wait(request.person(), wait);
            observer.on_pickup(now, request.person(), here);
            self.lift.board(request);
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` if any pending request is already active.
    fn any_active(&self) -> bool {
        let now = self.lift.clock();
        self.pending.iter().any(|r| r.is_active(now))
    }

    /// `true` if an active call or an occupant destination lies strictly
    /// beyond the current floor in `direction` — the continuation predicate
    /// of the scan.
    fn demand_beyond(&self, direction: Direction) -> bool {
        let now = self.lift.clock();
        let here = self.lift.floor();
        self.pending
            .iter()
            .any(|r| r.is_active(now) && direction.is_beyond(r.calling_floor(), here))
            || self.lift.demand_beyond(direction)
    }

    /// Build the snapshot for the floor just serviced.
    fn take_snapshot(&self) -> FloorSnapshot {
        let now = self.lift.clock();
        let here = self.lift.floor();
        let direction = self.lift.direction();

        let active_calls = || {
            self.pending
                .iter()
                .filter(move |r| r.is_active(now))
                .map(|r| r.calling_floor())
        };
        let destinations = || self.lift.occupants().iter().map(|r| r.destination_floor());

        let mut above: Vec<Floor> = active_calls()
            .chain(destinations())
            .filter(|&f| f > here)
            .collect();
        above.sort_unstable();
        above.dedup();

        let mut below: Vec<Floor> = active_calls()
            .chain(destinations())
            .filter(|&f| f < here)
            .collect();
        below.sort_unstable_by(|a, b| b.cmp(a));
        below.dedup();

        // Same-direction side first; the reversal-bound side follows in
        // reverse so the queue reads in service order.
        let floor_queue = match direction {
            Direction::Up => above.into_iter().chain(below).collect(),
            Direction::Down => below.into_iter().chain(above).collect(),
        };

        FloorSnapshot {
            time: now,
            floor: here,
            direction,
            occupants: self.lift.occupants().iter().map(|r| r.person()).collect(),
            floor_queue,
        }
    }
}
