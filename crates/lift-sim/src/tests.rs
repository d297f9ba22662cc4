//! Integration tests for lift-sim.

use lift_core::{Direction, Floor, FloorRange, LiftConfig, PersonId, SimTime};
use lift_requests::Request;

use crate::{FloorSnapshot, LiftSim, NoopObserver, RunObserver, RunOutcome, RunReport, SampleStats};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn req(id: u32, call: i32, dest: i32, time: u64) -> Request {
    Request::new(PersonId(id), Floor(call), Floor(dest), SimTime(time))
}

fn ten_floor_config() -> LiftConfig {
    LiftConfig::default()
}

/// Observer that records every callback for later assertions.
#[derive(Default)]
struct Recording {
    pickups:    Vec<(u64, u32, i32)>, // (time, person, floor)
    dropoffs:   Vec<(u64, u32, i32)>,
    deferrals:  Vec<(u64, u32, i32)>,
    flips:      Vec<(u64, Direction)>,
    idle_polls: usize,
    report:     Option<RunReport>,
}

impl RunObserver for Recording {
    fn on_idle(&mut self, _now: SimTime) {
        self.idle_polls += 1;
    }
    fn on_pickup(&mut self, now: SimTime, person: PersonId, floor: Floor) {
        self.pickups.push((now.0, person.0, floor.0));
    }
    fn on_dropoff(&mut self, now: SimTime, person: PersonId, floor: Floor) {
        self.dropoffs.push((now.0, person.0, floor.0));
    }
    fn on_capacity_deferral(&mut self, now: SimTime, person: PersonId, floor: Floor) {
        self.deferrals.push((now.0, person.0, floor.0));
    }
    fn on_direction_change(&mut self, now: SimTime, direction: Direction) {
        self.flips.push((now.0, direction));
    }
    fn on_run_end(&mut self, report: &RunReport) {
        self.report = Some(report.clone());
    }
}

fn run_with(config: LiftConfig, requests: Vec<Request>) -> (RunOutcome, Recording) {
    let mut recording = Recording::default();
    let outcome = LiftSim::new(config, requests)
        .unwrap()
        .run(&mut recording)
        .unwrap();
    (outcome, recording)
}

fn run_default(requests: Vec<Request>) -> (RunOutcome, Recording) {
    run_with(ten_floor_config(), requests)
}

fn queue(snapshot: &FloorSnapshot) -> Vec<i32> {
    snapshot.floor_queue.iter().map(|f| f.0).collect()
}

// ── Reference scenarios ───────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::*;

    /// Single request, capacity irrelevant: pickup at floor 1 with zero
    /// wait, drop-off at floor 5 after four travel steps, no reversal.
    #[test]
    fn single_request_direct_delivery() {
        let (outcome, rec) = run_default(vec![req(1, 1, 5, 0)]);

        assert_eq!(rec.pickups, vec![(0, 1, 1)]);
        assert_eq!(rec.dropoffs, vec![(40, 1, 5)]);
        assert!(rec.flips.is_empty());

        let report = &outcome.report;
        assert_eq!(report.direction_changes, 0);
        let wait = report.wait_stats.unwrap();
        assert_eq!((wait.max_secs, wait.min_secs), (0, 0));
        assert_eq!((wait.mean_secs, wait.median_secs), (0.0, 0.0));
        let travel = report.travel_stats.unwrap();
        assert_eq!((travel.max_secs, travel.min_secs), (40, 40));
        assert_eq!((travel.mean_secs, travel.median_secs), (40.0, 40.0));

        // One snapshot per visited floor, 1 through 5.
        let floors: Vec<i32> = outcome.snapshots.iter().map(|s| s.floor.0).collect();
        assert_eq!(floors, vec![1, 2, 3, 4, 5]);
        assert_eq!(outcome.snapshots[0].occupants, vec![PersonId(1)]);
        assert_eq!(queue(&outcome.snapshots[0]), vec![5]);
        assert!(outcome.snapshots[4].occupants.is_empty());
        assert!(outcome.snapshots[4].floor_queue.is_empty());
    }

    /// A downward caller is passed over by the upward sweep and boards only
    /// after the elevator reverses at the top of demand.
    #[test]
    fn direction_mismatch_boards_after_reversal() {
        let (outcome, rec) = run_default(vec![req(1, 2, 8, 0), req(2, 6, 1, 0)]);

        // id=1 boards on the way up; id=2 is skipped at floor 6 (t=50).
        assert_eq!(rec.pickups, vec![(10, 1, 2), (90, 2, 6)]);
        assert_eq!(rec.dropoffs, vec![(70, 1, 8), (140, 2, 1)]);
        assert_eq!(rec.flips, vec![(70, Direction::Down)]);

        let report = &outcome.report;
        assert_eq!(report.direction_changes, 1);
        assert_eq!(report.up_travel_secs, 70);
        assert_eq!(report.down_travel_secs, 70);

        let waits: Vec<(u32, u64)> =
            report.wait_samples.iter().map(|s| (s.person.0, s.secs)).collect();
        assert_eq!(waits, vec![(1, 10), (2, 90)]);
        let travels: Vec<(u32, u64)> =
            report.travel_samples.iter().map(|s| (s.person.0, s.secs)).collect();
        assert_eq!(travels, vec![(1, 60), (2, 50)]);
    }

    /// Nine callers at the ground floor, capacity 8: exactly eight board on
    /// the first visit; the ninth waits out a full round trip.
    #[test]
    fn capacity_overflow_defers_ninth_caller() {
        let requests: Vec<Request> = (1..=9).map(|id| req(id, 1, 10, 0)).collect();
        let (outcome, rec) = run_with(ten_floor_config(), requests);

        let first_batch: Vec<(u64, u32, i32)> = rec.pickups[..8].to_vec();
        assert_eq!(
            first_batch,
            (1..=8).map(|id| (0, id, 1)).collect::<Vec<_>>()
        );
        assert_eq!(rec.deferrals, vec![(0, 9, 1)]);

        // The ninth boards at floor 1 after the down sweep (and the extra
        // flip back to UP), then rides to the top.
        assert_eq!(rec.pickups[8], (180, 9, 1));
        assert_eq!(rec.dropoffs[8], (270, 9, 10));
        assert_eq!(outcome.report.direction_changes, 2);

        // Every delivered trip is the same nine-floor ride.
        let travel = outcome.report.travel_stats.unwrap();
        assert_eq!((travel.max_secs, travel.min_secs), (90, 90));

        // The cabin was exactly full on the first visit.
        assert_eq!(outcome.snapshots[0].occupants.len(), 8);
    }
}

// ── Scan behavior ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod scan {
    use super::*;

    #[test]
    fn empty_batch_terminates_immediately() {
        let (outcome, rec) = run_default(vec![]);
        assert!(outcome.snapshots.is_empty());
        assert!(outcome.report.wait_stats.is_none());
        assert!(outcome.report.travel_stats.is_none());
        assert!(outcome.report.direction_split_pct().is_none());
        assert_eq!(rec.idle_polls, 0);
    }

    #[test]
    fn idle_steps_until_first_request_active() {
        let (_, rec) = run_default(vec![req(1, 3, 7, 5)]);

        // Polls at t = 0..4, one simulated second each; the sweep starts at
        // t = 5 from floor 1 and reaches the caller at t = 25.
        assert_eq!(rec.idle_polls, 5);
        assert_eq!(rec.pickups, vec![(25, 1, 3)]);
        assert_eq!(rec.report.unwrap().wait_stats.unwrap().max_secs, 20);
    }

    #[test]
    fn reversal_revisits_floor_in_new_direction() {
        let (outcome, _) = run_default(vec![req(1, 2, 8, 0), req(2, 6, 1, 0)]);

        // Upward visits 1..=8, then floor 8 again heading down, then 7..=1.
        let visits: Vec<(i32, Direction)> = outcome
            .snapshots
            .iter()
            .map(|s| (s.floor.0, s.direction))
            .collect();
        assert_eq!(visits.len(), 16);
        assert_eq!(visits[7], (8, Direction::Up));
        assert_eq!(visits[8], (8, Direction::Down));
        // No time passes between the two visits of the turning floor.
        assert_eq!(outcome.snapshots[7].time, outcome.snapshots[8].time);
    }

    #[test]
    fn full_cabin_blocks_rest_of_floor_queue() {
        let config = LiftConfig { capacity: 1, ..LiftConfig::default() };
        let (_, rec) = run_with(config, vec![req(1, 2, 6, 0), req(2, 2, 9, 0)]);

        // Both are eligible at floor 2; only the first-supplied boards.
        assert_eq!(rec.deferrals, vec![(10, 2, 2)]);
        assert_eq!(rec.pickups[0], (10, 1, 2));
        // The second boards on a later visit, after the cabin empties.
        assert_eq!(rec.pickups[1].1, 2);
        assert!(rec.pickups[1].0 > 10);
    }

    #[test]
    fn snapshot_queue_is_direction_ordered() {
        let (outcome, _) =
            run_default(vec![req(1, 1, 9, 0), req(2, 5, 2, 0), req(3, 7, 10, 0)]);

        // Floor 7, heading up with id=1 and id=3 aboard: destinations 9 and
        // 10 are listed ahead of the reversal-bound call at 5.
        let at_seven = outcome
            .snapshots
            .iter()
            .find(|s| s.floor == Floor(7) && s.direction == Direction::Up)
            .unwrap();
        assert_eq!(queue(at_seven), vec![9, 10, 5]);
    }

    #[test]
    fn snapshot_queue_deduplicates_calls_and_destinations() {
        // id=1's destination and id=2's calling floor are both 8.
        let (outcome, _) = run_default(vec![req(1, 1, 8, 0), req(2, 8, 2, 0)]);
        assert_eq!(queue(&outcome.snapshots[0]), vec![8]);
    }

    #[test]
    fn current_floor_excluded_from_queue() {
        // The skipped wrong-direction caller at the serviced floor does not
        // appear in its own queue entry.
        let (outcome, _) = run_default(vec![req(1, 1, 6, 0), req(2, 6, 3, 0)]);
        let at_six = outcome
            .snapshots
            .iter()
            .find(|s| s.floor == Floor(6) && s.direction == Direction::Up)
            .unwrap();
        assert_eq!(queue(at_six), Vec::<i32>::new());
    }

    #[test]
    fn inactive_requests_invisible_to_queue_and_pickup() {
        // The late request is not yet active while the first is serviced.
        let (outcome, rec) = run_default(vec![req(1, 1, 3, 0), req(2, 2, 5, 1_000)]);

        let first = &outcome.snapshots[0];
        assert_eq!(queue(first), vec![3]); // no call at 2 listed yet
        // After delivering id=1 at t=20 the engine idles until t=1000.
        assert_eq!(rec.pickups[1], (1_010, 2, 2));
    }

    #[test]
    fn rejects_invalid_configuration() {
        let config = LiftConfig { capacity: 0, ..LiftConfig::default() };
        assert!(LiftSim::new(config, vec![]).is_err());
    }
}

// ── Invariant properties over a mixed batch ───────────────────────────────────

#[cfg(test)]
mod properties {
    use super::*;

    fn mixed_batch() -> Vec<Request> {
        vec![
            req(1, 1, 5, 0),
            req(2, 6, 1, 0),
            req(3, 2, 8, 45),
            req(4, 9, 3, 20),
            req(5, 4, 10, 100),
            req(6, 10, 2, 0),
        ]
    }

    #[test]
    fn every_passenger_served_exactly_once() {
        let (_, rec) = run_default(mixed_batch());
        let mut picked: Vec<u32> = rec.pickups.iter().map(|p| p.1).collect();
        let mut dropped: Vec<u32> = rec.dropoffs.iter().map(|d| d.1).collect();
        picked.sort_unstable();
        dropped.sort_unstable();
        assert_eq!(picked, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(dropped, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn pickup_and_dropoff_times_ordered() {
        let batch = mixed_batch();
        let (_, rec) = run_default(batch.clone());
        for &(t, id, _) in &rec.pickups {
            let request_time = batch
                .iter()
                .find(|r| r.person() == PersonId(id))
                .unwrap()
                .request_time();
            assert!(t >= request_time.0, "P{id} picked up before requesting");
        }
        for &(t, id, _) in &rec.dropoffs {
            let pickup = rec.pickups.iter().find(|p| p.1 == id).unwrap();
            assert!(t >= pickup.0, "P{id} dropped off before boarding");
        }
    }

    #[test]
    fn occupancy_and_floor_bounds_hold_at_every_snapshot() {
        let config = ten_floor_config();
        let (outcome, _) = run_with(config.clone(), mixed_batch());
        for snapshot in &outcome.snapshots {
            assert!(snapshot.occupants.len() <= config.capacity);
            assert!(config.floors.contains(snapshot.floor));
        }
    }

    #[test]
    fn snapshot_times_non_decreasing() {
        let (outcome, _) = run_default(mixed_batch());
        for pair in outcome.snapshots.windows(2) {
            assert!(pair[0].time <= pair[1].time);
        }
    }

    #[test]
    fn movement_totals_account_for_all_non_idle_time() {
        let config = ten_floor_config();
        let (outcome, rec) = run_with(config.clone(), mixed_batch());
        let final_clock = outcome.snapshots.last().unwrap().time.0;
        let idle_secs = rec.idle_polls as u64 * config.idle_step_secs;
        assert_eq!(
            outcome.report.total_travel_secs() + idle_secs,
            final_clock
        );
        assert_eq!(outcome.report.total_travel_secs() % config.travel_step_secs, 0);
    }

    #[test]
    fn direction_flips_only_without_demand_beyond() {
        let (outcome, _) = run_default(mixed_batch());
        for pair in outcome.snapshots.windows(2) {
            if pair[1].direction != pair[0].direction {
                let old = pair[0].direction;
                let here = pair[0].floor;
                assert!(
                    !pair[0].floor_queue.iter().any(|&f| old.is_beyond(f, here)),
                    "reversed at {here} with demand still beyond ({:?})",
                    pair[0].floor_queue
                );
            }
        }
    }

    #[test]
    fn runs_at_other_scales() {
        // Three-floor building, capacity 2.
        let config = LiftConfig {
            floors: FloorRange::new(Floor(1), Floor(3)),
            capacity: 2,
            ..LiftConfig::default()
        };
        let (outcome, rec) = run_with(
            config,
            vec![req(1, 1, 3, 0), req(2, 1, 2, 0), req(3, 3, 1, 0), req(4, 2, 3, 0)],
        );
        let mut dropped: Vec<u32> = rec.dropoffs.iter().map(|d| d.1).collect();
        dropped.sort_unstable();
        assert_eq!(dropped, vec![1, 2, 3, 4]);
        for snapshot in &outcome.snapshots {
            assert!(snapshot.occupants.len() <= 2);
            assert!(snapshot.floor.0 >= 1 && snapshot.floor.0 <= 3);
        }
    }
}

// ── Cabin unit behavior ───────────────────────────────────────────────────────

#[cfg(test)]
mod lift {
    use super::*;
    use crate::Lift;
    use lift_core::LiftError;

    fn cabin() -> Lift {
        Lift::new(FloorRange::new(Floor(1), Floor(10)))
    }

    #[test]
    fn starts_at_range_minimum_facing_up() {
        let lift = cabin();
        assert_eq!(lift.floor(), Floor(1));
        assert_eq!(lift.direction(), Direction::Up);
        assert_eq!(lift.clock(), SimTime::ZERO);
        assert_eq!(lift.occupant_count(), 0);
    }

    #[test]
    fn move_to_rejects_out_of_range() {
        let mut lift = cabin();
        assert!(matches!(
            lift.move_to(Floor(11)),
            Err(LiftError::FloorOutOfRange { floor: Floor(11), .. })
        ));
        // Rejected assignment leaves the cabin where it was.
        assert_eq!(lift.floor(), Floor(1));
        assert!(lift.move_to(Floor(10)).is_ok());
    }

    #[test]
    fn reverse_counts_changes() {
        let mut lift = cabin();
        lift.reverse();
        lift.reverse();
        assert_eq!(lift.direction(), Direction::Up);
        assert_eq!(lift.direction_changes(), 2);
    }

    #[test]
    fn travel_step_accumulates_per_direction() {
        let mut lift = cabin();
        lift.travel_step(10);
        lift.travel_step(10);
        lift.reverse();
        lift.travel_step(10);
        assert_eq!(lift.up_travel_secs(), 20);
        assert_eq!(lift.down_travel_secs(), 10);
        assert_eq!(lift.clock(), SimTime(30));
    }

    #[test]
    fn alight_at_removes_only_arrivals() {
        let mut lift = cabin();
        lift.board(req(1, 1, 5, 0));
        lift.board(req(2, 1, 7, 0));
        lift.board(req(3, 1, 5, 0));

        let off = lift.alight_at(Floor(5));
        let ids: Vec<u32> = off.iter().map(|r| r.person().0).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(lift.occupant_count(), 1);
        assert_eq!(lift.occupants()[0].person(), PersonId(2));
    }
}

// ── Analytics ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod analytics {
    use super::*;
    use crate::Sample;

    fn samples(durations: &[u64]) -> Vec<Sample> {
        durations
            .iter()
            .enumerate()
            .map(|(i, &secs)| Sample { person: PersonId(i as u32), secs })
            .collect()
    }

    #[test]
    fn median_of_even_count_averages_middle_pair() {
        let stats = SampleStats::from_samples(&samples(&[5, 10, 15, 20])).unwrap();
        assert_eq!(stats.median_secs, 12.5);
    }

    #[test]
    fn median_of_odd_count_takes_middle() {
        let stats = SampleStats::from_samples(&samples(&[5, 10, 15])).unwrap();
        assert_eq!(stats.median_secs, 10.0);
    }

    #[test]
    fn median_sorts_before_selecting() {
        let stats = SampleStats::from_samples(&samples(&[20, 5, 15, 10])).unwrap();
        assert_eq!(stats.median_secs, 12.5);
    }

    #[test]
    fn max_min_mean() {
        let stats = SampleStats::from_samples(&samples(&[5, 10, 15, 20])).unwrap();
        assert_eq!(stats.max_secs, 20);
        assert_eq!(stats.min_secs, 5);
        assert_eq!(stats.mean_secs, 12.5);
    }

    #[test]
    fn empty_sample_set_has_no_stats() {
        assert!(SampleStats::from_samples(&[]).is_none());
    }

    #[test]
    fn direction_split_percentages() {
        let report = RunReport {
            wait_samples:      vec![],
            travel_samples:    vec![],
            wait_stats:        None,
            travel_stats:      None,
            up_travel_secs:    30,
            down_travel_secs:  10,
            direction_changes: 1,
        };
        assert_eq!(report.direction_split_pct(), Some((75.0, 25.0)));
        assert_eq!(report.total_travel_secs(), 40);
    }

    #[test]
    fn zero_movement_split_is_none() {
        let report = RunReport {
            wait_samples:      vec![],
            travel_samples:    vec![],
            wait_stats:        None,
            travel_stats:      None,
            up_travel_secs:    0,
            down_travel_secs:  0,
            direction_changes: 0,
        };
        assert!(report.direction_split_pct().is_none());
    }

    #[test]
    fn noop_observer_runs_clean() {
        let outcome = LiftSim::new(ten_floor_config(), vec![req(1, 1, 5, 0)])
            .unwrap()
            .run(&mut NoopObserver)
            .unwrap();
        assert_eq!(outcome.report.travel_stats.unwrap().max_secs, 40);
    }
}
