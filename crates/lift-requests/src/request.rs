//! The `Request` type: immutable travel intent plus mutable-once pickup data.

use lift_core::{Direction, Floor, FloorRange, PersonId, SimTime};

use crate::{RequestError, RequestResult};

// ── Request ───────────────────────────────────────────────────────────────────

/// One passenger's travel intent.
///
/// The intent fields (`person`, floors, `request_time`) are fixed at
/// creation.  `entry_time` and `wait_secs` are derived at pickup, set exactly
/// once via [`board`][Self::board], and never changed afterwards — the fields
/// are private so no caller can violate that.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    person:            PersonId,
    calling_floor:     Floor,
    destination_floor: Floor,
    request_time:      SimTime,

    entry_time: Option<SimTime>,
    wait_secs:  Option<u64>,
}

impl Request {
    /// Create a pending request.  Field validity is checked separately by
    /// [`validate_requests`] so a whole batch can be rejected with the first
    /// offending entry named.
    pub fn new(
        person:            PersonId,
        calling_floor:     Floor,
        destination_floor: Floor,
        request_time:      SimTime,
    ) -> Self {
        Self {
            person,
            calling_floor,
            destination_floor,
            request_time,
            entry_time: None,
            wait_secs:  None,
        }
    }

    #[inline]
    pub fn person(&self) -> PersonId {
        self.person
    }

    #[inline]
    pub fn calling_floor(&self) -> Floor {
        self.calling_floor
    }

    #[inline]
    pub fn destination_floor(&self) -> Floor {
        self.destination_floor
    }

    #[inline]
    pub fn request_time(&self) -> SimTime {
        self.request_time
    }

    /// When the passenger entered the cabin, if they have been picked up.
    #[inline]
    pub fn entry_time(&self) -> Option<SimTime> {
        self.entry_time
    }

    /// Seconds spent waiting before pickup, if picked up.
    #[inline]
    pub fn wait_secs(&self) -> Option<u64> {
        self.wait_secs
    }

    /// `true` if the request has been issued by simulated time `now`.
    #[inline]
    pub fn is_active(&self, now: SimTime) -> bool {
        self.request_time <= now
    }

    /// The direction this passenger wants to travel.
    ///
    /// # Panics
    /// Panics in debug mode on the unvalidated `calling == destination` case.
    #[inline]
    pub fn travel_direction(&self) -> Direction {
        debug_assert!(
            self.calling_floor != self.destination_floor,
            "request with equal floors must be rejected at validation"
        );
        if self.destination_floor > self.calling_floor {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    /// Seconds spent in the cabin as of `now`, if the passenger has boarded.
    #[inline]
    pub fn travel_secs(&self, now: SimTime) -> Option<u64> {
        self.entry_time.map(|entry| now.since(entry))
    }

    /// Record the pickup: fix `entry_time` and `wait_secs`, returning the
    /// wait duration in seconds.
    ///
    /// # Panics
    /// Panics in debug mode if called twice, or before the request is active.
    pub fn board(&mut self, now: SimTime) -> u64 {
        debug_assert!(self.entry_time.is_none(), "a request boards exactly once");
        debug_assert!(self.is_active(now), "cannot board before the request is issued");
        let wait = now.since(self.request_time);
        self.entry_time = Some(now);
        self.wait_secs = Some(wait);
        wait
    }
}

// ── Batch validation ──────────────────────────────────────────────────────────

/// Check a request batch against the configured floor range.
///
/// Rejects the first request with an out-of-range floor, equal calling and
/// destination floors, or a person id already seen earlier in the batch.
/// The engine assumes its input has passed this check.
pub fn validate_requests(requests: &[Request], floors: FloorRange) -> RequestResult<()> {
    let mut seen = std::collections::HashSet::with_capacity(requests.len());
    for request in requests {
        let person = request.person();
        for floor in [request.calling_floor(), request.destination_floor()] {
            if !floors.contains(floor) {
                return Err(RequestError::FloorOutOfRange { person, floor, range: floors });
            }
        }
        if request.calling_floor() == request.destination_floor() {
            return Err(RequestError::SameFloor { person, floor: request.calling_floor() });
        }
        if !seen.insert(person) {
            return Err(RequestError::DuplicatePerson(person));
        }
    }
    Ok(())
}
