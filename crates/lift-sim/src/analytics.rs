//! Efficiency analytics: per-passenger samples and aggregate statistics.
//!
//! The engine records one wait sample at each pickup and one travel sample
//! at each drop-off.  `summarize` folds the sample sets into max / min /
//! mean / median, plus the directional movement totals and direction-change
//! count read from the cabin.  Aggregates over an empty sample set are
//! `None`: a run with no completed pickup has no wait statistics.

use lift_core::PersonId;

use crate::lift::Lift;

// ── Sample ────────────────────────────────────────────────────────────────────

/// One recorded duration for one passenger.  Immutable once recorded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    pub person: PersonId,
    pub secs:   u64,
}

// ── Analytics ─────────────────────────────────────────────────────────────────

/// Accumulates wait and travel samples over one run.
#[derive(Debug, Default)]
pub struct Analytics {
    wait:   Vec<Sample>,
    travel: Vec<Sample>,
}

impl Analytics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the wait duration fixed at a passenger's pickup.
    pub fn record_wait(&mut self, person: PersonId, secs: u64) {
        debug_assert!(
            !self.wait.iter().any(|s| s.person == person),
            "one wait sample per passenger"
        );
        self.wait.push(Sample { person, secs });
    }

    /// Record the cabin time fixed at a passenger's drop-off.
    pub fn record_travel(&mut self, person: PersonId, secs: u64) {
        debug_assert!(
            !self.travel.iter().any(|s| s.person == person),
            "one travel sample per passenger"
        );
        self.travel.push(Sample { person, secs });
    }

    pub fn wait_samples(&self) -> &[Sample] {
        &self.wait
    }

    pub fn travel_samples(&self) -> &[Sample] {
        &self.travel
    }

    /// Fold the samples and the cabin's movement counters into a report.
    pub fn summarize(&self, lift: &Lift) -> RunReport {
        RunReport {
            wait_stats:        SampleStats::from_samples(&self.wait),
            travel_stats:      SampleStats::from_samples(&self.travel),
            wait_samples:      self.wait.clone(),
            travel_samples:    self.travel.clone(),
            up_travel_secs:    lift.up_travel_secs(),
            down_travel_secs:  lift.down_travel_secs(),
            direction_changes: lift.direction_changes(),
        }
    }
}

// ── SampleStats ───────────────────────────────────────────────────────────────

/// Aggregate statistics over one sample set.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SampleStats {
    pub max_secs:    u64,
    pub min_secs:    u64,
    pub mean_secs:   f64,
    pub median_secs: f64,
}

impl SampleStats {
    /// Compute aggregates, or `None` for an empty sample set.
    ///
    /// Median of an even-sized set is the mean of the two middle values.
    pub fn from_samples(samples: &[Sample]) -> Option<SampleStats> {
        if samples.is_empty() {
            return None;
        }
        let mut secs: Vec<u64> = samples.iter().map(|s| s.secs).collect();
        secs.sort_unstable();

        let n = secs.len();
        let median_secs = if n % 2 == 0 {
            (secs[n / 2 - 1] + secs[n / 2]) as f64 / 2.0
        } else {
            secs[n / 2] as f64
        };

        Some(SampleStats {
            max_secs:    secs[n - 1],
            min_secs:    secs[0],
            mean_secs:   secs.iter().sum::<u64>() as f64 / n as f64,
            median_secs,
        })
    }
}

// ── RunReport ─────────────────────────────────────────────────────────────────

/// The final aggregate report of one run.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// Wait duration per picked-up passenger, in pickup order.
    pub wait_samples: Vec<Sample>,

    /// Cabin duration per delivered passenger, in drop-off order.
    pub travel_samples: Vec<Sample>,

    /// `None` if no passenger was ever picked up.
    pub wait_stats: Option<SampleStats>,

    /// `None` if no passenger ever completed a trip.
    pub travel_stats: Option<SampleStats>,

    pub up_travel_secs:    u64,
    pub down_travel_secs:  u64,
    pub direction_changes: u32,
}

impl RunReport {
    /// Total simulated movement time, excluding idle polling.
    #[inline]
    pub fn total_travel_secs(&self) -> u64 {
        self.up_travel_secs + self.down_travel_secs
    }

    /// Percentage split `(up, down)` of movement time, or `None` if the
    /// cabin never moved.
    pub fn direction_split_pct(&self) -> Option<(f64, f64)> {
        let total = self.total_travel_secs();
        if total == 0 {
            return None;
        }
        let up = self.up_travel_secs as f64 / total as f64 * 100.0;
        Some((up, 100.0 - up))
    }
}
