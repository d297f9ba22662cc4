//! Plain data rows written by output backends, and their conversions from
//! engine types.

use lift_sim::{FloorSnapshot, RunReport, SampleStats};

// ── TraceRow ──────────────────────────────────────────────────────────────────

/// One elevator state row, written per floor visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRow {
    pub time_secs: u64,
    pub floor:     i32,
    pub direction: String,
    /// Occupant ids in boarding order, joined with `,` (one cell).
    pub occupants: String,
    /// Direction-ordered outstanding floors, joined with `,` (one cell).
    pub floor_queue: String,
}

impl TraceRow {
    pub fn from_snapshot(snapshot: &FloorSnapshot) -> Self {
        let occupants = snapshot
            .occupants
            .iter()
            .map(|p| p.0.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let floor_queue = snapshot
            .floor_queue
            .iter()
            .map(|f| f.0.to_string())
            .collect::<Vec<_>>()
            .join(",");
        Self {
            time_secs: snapshot.time.0,
            floor:     snapshot.floor.0,
            direction: snapshot.direction.to_string(),
            occupants,
            floor_queue,
        }
    }
}

// ── PassengerRow ──────────────────────────────────────────────────────────────

/// Per-passenger timings from the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassengerRow {
    pub person_id: u32,
    pub wait_secs: u64,
    /// `None` only for a passenger picked up but never delivered, which a
    /// completed run does not produce.
    pub travel_secs: Option<u64>,
}

/// Join wait and travel samples per passenger, in pickup order.
pub fn passenger_rows(report: &RunReport) -> Vec<PassengerRow> {
    report
        .wait_samples
        .iter()
        .map(|wait| PassengerRow {
            person_id:   wait.person.0,
            wait_secs:   wait.secs,
            travel_secs: report
                .travel_samples
                .iter()
                .find(|t| t.person == wait.person)
                .map(|t| t.secs),
        })
        .collect()
}

// ── SummaryRow ────────────────────────────────────────────────────────────────

/// One `metric,value` pair of the aggregate report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub metric: &'static str,
    /// Pre-formatted value; empty for aggregates of an empty sample set.
    pub value: String,
}

fn stat_rows(prefix: [&'static str; 4], stats: Option<SampleStats>) -> Vec<SummaryRow> {
    let [max, min, mean, median] = prefix;
    match stats {
        Some(s) => vec![
            SummaryRow { metric: max,    value: s.max_secs.to_string() },
            SummaryRow { metric: min,    value: s.min_secs.to_string() },
            SummaryRow { metric: mean,   value: s.mean_secs.to_string() },
            SummaryRow { metric: median, value: s.median_secs.to_string() },
        ],
        None => [max, min, mean, median]
            .into_iter()
            .map(|metric| SummaryRow { metric, value: String::new() })
            .collect(),
    }
}

/// Flatten the aggregate report into `metric,value` rows.
pub fn summary_rows(report: &RunReport) -> Vec<SummaryRow> {
    let mut rows = stat_rows(
        ["wait_max_secs", "wait_min_secs", "wait_mean_secs", "wait_median_secs"],
        report.wait_stats,
    );
    rows.extend(stat_rows(
        ["travel_max_secs", "travel_min_secs", "travel_mean_secs", "travel_median_secs"],
        report.travel_stats,
    ));

    rows.push(SummaryRow {
        metric: "up_travel_secs",
        value:  report.up_travel_secs.to_string(),
    });
    rows.push(SummaryRow {
        metric: "down_travel_secs",
        value:  report.down_travel_secs.to_string(),
    });

    let (up_pct, down_pct) = match report.direction_split_pct() {
        Some((up, down)) => (format!("{up:.2}"), format!("{down:.2}")),
        None => (String::new(), String::new()),
    };
    rows.push(SummaryRow { metric: "up_travel_pct", value: up_pct });
    rows.push(SummaryRow { metric: "down_travel_pct", value: down_pct });

    rows.push(SummaryRow {
        metric: "direction_changes",
        value:  report.direction_changes.to_string(),
    });
    rows
}
