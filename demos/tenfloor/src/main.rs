//! tenfloor — console demo for the rust_lift elevator simulator.
//!
//! Runs the reference ten-floor building (capacity 8, 10 s per floor) over a
//! request batch, printing progress as the scan unfolds and writing the
//! floor-visit trace plus the aggregate report to `output/tenfloor/`.
//!
//! Pass a CSV path to simulate your own batch:
//!
//! ```text
//! cargo run -p tenfloor -- my_requests.csv
//! ```

use std::io::Cursor;
use std::path::Path;

use anyhow::Result;

use lift_core::{Direction, Floor, LiftConfig, PersonId, SimTime};
use lift_output::{summary_rows, CsvWriter, OutputWriter, RunOutputObserver};
use lift_requests::{load_requests_csv, load_requests_reader};
use lift_sim::{FloorSnapshot, LiftSim, RunObserver, RunReport};

// ── Embedded sample batch ─────────────────────────────────────────────────────

// Ten passengers over a simulated hour and a half: both directions, a
// staggered arrival tail, and enough overlap to force reversals.
const REQUESTS_CSV: &str = "\
person_id,calling_floor,destination_floor,request_time_secs\n\
1,1,5,0\n\
2,6,1,0\n\
3,2,8,4\n\
4,9,3,10\n\
5,4,10,22\n\
6,10,2,30\n\
7,3,7,60\n\
8,7,1,75\n\
9,1,9,80\n\
10,5,6,90\n\
";

// ── Progress observer ─────────────────────────────────────────────────────────

/// Prints the scan as it happens and forwards trace/report writes to the
/// output observer.
struct ProgressObserver<W: OutputWriter> {
    inner: RunOutputObserver<W>,
}

impl<W: OutputWriter> ProgressObserver<W> {
    fn new(inner: RunOutputObserver<W>) -> Self {
        Self { inner }
    }
}

impl<W: OutputWriter> RunObserver for ProgressObserver<W> {
    fn on_idle(&mut self, now: SimTime) {
        println!("[{now}] no active requests — waiting");
    }

    fn on_floor_visit(&mut self, snapshot: &FloorSnapshot) {
        println!("[{}] lift reaches floor {}", snapshot.time, snapshot.floor);
        self.inner.on_floor_visit(snapshot);
    }

    fn on_pickup(&mut self, now: SimTime, person: PersonId, floor: Floor) {
        println!("[{now}] picking up passenger {person} at floor {floor}");
    }

    fn on_dropoff(&mut self, now: SimTime, person: PersonId, floor: Floor) {
        println!("[{now}] dropping off passenger {person} at floor {floor}");
    }

    fn on_capacity_deferral(&mut self, now: SimTime, person: PersonId, floor: Floor) {
        println!("[{now}] cabin full — {person} stays queued at floor {floor}");
    }

    fn on_direction_change(&mut self, now: SimTime, direction: Direction) {
        println!("[{now}] switching direction to {direction}");
    }

    fn on_run_end(&mut self, report: &RunReport) {
        self.inner.on_run_end(report);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = LiftConfig::default();

    // 1. Load the request batch: a CSV path argument, or the embedded sample.
    let requests = match std::env::args().nth(1) {
        Some(path) => load_requests_csv(Path::new(&path), config.floors)?,
        None => load_requests_reader(Cursor::new(REQUESTS_CSV), config.floors)?,
    };

    println!("=== tenfloor — rust_lift elevator simulator ===");
    println!(
        "Floors: {}  |  Capacity: {}  |  Requests: {}",
        config.floors,
        config.capacity,
        requests.len()
    );
    println!();

    // 2. Set up output.
    let out_dir = Path::new("output/tenfloor");
    std::fs::create_dir_all(out_dir)?;
    let writer = CsvWriter::new(out_dir)?;
    let mut observer = ProgressObserver::new(RunOutputObserver::new(writer));

    // 3. Run the batch to completion.
    let outcome = LiftSim::new(config, requests)?.run(&mut observer)?;

    if let Some(e) = observer.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Aggregate report.
    println!();
    println!(
        "Run complete: {} floor visits written to {}",
        outcome.snapshots.len(),
        out_dir.join("trace.csv").display()
    );
    println!();
    println!("{:<22} {:>10}", "metric", "value");
    println!("{}", "-".repeat(33));
    for row in summary_rows(&outcome.report) {
        let value = if row.value.is_empty() { "-" } else { row.value.as_str() };
        println!("{:<22} {:>10}", row.metric, value);
    }

    Ok(())
}
