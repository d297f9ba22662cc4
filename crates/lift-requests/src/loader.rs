//! CSV request loader.
//!
//! # CSV format
//!
//! One row per passenger request.  Supply order is irrelevant to correctness
//! (the engine filters by request time internally), but file order is kept:
//! it decides encounter order when several passengers wait at one floor and
//! the cabin cannot take them all.
//!
//! ```csv
//! person_id,calling_floor,destination_floor,request_time_secs
//! 1,1,5,0
//! 2,6,1,0
//! 3,2,8,45
//! ```
//!
//! Malformed rows (non-numeric fields, out-of-range floors, equal floors,
//! duplicate ids) are rejected here — nothing invalid reaches the engine.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{Floor, FloorRange, PersonId, SimTime};

use crate::request::{validate_requests, Request};
use crate::{RequestError, RequestResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RequestRecord {
    person_id:          u32,
    calling_floor:      i32,
    destination_floor:  i32,
    request_time_secs:  u64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate a request batch from a CSV file.
pub fn load_requests_csv(path: &Path, floors: FloorRange) -> RequestResult<Vec<Request>> {
    let file = std::fs::File::open(path).map_err(RequestError::Io)?;
    load_requests_reader(file, floors)
}

/// Like [`load_requests_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded sample batches.
pub fn load_requests_reader<R: Read>(
    reader: R,
    floors: FloorRange,
) -> RequestResult<Vec<Request>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut requests = Vec::new();
    for result in csv_reader.deserialize::<RequestRecord>() {
        let row = result.map_err(|e| RequestError::Parse(e.to_string()))?;
        requests.push(Request::new(
            PersonId(row.person_id),
            Floor(row.calling_floor),
            Floor(row.destination_floor),
            SimTime(row.request_time_secs),
        ));
    }

    validate_requests(&requests, floors)?;
    Ok(requests)
}
