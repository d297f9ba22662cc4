//! Strongly typed passenger identifier.
//!
//! `PersonId` is `Copy + Ord + Hash` so it can be used as a map key and sorted
//! collection element without ceremony.  The inner integer is `pub` because it
//! is caller-supplied (it comes straight from the request source) rather than
//! an index the simulator allocates.

use std::fmt;

/// Identifier of one passenger, unique within a request batch.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct PersonId(pub u32);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}
