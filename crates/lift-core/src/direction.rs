//! Elevator travel direction.
//!
//! A two-valued enum rather than a free-form label: there is no third state
//! to mis-set, and the compiler checks match exhaustiveness at every decision
//! point in the scan.

use std::fmt;

use crate::Floor;

/// The direction the elevator is (or a passenger wants to be) moving.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// The opposite direction.
    #[inline]
    pub fn flip(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Floor delta of one travel step in this direction.
    #[inline]
    pub fn step(self) -> i32 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }

    /// `true` if `floor` lies strictly further than `from` in this direction.
    ///
    /// This is the predicate behind both pickup eligibility ("is the caller
    /// headed my way?") and the reversal check ("is there demand beyond me?").
    #[inline]
    pub fn is_beyond(self, floor: Floor, from: Floor) -> bool {
        match self {
            Direction::Up => floor > from,
            Direction::Down => floor < from,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "UP"),
            Direction::Down => write!(f, "DOWN"),
        }
    }
}
