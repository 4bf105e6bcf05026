use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::side::Side;

/// A puzzle configuration: how many missionaries and cannibals stand on the **left** bank, and
/// which bank the boat is moored at.
///
/// Right-bank counts are never stored; they are `total - left` for the puzzle in use (see
/// [`crate::puzzle::Puzzle::right_bank`]). A `Configuration` is not necessarily legal; legality
/// is decided by [`crate::puzzle::Puzzle::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Configuration {
    pub missionaries: u8,
    pub cannibals: u8,
    pub boat: Side,
}

impl Configuration {
    #[inline]
    pub const fn new(missionaries: u8, cannibals: u8, boat: Side) -> Self {
        Self {
            missionaries,
            cannibals,
            boat,
        }
    }

    /// Sort key for deterministic expansion: (missionaries, cannibals, boat) ascending.
    #[inline]
    pub fn sort_key(&self) -> (u8, u8, Side) {
        (self.missionaries, self.cannibals, self.boat)
    }

    /// People still waiting on the left bank.
    #[inline]
    pub fn left_total(&self) -> u32 {
        u32::from(self.missionaries) + u32::from(self.cannibals)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.missionaries, self.cannibals, self.boat)
    }
}
