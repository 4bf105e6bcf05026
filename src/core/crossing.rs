use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::side::Side;

/// One boat trip: `missionaries` and `cannibals` cross from bank `from` to the opposite bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Crossing {
    pub missionaries: u8,
    pub cannibals: u8,
    pub from: Side,
}

impl Crossing {
    #[inline]
    pub const fn new(missionaries: u8, cannibals: u8, from: Side) -> Self {
        Self {
            missionaries,
            cannibals,
            from,
        }
    }

    #[inline]
    pub const fn to(&self) -> Side {
        self.from.opposite()
    }

    /// Head count in the boat. Widened so arbitrary deserialized counts cannot overflow.
    #[inline]
    pub fn passengers(&self) -> u16 {
        u16::from(self.missionaries) + u16::from(self.cannibals)
    }
}

impl fmt::Display for Crossing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match self.from {
            Side::Left => "L->R",
            Side::Right => "R->L",
        };
        write!(f, "{}M {}C {arrow}", self.missionaries, self.cannibals)
    }
}
