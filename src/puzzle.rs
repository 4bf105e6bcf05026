use crate::core::configuration::Configuration;
use crate::core::crossing::Crossing;
use crate::core::side::Side;

/// Puzzle dimensions: how many missionaries and cannibals exist in total, and how many people the
/// boat carries.
///
/// Every rule below takes the puzzle explicitly instead of reading process-wide constants.
/// The tools only ever use [`Puzzle::CLASSIC`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    missionaries: u8,
    cannibals: u8,
    capacity: u8,
}

impl Puzzle {
    /// Three missionaries, three cannibals, a two-seat boat.
    pub const CLASSIC: Puzzle = Puzzle {
        missionaries: 3,
        cannibals: 3,
        capacity: 2,
    };

    pub const fn new(missionaries: u8, cannibals: u8, capacity: u8) -> Self {
        assert!(capacity >= 1);
        Self {
            missionaries,
            cannibals,
            capacity,
        }
    }

    #[inline]
    pub fn missionaries(&self) -> u8 {
        self.missionaries
    }

    #[inline]
    pub fn cannibals(&self) -> u8 {
        self.cannibals
    }

    #[inline]
    pub fn capacity(&self) -> u8 {
        self.capacity
    }

    /// Everyone on the left bank, boat on the left.
    #[inline]
    pub fn start(&self) -> Configuration {
        Configuration::new(self.missionaries, self.cannibals, Side::Left)
    }

    /// The single goal: left bank empty, boat on the right.
    #[inline]
    pub fn goal(&self) -> Configuration {
        Configuration::new(0, 0, Side::Right)
    }

    /// `(missionaries, cannibals)` on the right bank, or `None` if the left counts exceed the
    /// totals.
    #[inline]
    pub fn right_bank(&self, cfg: &Configuration) -> Option<(u8, u8)> {
        Some((
            self.missionaries.checked_sub(cfg.missionaries)?,
            self.cannibals.checked_sub(cfg.cannibals)?,
        ))
    }

    /// True iff the configuration is in bounds and neither bank has missionaries outnumbered by
    /// cannibals.
    pub fn is_valid(&self, cfg: &Configuration) -> bool {
        let Some((m_right, c_right)) = self.right_bank(cfg) else {
            return false;
        };
        bank_is_safe(cfg.missionaries, cfg.cannibals) && bank_is_safe(m_right, c_right)
    }

    #[inline]
    pub fn is_goal(&self, cfg: &Configuration) -> bool {
        *cfg == self.goal()
    }

    /// Every `(missionaries, cannibals)` load with `1 <= m + c <= capacity`.
    ///
    /// Order: `(1,0), (2,0), .., (0,1), (0,2), .., (1,1), ..` so that the classic catalog reads
    /// `(1,0), (2,0), (0,1), (0,2), (1,1)`.
    pub fn loads(&self) -> Vec<(u8, u8)> {
        let cap = self.capacity;
        let mut out = Vec::new();
        for m in 1..=cap {
            out.push((m, 0));
        }
        for c in 1..=cap {
            out.push((0, c));
        }
        for m in 1..cap {
            for c in 1..=(cap - m) {
                out.push((m, c));
            }
        }
        out
    }

    /// All crossings the boat could attempt from `cfg`, ignoring legality of the result.
    pub fn catalog(&self, cfg: &Configuration) -> Vec<Crossing> {
        self.loads()
            .into_iter()
            .map(|(m, c)| Crossing::new(m, c, cfg.boat))
            .collect()
    }

    /// Apply a crossing: move the passengers away from the boat's bank and flip the boat.
    ///
    /// Returns `None` if the crossing departs from the wrong bank, is empty or over capacity,
    /// takes people who are not there, or produces an unsafe configuration.
    pub fn apply(&self, cfg: &Configuration, crossing: Crossing) -> Option<Configuration> {
        if crossing.from != cfg.boat {
            return None;
        }
        let load = crossing.passengers();
        if load == 0 || load > u16::from(self.capacity) {
            return None;
        }

        let (m, c) = match cfg.boat {
            Side::Left => (
                cfg.missionaries.checked_sub(crossing.missionaries)?,
                cfg.cannibals.checked_sub(crossing.cannibals)?,
            ),
            Side::Right => (
                cfg.missionaries.checked_add(crossing.missionaries)?,
                cfg.cannibals.checked_add(crossing.cannibals)?,
            ),
        };

        let next = Configuration::new(m, c, cfg.boat.opposite());
        if self.is_valid(&next) {
            Some(next)
        } else {
            None
        }
    }

    /// Lower bound on the remaining boat trips: `ceil((m + c) / capacity)` over the left bank.
    ///
    /// Admissible and consistent: one trip lowers the left-bank head count by at most
    /// `capacity`.
    #[inline]
    pub fn heuristic(&self, cfg: &Configuration) -> u32 {
        cfg.left_total().div_ceil(u32::from(self.capacity))
    }
}

impl Default for Puzzle {
    fn default() -> Self {
        Puzzle::CLASSIC
    }
}

#[inline]
fn bank_is_safe(missionaries: u8, cannibals: u8) -> bool {
    missionaries == 0 || cannibals <= missionaries
}
