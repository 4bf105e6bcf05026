//! Optimal-length oracle.
//!
//! A dedicated, always-deterministic A* that only answers "how many trips does the shortest
//! solution take?". Reports grade every strategy against it; it keeps its own open set and does
//! not go through [`crate::search::best_first`].
//!
//! Semantics:
//! - open set ordered by `(g + h, g, insertion)`;
//! - a configuration is (re)queued only when a strictly cheaper cost to it is found;
//! - closed configurations are never reopened (`h` is consistent);
//! - the first goal popped is optimal (unit edge costs, admissible `h`).

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::configuration::Configuration;
use crate::puzzle::Puzzle;
use crate::search::movegen::{legal_moves, Order};

/// Result of an optimal-length query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimalLength {
    /// Minimal number of boat trips to the goal.
    Trips(u32),
    /// No sequence of legal crossings reaches the goal (or the start itself is unsafe).
    Unreachable,
}

impl OptimalLength {
    #[inline]
    pub fn trips(self) -> Option<u32> {
        match self {
            OptimalLength::Trips(n) => Some(n),
            OptimalLength::Unreachable => None,
        }
    }

    #[inline]
    pub fn is_reachable(self) -> bool {
        matches!(self, OptimalLength::Trips(_))
    }
}

impl fmt::Display for OptimalLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptimalLength::Trips(n) => write!(f, "{n}"),
            OptimalLength::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Shortest number of trips from `start` to the goal.
pub fn optimal_length(puzzle: &Puzzle, start: Configuration) -> OptimalLength {
    if !puzzle.is_valid(&start) {
        return OptimalLength::Unreachable;
    }

    let mut open: BinaryHeap<Reverse<(u32, u32, u64, Configuration)>> = BinaryHeap::new();
    let mut best: FxHashMap<Configuration, u32> = FxHashMap::default();
    let mut closed: FxHashSet<Configuration> = FxHashSet::default();
    let mut tie: u64 = 0;

    best.insert(start, 0);
    open.push(Reverse((puzzle.heuristic(&start), 0, tie, start)));

    while let Some(Reverse((_, g, _, cfg))) = open.pop() {
        if !closed.insert(cfg) {
            continue;
        }
        if puzzle.is_goal(&cfg) {
            trace!(%start, trips = g, closed = closed.len(), "oracle reached goal");
            return OptimalLength::Trips(g);
        }

        for (_, next) in legal_moves(puzzle, &cfg, Order::Deterministic) {
            if closed.contains(&next) {
                continue;
            }
            let g2 = g + 1;
            let improved = best.get(&next).map_or(true, |&known| g2 < known);
            if !improved {
                continue;
            }
            best.insert(next, g2);
            tie += 1;
            open.push(Reverse((g2 + puzzle.heuristic(&next), g2, tie, next)));
        }
    }

    trace!(%start, closed = closed.len(), "oracle exhausted open set");
    OptimalLength::Unreachable
}
