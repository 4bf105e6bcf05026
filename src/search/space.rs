//! Whole-state-space helpers.
//!
//! The classic puzzle has only 20 safe configurations, so these enumerate eagerly. They exist for
//! cross-checks (admissibility, reachability) rather than for the drivers themselves.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::core::configuration::Configuration;
use crate::core::side::Side;
use crate::puzzle::Puzzle;
use crate::search::movegen::{legal_moves, Order};

/// Every configuration passing [`Puzzle::is_valid`], sorted ascending.
pub fn valid_configurations(puzzle: &Puzzle) -> Vec<Configuration> {
    let mut out = Vec::new();
    for m in 0..=puzzle.missionaries() {
        for c in 0..=puzzle.cannibals() {
            for boat in [Side::Left, Side::Right] {
                let cfg = Configuration::new(m, c, boat);
                if puzzle.is_valid(&cfg) {
                    out.push(cfg);
                }
            }
        }
    }
    out
}

/// All configurations reachable from `start` (including `start` itself).
///
/// An unsafe start reaches nothing.
pub fn reachable(puzzle: &Puzzle, start: Configuration) -> FxHashSet<Configuration> {
    let mut seen: FxHashSet<Configuration> = FxHashSet::default();
    if !puzzle.is_valid(&start) {
        return seen;
    }

    let mut q: VecDeque<Configuration> = VecDeque::new();
    seen.insert(start);
    q.push_back(start);

    while let Some(cfg) = q.pop_front() {
        for (_, next) in legal_moves(puzzle, &cfg, Order::Deterministic) {
            if seen.insert(next) {
                q.push_back(next);
            }
        }
    }
    seen
}
