//! Solved paths and their independent check.

use serde::{Deserialize, Serialize};

use crate::core::configuration::Configuration;
use crate::core::crossing::Crossing;
use crate::puzzle::Puzzle;
use crate::search::tree::{NodeId, SearchTree};

/// A root-to-goal path: `path[i + 1] == apply(path[i], crossings[i])`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub path: Vec<Configuration>,
    pub crossings: Vec<Crossing>,
}

impl Solution {
    pub fn from_node(tree: &SearchTree, id: NodeId) -> Self {
        Self {
            path: tree.reconstruct(id),
            crossings: tree.crossings(id),
        }
    }

    /// Number of boat trips.
    #[inline]
    pub fn trips(&self) -> u32 {
        self.crossings.len() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathDefect {
    Empty,
    WrongStart { found: Configuration },
    NotAtGoal { found: Configuration },
    Unsafe { step: usize, config: Configuration },
    IllegalStep { step: usize },
    CrossingCount { crossings: usize, steps: usize },
}

/// Verify a solution against the rules, independently of how it was found.
pub fn check_solution(
    puzzle: &Puzzle,
    start: Configuration,
    sol: &Solution,
) -> Result<(), PathDefect> {
    let (first, last) = match (sol.path.first(), sol.path.last()) {
        (Some(f), Some(l)) => (*f, *l),
        _ => return Err(PathDefect::Empty),
    };
    if first != start {
        return Err(PathDefect::WrongStart { found: first });
    }
    if !puzzle.is_goal(&last) {
        return Err(PathDefect::NotAtGoal { found: last });
    }
    if sol.crossings.len() + 1 != sol.path.len() {
        return Err(PathDefect::CrossingCount {
            crossings: sol.crossings.len(),
            steps: sol.path.len() - 1,
        });
    }

    for (i, cfg) in sol.path.iter().enumerate() {
        if !puzzle.is_valid(cfg) {
            return Err(PathDefect::Unsafe {
                step: i,
                config: *cfg,
            });
        }
    }

    for (i, (pair, mv)) in sol.path.windows(2).zip(&sol.crossings).enumerate() {
        if puzzle.apply(&pair[0], *mv) != Some(pair[1]) {
            return Err(PathDefect::IllegalStep { step: i });
        }
    }
    Ok(())
}
