//! The five graded search strategies.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::search::best_first::Discipline;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    #[serde(rename = "bfs")]
    BreadthFirst,
    #[serde(rename = "dfs")]
    DepthFirst,
    #[serde(rename = "greedy")]
    Greedy,
    #[serde(rename = "astar")]
    AStar,
    #[serde(rename = "annealing")]
    SimulatedAnnealing,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::Greedy,
        Strategy::AStar,
        Strategy::SimulatedAnnealing,
    ];

    /// Short machine name, as accepted on the command line and in config files.
    pub fn key(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "bfs",
            Strategy::DepthFirst => "dfs",
            Strategy::Greedy => "greedy",
            Strategy::AStar => "astar",
            Strategy::SimulatedAnnealing => "annealing",
        }
    }

    /// Human-readable name for report titles.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "BFS",
            Strategy::DepthFirst => "DFS",
            Strategy::Greedy => "Greedy Best-First",
            Strategy::AStar => "A*",
            Strategy::SimulatedAnnealing => "Simulated Annealing",
        }
    }

    pub fn from_key(key: &str) -> Option<Strategy> {
        Strategy::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Frontier discipline, or `None` for the single-state annealer.
    pub fn discipline(self) -> Option<Discipline> {
        match self {
            Strategy::BreadthFirst => Some(Discipline::Fifo),
            Strategy::DepthFirst => Some(Discipline::Lifo),
            Strategy::Greedy => Some(Discipline::Greedy),
            Strategy::AStar => Some(Discipline::AStar),
            Strategy::SimulatedAnnealing => None,
        }
    }

    /// Whether children are shuffled unless the caller overrides it.
    ///
    /// BFS and A* expand deterministically; DFS, Greedy and annealing explore randomly so that
    /// repeated runs show their variance.
    pub fn randomized_by_default(self) -> bool {
        !matches!(self, Strategy::BreadthFirst | Strategy::AStar)
    }

    /// Whether the first path found is guaranteed to be shortest.
    pub fn is_optimal(self) -> bool {
        matches!(self, Strategy::BreadthFirst | Strategy::AStar)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for s in Strategy::ALL {
            assert_eq!(Strategy::from_key(s.key()), Some(s));
            let json = serde_json::to_string(&s).unwrap();
            assert_eq!(json, format!("\"{}\"", s.key()));
        }
        assert_eq!(Strategy::from_key("ida"), None);
    }
}
