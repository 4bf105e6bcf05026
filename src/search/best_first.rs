//! Generic frontier-driven search (BFS, DFS, Greedy Best-First, A*).
//!
//! All four strategies share one loop:
//! 1. record the frontier size, pop a node;
//! 2. skip it if its configuration is already closed, else close it and record an expansion;
//! 3. return its path if it is the goal;
//! 4. otherwise push its children.
//!
//! They differ only in the [`Discipline`] (which node pops next) and in the push filter:
//! A* keeps a best-known cost per configuration and only queues strict improvements, the others
//! queue any child whose configuration is not yet closed.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use crate::core::configuration::Configuration;
use crate::puzzle::Puzzle;
use crate::search::metrics::MetricsSink;
use crate::search::movegen::{successors, Order};
use crate::search::path::Solution;
use crate::search::tree::{NodeId, SearchTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    /// Oldest node first.
    Fifo,
    /// Newest node first.
    Lifo,
    /// Lowest heuristic first.
    Greedy,
    /// Lowest `cost + heuristic` first, then lowest cost.
    AStar,
}

impl Discipline {
    /// Priority key for the ranked disciplines (smaller pops first).
    fn rank(self) -> Option<fn(u32, u32) -> (u32, u32)> {
        match self {
            Discipline::Fifo | Discipline::Lifo => None,
            Discipline::Greedy => Some(|_g: u32, h: u32| (h, 0)),
            Discipline::AStar => Some(|g: u32, h: u32| (g + h, g)),
        }
    }

    #[inline]
    fn tracks_best_cost(self) -> bool {
        matches!(self, Discipline::AStar)
    }
}

/// Nodes waiting to be expanded.
enum Frontier {
    Fifo(VecDeque<NodeId>),
    Lifo(Vec<NodeId>),
    Ranked {
        heap: BinaryHeap<Reverse<(u32, u32, u64, NodeId)>>,
        rank: fn(u32, u32) -> (u32, u32),
        /// Insertion counter: equal ranks pop in FIFO order.
        tie: u64,
    },
}

impl Frontier {
    fn new(discipline: Discipline) -> Self {
        match (discipline, discipline.rank()) {
            (_, Some(rank)) => Frontier::Ranked {
                heap: BinaryHeap::new(),
                rank,
                tie: 0,
            },
            (Discipline::Lifo, None) => Frontier::Lifo(Vec::new()),
            (_, None) => Frontier::Fifo(VecDeque::new()),
        }
    }

    fn push(&mut self, id: NodeId, cost: u32, heuristic: u32) {
        match self {
            Frontier::Fifo(q) => q.push_back(id),
            Frontier::Lifo(s) => s.push(id),
            Frontier::Ranked { heap, rank, tie } => {
                let (primary, secondary) = (*rank)(cost, heuristic);
                *tie += 1;
                heap.push(Reverse((primary, secondary, *tie, id)));
            }
        }
    }

    fn pop(&mut self) -> Option<NodeId> {
        match self {
            Frontier::Fifo(q) => q.pop_front(),
            Frontier::Lifo(s) => s.pop(),
            Frontier::Ranked { heap, .. } => heap.pop().map(|Reverse((_, _, _, id))| id),
        }
    }

    fn len(&self) -> usize {
        match self {
            Frontier::Fifo(q) => q.len(),
            Frontier::Lifo(s) => s.len(),
            Frontier::Ranked { heap, .. } => heap.len(),
        }
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Run a frontier search from `start` to the puzzle goal.
///
/// Returns `None` if the frontier empties without reaching the goal. An unsafe `start` is never
/// queued, so it also yields `None`; callers are expected to validate starts beforehand.
pub fn best_first<M: MetricsSink>(
    puzzle: &Puzzle,
    start: Configuration,
    discipline: Discipline,
    mut order: Order<'_>,
    metrics: &mut M,
) -> Option<Solution> {
    if !puzzle.is_valid(&start) {
        return None;
    }

    let mut tree = SearchTree::new();
    let mut frontier = Frontier::new(discipline);
    let mut closed: FxHashSet<Configuration> = FxHashSet::default();
    let mut best: FxHashMap<Configuration, u32> = FxHashMap::default();

    let root = tree.add_root(start);
    best.insert(start, 0);
    frontier.push(root, 0, puzzle.heuristic(&start));

    debug!(?discipline, %start, random = order.is_random(), "best-first search started");

    while !frontier.is_empty() {
        metrics.record_frontier_size(frontier.len());
        let Some(id) = frontier.pop() else {
            break;
        };

        let cfg = tree.config(id);
        if !closed.insert(cfg) {
            continue;
        }
        metrics.record_expansion();
        trace!(config = %cfg, cost = tree.cost(id), "expand");

        if puzzle.is_goal(&cfg) {
            let sol = Solution::from_node(&tree, id);
            debug!(
                ?discipline,
                trips = sol.trips(),
                closed = closed.len(),
                nodes = tree.len(),
                "goal reached"
            );
            return Some(sol);
        }

        for child in successors(puzzle, &mut tree, id, order.reborrow()) {
            let next = tree.config(child);
            if closed.contains(&next) {
                continue;
            }
            let cost = tree.cost(child);
            if discipline.tracks_best_cost() {
                if best.get(&next).is_some_and(|&known| known <= cost) {
                    continue;
                }
                best.insert(next, cost);
            }
            frontier.push(child, cost, puzzle.heuristic(&next));
        }
    }

    debug!(?discipline, closed = closed.len(), "frontier exhausted");
    None
}
