use rand::seq::SliceRandom;
use rand::RngCore;

use crate::core::configuration::Configuration;
use crate::core::crossing::Crossing;
use crate::puzzle::Puzzle;
use crate::search::tree::{NodeId, SearchTree};

/// Order in which children are produced.
///
/// The order never changes *which* children exist, only which equally valid path a driver finds
/// and how many nodes it touches on the way.
pub enum Order<'a> {
    /// Sorted by (missionaries, cannibals, boat) ascending.
    Deterministic,
    /// Uniformly shuffled with the caller's random source.
    Random(&'a mut dyn RngCore),
}

impl Order<'_> {
    #[inline]
    pub fn is_random(&self) -> bool {
        matches!(self, Order::Random(_))
    }

    /// Reborrow so the same order can be used for many expansions.
    #[inline]
    pub fn reborrow(&mut self) -> Order<'_> {
        match self {
            Order::Deterministic => Order::Deterministic,
            Order::Random(rng) => Order::Random(&mut **rng),
        }
    }
}

/// All legal crossings from `cfg` with the configuration each one leads to.
pub fn legal_moves(
    puzzle: &Puzzle,
    cfg: &Configuration,
    order: Order<'_>,
) -> Vec<(Crossing, Configuration)> {
    let mut out: Vec<(Crossing, Configuration)> = puzzle
        .catalog(cfg)
        .into_iter()
        .filter_map(|mv| puzzle.apply(cfg, mv).map(|next| (mv, next)))
        .collect();

    match order {
        Order::Deterministic => out.sort_by_key(|(_, next)| next.sort_key()),
        Order::Random(rng) => out.shuffle(rng),
    }
    out
}

/// Expand `parent`: append one child node per legal crossing and return their ids in `order`.
pub fn successors(
    puzzle: &Puzzle,
    tree: &mut SearchTree,
    parent: NodeId,
    order: Order<'_>,
) -> Vec<NodeId> {
    let cfg = tree.config(parent);
    legal_moves(puzzle, &cfg, order)
        .into_iter()
        .map(|(mv, next)| tree.add_child(parent, mv, next))
        .collect()
}
