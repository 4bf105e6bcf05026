//! Simulated annealing over single configurations.
//!
//! The annealer keeps one current node (plus the lowest-energy node seen) and walks the state
//! graph by drawing a uniformly random legal crossing each iteration. Improving or equal moves
//! are always taken; worsening moves are taken with a probability given by the [`Acceptance`]
//! rule at the current temperature. The temperature follows a [`Cooling`] schedule and is
//! partially restored ("reheat") when the walk reaches a configuration with no legal move.
//!
//! Which cooling, acceptance and energy to use is configuration, not a fixed algorithm: the
//! defaults reproduce a linear-decay acceptance with a workload energy and geometric cooling.
//!
//! Termination: the goal is reached (checked on the start and after every accepted move),
//! `max_iterations` is spent, or the temperature drops to `t_min`. The last two return `None`.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::configuration::Configuration;
use crate::core::side::Side;
use crate::puzzle::Puzzle;
use crate::search::metrics::MetricsSink;
use crate::search::movegen::{legal_moves, Order};
use crate::search::path::Solution;
use crate::search::tree::SearchTree;

/// Temperature decay applied after every iteration that draws a move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cooling {
    /// `T <- T * alpha`, `alpha` in `(0, 1)`.
    Geometric { alpha: f64 },
    /// `T <- max(0, T - decrement)`.
    Linear { decrement: f64 },
}

impl Cooling {
    #[inline]
    fn next(self, t: f64) -> f64 {
        match self {
            Cooling::Geometric { alpha } => t * alpha,
            Cooling::Linear { decrement } => (t - decrement).max(0.0),
        }
    }
}

/// Probability of taking a worsening move with energy increase `delta > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Acceptance {
    /// `P = max(0, 1 - delta / T)`.
    LinearDecay,
    /// Metropolis / Boltzmann: `P = exp(-delta / T)`.
    Metropolis,
}

impl Acceptance {
    pub fn probability(self, delta: f64, t: f64) -> f64 {
        if delta <= 0.0 {
            return 1.0;
        }
        if t <= FROZEN {
            return 0.0;
        }
        match self {
            Acceptance::LinearDecay => (1.0 - delta / t).max(0.0),
            Acceptance::Metropolis => (-delta / t).exp(),
        }
    }
}

/// Cost proxy minimised by the annealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Energy {
    /// People left on the left bank, plus one while the boat is on the left.
    Workload,
    /// The admissible trip estimate [`Puzzle::heuristic`].
    Heuristic,
}

impl Energy {
    pub fn of(self, puzzle: &Puzzle, cfg: &Configuration) -> f64 {
        match self {
            Energy::Workload => {
                let boat = if cfg.boat == Side::Left { 1 } else { 0 };
                f64::from(cfg.left_total() + boat)
            }
            Energy::Heuristic => f64::from(puzzle.heuristic(cfg)),
        }
    }
}

/// Below this temperature no worsening move is accepted.
const FROZEN: f64 = 1e-9;

fn default_initial_temperature() -> f64 {
    10.0
}

fn default_min_temperature() -> f64 {
    0.1
}

fn default_cooling() -> Cooling {
    Cooling::Geometric { alpha: 0.995 }
}

fn default_acceptance() -> Acceptance {
    Acceptance::LinearDecay
}

fn default_energy() -> Energy {
    Energy::Workload
}

fn default_max_iterations() -> u64 {
    50_000
}

fn default_reheat() -> f64 {
    1.2
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnealingParams {
    #[serde(default = "default_initial_temperature")]
    pub initial_temperature: f64,
    #[serde(default = "default_min_temperature")]
    pub min_temperature: f64,
    #[serde(default = "default_cooling")]
    pub cooling: Cooling,
    #[serde(default = "default_acceptance")]
    pub acceptance: Acceptance,
    #[serde(default = "default_energy")]
    pub energy: Energy,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u64,
    /// Dead-end reheat factor: `T <- min(T0, T * reheat)`.
    #[serde(default = "default_reheat")]
    pub reheat: f64,
}

impl Default for AnnealingParams {
    fn default() -> Self {
        Self {
            initial_temperature: default_initial_temperature(),
            min_temperature: default_min_temperature(),
            cooling: default_cooling(),
            acceptance: default_acceptance(),
            energy: default_energy(),
            max_iterations: default_max_iterations(),
            reheat: default_reheat(),
        }
    }
}

impl AnnealingParams {
    /// Reject parameter sets that cannot terminate sensibly.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err("initial_temperature must be finite and > 0".to_string());
        }
        if !(self.min_temperature.is_finite() && self.min_temperature >= 0.0) {
            return Err("min_temperature must be finite and >= 0".to_string());
        }
        match self.cooling {
            Cooling::Geometric { alpha } if !(alpha > 0.0 && alpha < 1.0) => {
                return Err(format!("geometric alpha must be in (0, 1), got {alpha}"));
            }
            Cooling::Linear { decrement } if !(decrement.is_finite() && decrement > 0.0) => {
                return Err(format!("linear decrement must be > 0, got {decrement}"));
            }
            _ => {}
        }
        if !(self.reheat.is_finite() && self.reheat >= 1.0) {
            return Err("reheat must be finite and >= 1".to_string());
        }
        Ok(())
    }
}

/// Anneal from `start` towards the goal.
///
/// Every iteration records one expansion and a frontier size of 1. Returns the path to the goal
/// as walked (accepted moves only), or `None` when the budget or temperature runs out first.
pub fn anneal<M: MetricsSink>(
    puzzle: &Puzzle,
    start: Configuration,
    params: &AnnealingParams,
    rng: &mut dyn RngCore,
    metrics: &mut M,
) -> Option<Solution> {
    if !puzzle.is_valid(&start) {
        return None;
    }

    let energy = |cfg: &Configuration| params.energy.of(puzzle, cfg);

    let mut tree = SearchTree::new();
    let mut current = tree.add_root(start);
    let mut best = current;
    let mut t = params.initial_temperature;
    let mut k: u64 = 0;

    debug!(%start, ?params, "annealing started");

    while k < params.max_iterations && t > params.min_temperature {
        metrics.record_frontier_size(1);
        metrics.record_expansion();

        let cfg = tree.config(current);
        if puzzle.is_goal(&cfg) {
            let sol = Solution::from_node(&tree, current);
            debug!(iterations = k, trips = sol.trips(), temperature = t, "goal reached");
            return Some(sol);
        }

        let Some((mv, next)) = legal_moves(puzzle, &cfg, Order::Random(&mut *rng))
            .into_iter()
            .next()
        else {
            t = (t * params.reheat).min(params.initial_temperature);
            trace!(config = %cfg, temperature = t, "dead end, reheating");
            k += 1;
            continue;
        };

        let delta = energy(&next) - energy(&cfg);
        let p = params.acceptance.probability(delta, t);
        if delta <= 0.0 || rng.gen::<f64>() < p {
            current = tree.add_child(current, mv, next);
            if puzzle.is_goal(&next) {
                let sol = Solution::from_node(&tree, current);
                debug!(iterations = k + 1, trips = sol.trips(), temperature = t, "goal reached");
                return Some(sol);
            }
            if energy(&next) < energy(&tree.config(best)) {
                best = current;
            }
        }

        t = params.cooling.next(t);
        k += 1;
    }

    debug!(
        iterations = k,
        temperature = t,
        best = %tree.config(best),
        "annealing stopped without reaching the goal"
    );
    None
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::search::metrics::SearchMetrics;
    use crate::search::path::check_solution;

    #[test]
    fn linear_decay_acceptance() {
        let a = Acceptance::LinearDecay;
        assert_eq!(a.probability(-1.0, 5.0), 1.0);
        assert_eq!(a.probability(0.0, 0.0), 1.0);
        assert!((a.probability(1.0, 4.0) - 0.75).abs() < 1e-12);
        assert_eq!(a.probability(10.0, 4.0), 0.0);
        assert_eq!(a.probability(1.0, 0.0), 0.0);
    }

    #[test]
    fn metropolis_acceptance() {
        let a = Acceptance::Metropolis;
        assert!((a.probability(2.0, 2.0) - (-1.0f64).exp()).abs() < 1e-12);
        assert!(a.probability(1.0, 100.0) > a.probability(1.0, 1.0));
    }

    #[test]
    fn cooling_schedules() {
        let g = Cooling::Geometric { alpha: 0.5 };
        assert_eq!(g.next(8.0), 4.0);
        let l = Cooling::Linear { decrement: 3.0 };
        assert_eq!(l.next(8.0), 5.0);
        assert_eq!(l.next(2.0), 0.0);
    }

    #[test]
    fn workload_energy_penalises_left_boat() {
        let p = Puzzle::CLASSIC;
        assert_eq!(Energy::Workload.of(&p, &p.start()), 7.0);
        assert_eq!(
            Energy::Workload.of(&p, &Configuration::new(3, 3, Side::Right)),
            6.0
        );
        assert_eq!(Energy::Workload.of(&p, &p.goal()), 0.0);
        assert_eq!(Energy::Heuristic.of(&p, &p.start()), 3.0);
    }

    #[test]
    fn default_params_validate() {
        assert!(AnnealingParams::default().validate().is_ok());
        let bad = AnnealingParams {
            cooling: Cooling::Geometric { alpha: 1.5 },
            ..AnnealingParams::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn found_paths_are_legal_and_seeded_runs_repeat() {
        let p = Puzzle::CLASSIC;
        let params = AnnealingParams::default();
        let mut solved = 0;
        for seed in 0..20u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut m = SearchMetrics::new();
            let first = anneal(&p, p.start(), &params, &mut rng, &mut m);

            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let again = anneal(&p, p.start(), &params, &mut rng, &mut SearchMetrics::new());
            assert_eq!(first, again);

            assert_eq!(m.max_frontier, 1);
            assert!(m.nodes_expanded <= params.max_iterations);
            if let Some(sol) = first {
                assert_eq!(check_solution(&p, p.start(), &sol), Ok(()));
                assert!(sol.trips() >= 11);
                solved += 1;
            }
        }
        assert!(solved > 0);
    }

    #[test]
    fn goal_reached_on_the_last_iteration_is_returned() {
        let p = Puzzle::CLASSIC;
        let params = AnnealingParams {
            max_iterations: 1,
            ..AnnealingParams::default()
        };
        let start = Configuration::new(0, 2, Side::Left);
        let mut hits = 0;
        for seed in 0..20u64 {
            // The single iteration draws exactly this shuffle.
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let first = legal_moves(&p, &start, Order::Random(&mut rng))
                .into_iter()
                .next()
                .map(|(_, next)| next);
            let steps_onto_goal = first == Some(p.goal());

            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut m = SearchMetrics::new();
            let found = anneal(&p, start, &params, &mut rng, &mut m);
            assert_eq!(found.is_some(), steps_onto_goal, "seed {seed}");
            assert_eq!(m.nodes_expanded, 1);
            if let Some(sol) = found {
                assert_eq!(sol.trips(), 1);
                assert_eq!(check_solution(&p, start, &sol), Ok(()));
                hits += 1;
            }
        }
        assert!(hits > 0);
    }

    #[test]
    fn dead_end_start_runs_out_of_budget() {
        let p = Puzzle::CLASSIC;
        let params = AnnealingParams {
            max_iterations: 100,
            ..AnnealingParams::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut m = SearchMetrics::new();
        let stuck = Configuration::new(0, 0, Side::Left);
        assert!(anneal(&p, stuck, &params, &mut rng, &mut m).is_none());
        assert_eq!(m.nodes_expanded, 100);
    }
}
