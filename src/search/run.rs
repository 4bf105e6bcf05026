//! Single entry point that runs any [`Strategy`] on a validated [`Scenario`].

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::scenario::{Scenario, SearchError};
use crate::search::annealing::{anneal, AnnealingParams};
use crate::search::best_first::best_first;
use crate::search::metrics::MetricsSink;
use crate::search::movegen::Order;
use crate::search::path::Solution;
use crate::search::strategy::Strategy;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunOptions {
    /// Force random (`Some(true)`) or deterministic (`Some(false)`) child order; `None` keeps
    /// each strategy's default.
    #[serde(default)]
    pub randomize: Option<bool>,
    #[serde(default)]
    pub annealing: AnnealingParams,
}

impl RunOptions {
    fn randomized(&self, strategy: Strategy) -> bool {
        self.randomize
            .unwrap_or_else(|| strategy.randomized_by_default())
    }
}

/// Validate the scenario, then run `strategy` on it.
///
/// `Ok(None)` means the strategy finished without reaching the goal (frontier exhausted or
/// annealing budget spent). An unsafe start is an error and nothing is searched.
pub fn run_strategy<M: MetricsSink>(
    strategy: Strategy,
    scenario: &Scenario,
    options: &RunOptions,
    rng: &mut dyn RngCore,
    metrics: &mut M,
) -> Result<Option<Solution>, SearchError> {
    scenario.validate()?;

    let puzzle = &scenario.puzzle;
    let start = scenario.start;

    let found = match strategy.discipline() {
        Some(discipline) => {
            let order = if options.randomized(strategy) {
                Order::Random(rng)
            } else {
                Order::Deterministic
            };
            best_first(puzzle, start, discipline, order, metrics)
        }
        None => anneal(puzzle, start, &options.annealing, rng, metrics),
    };
    Ok(found)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::core::configuration::Configuration;
    use crate::core::side::Side;
    use crate::puzzle::Puzzle;
    use crate::search::metrics::{NoMetrics, SearchMetrics};

    #[test]
    fn invalid_start_is_rejected_before_searching() {
        let scn = Scenario::new("bad", Puzzle::CLASSIC, Configuration::new(2, 3, Side::Left));
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut m = SearchMetrics::new();
        for s in Strategy::ALL {
            let res = run_strategy(s, &scn, &RunOptions::default(), &mut rng, &mut m);
            assert!(matches!(res, Err(SearchError::InvalidStart { .. })));
        }
        assert_eq!(m, SearchMetrics::default());
    }

    #[test]
    fn forcing_deterministic_order_makes_dfs_repeatable() {
        let scn = Scenario::new("classic", Puzzle::CLASSIC, Puzzle::CLASSIC.start());
        let opts = RunOptions {
            randomize: Some(false),
            ..RunOptions::default()
        };
        let mut a = ChaCha8Rng::seed_from_u64(1);
        let mut b = ChaCha8Rng::seed_from_u64(2);
        let x = run_strategy(Strategy::DepthFirst, &scn, &opts, &mut a, &mut NoMetrics).unwrap();
        let y = run_strategy(Strategy::DepthFirst, &scn, &opts, &mut b, &mut NoMetrics).unwrap();
        assert!(x.is_some());
        assert_eq!(x, y);
    }
}
