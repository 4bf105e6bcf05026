use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use river_crossing::scenarios;
use river_crossing::search::metrics::SearchMetrics;
use river_crossing::search::oracle::optimal_length;
use river_crossing::search::path::check_solution;
use river_crossing::search::run::{run_strategy, RunOptions};
use river_crossing::search::strategy::Strategy;

#[test]
fn every_strategy_returns_legal_paths_on_solvable_cases() {
    let opts = RunOptions::default();
    for scn in scenarios::battery() {
        if scn.validate().is_err() || !optimal_length(&scn.puzzle, scn.start).is_reachable() {
            continue;
        }
        for strategy in Strategy::ALL {
            let mut rng = ChaCha8Rng::seed_from_u64(3);
            let mut metrics = SearchMetrics::new();
            let found = run_strategy(strategy, scn, &opts, &mut rng, &mut metrics)
                .expect("valid case");
            // Annealing may give up; the frontier strategies always succeed.
            if strategy != Strategy::SimulatedAnnealing {
                assert!(found.is_some(), "{strategy} on {}", scn.name);
            }
            if let Some(sol) = found {
                assert_eq!(check_solution(&scn.puzzle, scn.start, &sol), Ok(()));
                assert!(metrics.nodes_expanded >= 1);
            }
        }
    }
}

#[test]
fn optimal_strategies_match_the_oracle() {
    let opts = RunOptions::default();
    for scn in scenarios::battery() {
        if scn.validate().is_err() {
            continue;
        }
        let Some(opt) = optimal_length(&scn.puzzle, scn.start).trips() else {
            continue;
        };
        for strategy in Strategy::ALL.into_iter().filter(|s| s.is_optimal()) {
            let mut rng = ChaCha8Rng::seed_from_u64(0);
            let sol = run_strategy(strategy, scn, &opts, &mut rng, &mut SearchMetrics::new())
                .expect("valid case")
                .expect("reachable case");
            assert_eq!(sol.trips(), opt, "{strategy} on {}", scn.name);
        }
    }
}

#[test]
fn seeded_runs_are_repeatable() {
    let scn = scenarios::classic_default();
    let opts = RunOptions::default();
    for strategy in Strategy::ALL {
        let run = |seed: u64| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut metrics = SearchMetrics::new();
            let sol = run_strategy(strategy, &scn, &opts, &mut rng, &mut metrics).unwrap();
            (sol, metrics)
        };
        assert_eq!(run(11), run(11), "{strategy}");
    }
}

#[test]
fn unreachable_case_yields_no_path() {
    let scn = scenarios::by_name("only_m_left").unwrap();
    let opts = RunOptions::default();
    for strategy in Strategy::ALL {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let found = run_strategy(strategy, &scn, &opts, &mut rng, &mut SearchMetrics::new());
        assert_eq!(found.unwrap(), None, "{strategy}");
    }
}
