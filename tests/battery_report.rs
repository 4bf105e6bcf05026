use river_crossing::config::{self, RunConfig};
use river_crossing::render;
use river_crossing::report::{run_battery, summarize, BatteryOptions, CaseReport, CaseStatus};
use river_crossing::search::oracle::OptimalLength;
use river_crossing::search::strategy::Strategy;

fn status_by_case(rows: &[CaseReport]) -> Vec<(&str, CaseStatus)> {
    rows.iter().map(|r| (r.case.as_str(), r.status)).collect()
}

#[test]
fn optimal_strategies_close_every_reachable_case_with_zero_gap() {
    for strategy in [Strategy::BreadthFirst, Strategy::AStar] {
        let rows = run_battery(strategy, &BatteryOptions::default());
        assert_eq!(rows.len(), 10);
        assert_eq!(
            status_by_case(&rows),
            vec![
                ("classic_default", CaseStatus::Solved),
                ("left_heavy_m", CaseStatus::Solved),
                ("left_heavy_c", CaseStatus::InvalidStart),
                ("balanced_small", CaseStatus::Solved),
                ("few_c", CaseStatus::Solved),
                ("few_m", CaseStatus::InvalidStart),
                ("only_m_left", CaseStatus::NotFound),
                ("only_c_left", CaseStatus::Solved),
                ("near_goal_mix_a", CaseStatus::InvalidStart),
                ("near_goal_mix_b", CaseStatus::InvalidStart),
            ]
        );
        for r in &rows {
            match r.status {
                CaseStatus::Solved => {
                    assert_eq!(r.gap, Some(0), "{}", r.case);
                    assert_eq!(r.trips, r.optimal.trips());
                    assert_eq!(r.successes, 1);
                }
                CaseStatus::InvalidStart => {
                    assert_eq!(r.runs, 0);
                    assert_eq!(r.nodes_expanded, 0);
                }
                CaseStatus::NotFound => assert_eq!(r.optimal, OptimalLength::Unreachable),
            }
        }

        let s = summarize(strategy, &rows);
        assert_eq!((s.cases, s.solved, s.optimal, s.invalid), (10, 5, 5, 4));
        assert_eq!(s.total_gap, 0);
    }
}

#[test]
fn annealing_best_of_twenty_solves_the_classic_case() {
    let cfg = RunConfig::default();
    let opts = cfg.battery_options(Strategy::SimulatedAnnealing);
    assert_eq!(opts.repeats, 20);

    let rows = run_battery(Strategy::SimulatedAnnealing, &opts);
    let classic = &rows[0];
    assert_eq!(classic.case, "classic_default");
    assert_eq!(classic.runs, 20);
    assert!(classic.successes >= 1);
    assert_eq!(classic.status, CaseStatus::Solved);
    assert!(classic.gap.is_some());
    assert!(classic.success_rate() > 0.0);
}

#[test]
fn reports_are_repeatable_and_serialize() {
    let opts = BatteryOptions {
        seed: 5,
        repeats: 3,
        keep_solutions: true,
        ..BatteryOptions::default()
    };
    let strip = |mut rows: Vec<CaseReport>| {
        for r in &mut rows {
            r.mean_secs = 0.0;
        }
        rows
    };
    let a = strip(run_battery(Strategy::DepthFirst, &opts));
    let b = strip(run_battery(Strategy::DepthFirst, &opts));
    assert_eq!(a, b);
    assert!(a[0].solution.is_some());

    let json = serde_json::to_string(&a).unwrap();
    let back: Vec<CaseReport> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, a);

    let table = render::table("DFS", &a);
    assert_eq!(table.lines().count(), 5 + a.len());
    assert!(table.contains("invalid"));
}

#[test]
fn config_file_round_trip() {
    let cfg = RunConfig {
        seed: 42,
        strategies: vec![Strategy::Greedy],
        ..RunConfig::default()
    };
    let dir = std::env::temp_dir().join(format!("river_crossing_cfg_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("run.json");
    std::fs::write(&path, serde_json::to_string_pretty(&cfg).unwrap()).unwrap();

    let loaded = config::load(&path).unwrap();
    assert_eq!(loaded, cfg);
    std::fs::remove_dir_all(&dir).unwrap();
}
