use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use river_crossing::config::{self, RunConfig};
use river_crossing::logging::init_logging;
use river_crossing::render;
use river_crossing::scenarios;
use river_crossing::search::metrics::SearchMetrics;
use river_crossing::search::oracle::optimal_length;
use river_crossing::search::run::run_strategy;
use river_crossing::search::strategy::Strategy;

fn usage() -> String {
    format!(
        "Usage: solve <strategy> <case> [--seed <N>] [--delay-ms <MS>] [--config <FILE>]\n\n\
         Strategies: {}\n\nAvailable cases:\n  - {}",
        Strategy::ALL.map(Strategy::key).join(", "),
        scenarios::names().join("\n  - ")
    )
}

fn parse_flag<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T
where
    T::Err: std::fmt::Display,
{
    let Some(v) = args.get(i + 1) else {
        eprintln!("{flag} requires an argument");
        std::process::exit(2);
    };
    match v.parse::<T>() {
        Ok(x) => x,
        Err(e) => {
            eprintln!("invalid {flag} {v}: {e}");
            std::process::exit(2);
        }
    }
}

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("{}", usage());
        std::process::exit(2);
    }

    let Some(strategy) = Strategy::from_key(&args[1]) else {
        eprintln!("Unknown strategy: {}\n\n{}", args[1], usage());
        std::process::exit(2);
    };
    let scn = match scenarios::by_name(&args[2]) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}\n\n{}", usage());
            std::process::exit(2);
        }
    };

    let mut seed: Option<u64> = None;
    let mut delay_ms: u64 = 0;
    let mut config_path: Option<String> = None;

    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                seed = Some(parse_flag(&args, i, "--seed"));
                i += 2;
            }
            "--delay-ms" => {
                delay_ms = parse_flag(&args, i, "--delay-ms");
                i += 2;
            }
            "--config" => {
                config_path = Some(parse_flag(&args, i, "--config"));
                i += 2;
            }
            x => {
                eprintln!("Unknown option: {x}");
                std::process::exit(2);
            }
        }
    }

    let cfg = match config_path {
        Some(p) => match config::load(Path::new(&p)) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load config: {e}");
                std::process::exit(1);
            }
        },
        None => RunConfig::default(),
    };
    let seed = seed.unwrap_or(cfg.seed);

    if let Err(e) = scn.validate() {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let optimal = optimal_length(&scn.puzzle, scn.start);
    println!("Case: {} {}", scn.name, scn.start);
    println!("  strategy: {strategy}");
    println!("  seed: {seed}");
    println!("  optimal: {optimal}");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut metrics = SearchMetrics::new();
    let t0 = Instant::now();
    let found = match run_strategy(strategy, &scn, &cfg.run_options(), &mut rng, &mut metrics) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let elapsed = t0.elapsed();

    match found {
        Some(sol) => {
            println!();
            let delay = Duration::from_millis(delay_ms);
            if let Err(e) = render::animate(&mut io::stdout().lock(), &scn.puzzle, &sol, delay) {
                eprintln!("Failed to write path: {e}");
                std::process::exit(1);
            }
            println!();
            println!("  trips: {}", sol.trips());
            if let Some(opt) = optimal.trips() {
                println!("  gap: {}", sol.trips().saturating_sub(opt));
            }
        }
        None => println!("  no path found"),
    }
    println!("  nodes expanded: {}", metrics.nodes_expanded);
    println!("  max frontier: {}", metrics.max_frontier);
    println!("  time: {:.6}s", elapsed.as_secs_f64());
}
