use std::path::Path;

use river_crossing::config::{self, RunConfig};
use river_crossing::logging::init_logging;
use river_crossing::render;
use river_crossing::report::{run_battery, summarize, CaseReport};
use river_crossing::search::strategy::Strategy;

fn usage() -> String {
    format!(
        "Usage: compare [--strategy <S>]... [--repeats <N>] [--seed <N>] [--config <FILE>] [--json]\n\n\
         Strategies: {}",
        Strategy::ALL.map(Strategy::key).join(", ")
    )
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    let Some(v) = args.get(i + 1) else {
        eprintln!("{flag} requires an argument\n\n{}", usage());
        std::process::exit(2);
    };
    v.as_str()
}

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();

    let mut strategies: Vec<Strategy> = Vec::new();
    let mut repeats: Option<u32> = None;
    let mut seed: Option<u64> = None;
    let mut config_path: Option<String> = None;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--strategy" => {
                let v = flag_value(&args, i, flag);
                let Some(s) = Strategy::from_key(v) else {
                    eprintln!("Unknown strategy: {v}\n\n{}", usage());
                    std::process::exit(2);
                };
                strategies.push(s);
                i += 2;
            }
            "--repeats" => {
                let v = flag_value(&args, i, flag);
                repeats = match v.parse::<u32>() {
                    Ok(n) if n >= 1 => Some(n),
                    _ => {
                        eprintln!("invalid --repeats {v}: expected an integer >= 1");
                        std::process::exit(2);
                    }
                };
                i += 2;
            }
            "--seed" => {
                let v = flag_value(&args, i, flag);
                seed = match v.parse::<u64>() {
                    Ok(n) => Some(n),
                    Err(e) => {
                        eprintln!("invalid --seed {v}: {e}");
                        std::process::exit(2);
                    }
                };
                i += 2;
            }
            "--config" => {
                config_path = Some(flag_value(&args, i, flag).to_string());
                i += 2;
            }
            "--json" => {
                json = true;
                i += 1;
            }
            "-h" | "--help" => {
                println!("{}", usage());
                return;
            }
            x => {
                eprintln!("Unknown option: {x}\n\n{}", usage());
                std::process::exit(2);
            }
        }
    }

    let mut cfg = match config_path {
        Some(p) => match config::load(Path::new(&p)) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load config: {e}");
                std::process::exit(1);
            }
        },
        None => RunConfig::default(),
    };
    if let Some(s) = seed {
        cfg.seed = s;
    }
    // An explicit --repeats applies to every strategy, annealing included.
    if let Some(n) = repeats {
        cfg.repeats = n;
        cfg.annealing_repeats = n;
    }
    if !strategies.is_empty() {
        cfg.strategies = strategies;
    }

    let mut rows: Vec<CaseReport> = Vec::new();
    let mut summaries = Vec::new();
    for &strategy in &cfg.strategies {
        let opts = cfg.battery_options(strategy);
        let batch = run_battery(strategy, &opts);
        summaries.push(summarize(strategy, &batch));
        if !json {
            let title = format!(
                "{} (seed {}, best of {})",
                strategy.label(),
                opts.seed,
                opts.repeats
            );
            println!("{}", render::table(&title, &batch));
        }
        rows.extend(batch);
    }

    if json {
        match serde_json::to_string_pretty(&rows) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to encode report: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", render::summary_lines(&summaries));
    }
}
