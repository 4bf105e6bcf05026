//! JSON run configuration for the command-line tools.
//!
//! Every field is optional; an empty object `{}` is the default configuration. Puzzle totals are
//! not configurable: the tools always run the classic 3/3/2 puzzle.
//!
//! ```json
//! {
//!   "seed": 7,
//!   "repeats": 1,
//!   "annealing_repeats": 20,
//!   "strategies": ["bfs", "astar", "annealing"],
//!   "annealing": {
//!     "initial_temperature": 10.0,
//!     "cooling": { "kind": "linear", "decrement": 0.01 },
//!     "acceptance": "metropolis"
//!   }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::report::BatteryOptions;
use crate::scenario::SearchError;
use crate::search::annealing::AnnealingParams;
use crate::search::run::RunOptions;
use crate::search::strategy::Strategy;

fn default_repeats() -> u32 {
    1
}

fn default_annealing_repeats() -> u32 {
    20
}

fn default_strategies() -> Vec<Strategy> {
    Strategy::ALL.to_vec()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub seed: u64,
    /// Runs per case for the frontier strategies.
    #[serde(default = "default_repeats")]
    pub repeats: u32,
    /// Runs per case for simulated annealing (reported as best-of-N).
    #[serde(default = "default_annealing_repeats")]
    pub annealing_repeats: u32,
    #[serde(default = "default_strategies")]
    pub strategies: Vec<Strategy>,
    /// Override child order for every strategy (`null` keeps each strategy's default).
    #[serde(default)]
    pub randomize: Option<bool>,
    #[serde(default)]
    pub annealing: AnnealingParams,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            repeats: default_repeats(),
            annealing_repeats: default_annealing_repeats(),
            strategies: default_strategies(),
            randomize: None,
            annealing: AnnealingParams::default(),
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.repeats == 0 || self.annealing_repeats == 0 {
            return Err("repeats must be >= 1".to_string());
        }
        if self.strategies.is_empty() {
            return Err("at least one strategy is required".to_string());
        }
        self.annealing.validate()
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            randomize: self.randomize,
            annealing: self.annealing,
        }
    }

    /// Battery options for one strategy (annealing gets its own repeat count).
    pub fn battery_options(&self, strategy: Strategy) -> BatteryOptions {
        let repeats = if strategy == Strategy::SimulatedAnnealing {
            self.annealing_repeats
        } else {
            self.repeats
        };
        BatteryOptions {
            seed: self.seed,
            repeats,
            run: self.run_options(),
            keep_solutions: false,
        }
    }
}

/// Parse and validate a configuration from JSON text. `origin` names the source in errors.
pub fn parse(text: &str, origin: &str) -> Result<RunConfig, SearchError> {
    let cfg: RunConfig = serde_json::from_str(text).map_err(|e| SearchError::Config {
        path: origin.to_string(),
        error: e.to_string(),
    })?;
    cfg.validate().map_err(|error| SearchError::Config {
        path: origin.to_string(),
        error,
    })?;
    Ok(cfg)
}

/// Read, parse and validate a configuration file.
pub fn load(path: &Path) -> Result<RunConfig, SearchError> {
    let text = fs::read_to_string(path).map_err(|e| SearchError::Io {
        stage: "config",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    parse(&text, &path.display().to_string())
}
