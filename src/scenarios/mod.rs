//! Built-in test battery (compile-time configs).
//!
//! Ten named starts, all with the boat on the left bank. Four of them are unsafe as given and
//! fail [`Scenario::validate`]; one (`only_m_left`) is safe but cannot reach the goal. They are
//! kept as-is so reports show how each strategy copes.

use crate::core::configuration::Configuration;
use crate::core::side::Side;
use crate::puzzle::Puzzle;
use crate::scenario::{Scenario, SearchError};

const fn left(name: &'static str, missionaries: u8, cannibals: u8) -> Scenario {
    Scenario::new(
        name,
        Puzzle::CLASSIC,
        Configuration::new(missionaries, cannibals, Side::Left),
    )
}

const BATTERY: [Scenario; 10] = [
    left("classic_default", 3, 3),
    left("left_heavy_m", 3, 2),
    left("left_heavy_c", 2, 3),
    left("balanced_small", 2, 2),
    left("few_c", 3, 1),
    left("few_m", 1, 3),
    left("only_m_left", 3, 0),
    left("only_c_left", 0, 3),
    left("near_goal_mix_a", 2, 1),
    left("near_goal_mix_b", 1, 2),
];

/// The full battery, in report order.
pub fn battery() -> &'static [Scenario] {
    &BATTERY
}

/// The textbook instance: everyone starts on the left.
pub fn classic_default() -> Scenario {
    BATTERY[0]
}

/// Look up a case by name, or by its 1-based position in the battery.
pub fn by_name(name: &str) -> Result<Scenario, SearchError> {
    if let Ok(idx) = name.parse::<usize>() {
        if (1..=BATTERY.len()).contains(&idx) {
            return Ok(BATTERY[idx - 1]);
        }
    }
    BATTERY
        .iter()
        .find(|s| s.name == name)
        .copied()
        .ok_or_else(|| SearchError::UnknownName {
            kind: "case",
            name: name.to_string(),
        })
}

/// Names of all built-in cases.
pub fn names() -> Vec<&'static str> {
    BATTERY.iter().map(|s| s.name).collect()
}
