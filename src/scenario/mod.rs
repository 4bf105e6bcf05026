//! Scenario layer: glue between the pure puzzle rules and the solvers.
//!
//! A [`Scenario`] bundles:
//! - the [`Puzzle`] dimensions
//! - a named start [`Configuration`]
//!
//! Solvers never see an unchecked start: callers run [`Scenario::validate`] first, which is where
//! an unsafe start is rejected. Failing to reach the goal is *not* an error; solvers report it as
//! an absent path.

use std::fmt;

use crate::core::configuration::Configuration;
use crate::puzzle::Puzzle;

/// A named search problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub name: &'static str,
    pub puzzle: Puzzle,
    pub start: Configuration,
}

impl Scenario {
    #[inline]
    pub const fn new(name: &'static str, puzzle: Puzzle, start: Configuration) -> Self {
        Self {
            name,
            puzzle,
            start,
        }
    }

    /// Reject a start that violates the safety invariant. Intended to be called by CLIs/tests
    /// before running any solver.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.puzzle.is_valid(&self.start) {
            return Err(SearchError::InvalidStart {
                name: self.name.to_string(),
                start: self.start,
            });
        }
        Ok(())
    }
}

#[derive(Debug)]
/// Structured errors returned by scenario validation and configuration loading.
pub enum SearchError {
    /// The start configuration is out of bounds or leaves a bank unsafe.
    InvalidStart { name: String, start: Configuration },
    /// A lookup by name found nothing.
    UnknownName { kind: &'static str, name: String },
    /// I/O failure while reading a configuration file.
    Io {
        stage: &'static str,
        path: String,
        error: String,
    },
    /// A configuration file was read but could not be decoded.
    Config { path: String, error: String },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidStart { name, start } => {
                write!(f, "invalid start for {name}: {start} is not a safe configuration")
            }
            SearchError::UnknownName { kind, name } => write!(f, "unknown {kind}: {name}"),
            SearchError::Io { stage, path, error } => {
                write!(f, "io error at {stage} for {path}: {error}")
            }
            SearchError::Config { path, error } => {
                write!(f, "invalid configuration in {path}: {error}")
            }
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::side::Side;

    #[test]
    fn unsafe_start_is_rejected_with_its_name() {
        let scn = Scenario::new(
            "unsafe",
            Puzzle::CLASSIC,
            Configuration::new(2, 3, Side::Left),
        );
        let err = scn.validate().unwrap_err();
        assert!(matches!(err, SearchError::InvalidStart { ref name, .. } if name == "unsafe"));
        assert_eq!(
            err.to_string(),
            "invalid start for unsafe: (2, 3, L) is not a safe configuration"
        );
    }

    #[test]
    fn classic_start_validates() {
        let scn = Scenario::new("classic", Puzzle::CLASSIC, Puzzle::CLASSIC.start());
        assert!(scn.validate().is_ok());
    }
}
