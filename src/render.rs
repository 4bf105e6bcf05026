//! Plain-text rendering: river frames, path animation, and the summary table.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::core::configuration::Configuration;
use crate::core::side::Side;
use crate::puzzle::Puzzle;
use crate::report::{CaseReport, CaseStatus, StrategySummary};
use crate::search::path::Solution;

const RIVER_WIDTH: usize = 22;
const BOAT: &str = "<=>";

/// One line: left bank, river with the boat on one side, right bank.
///
/// ```text
/// [M:3 C:3] <=> ~~~~~~~~~~~~~~~~~~~~~~     [M:0 C:0]
/// ```
pub fn frame(puzzle: &Puzzle, cfg: &Configuration) -> String {
    let (m_right, c_right) = puzzle.right_bank(cfg).unwrap_or((0, 0));
    let blank = " ".repeat(BOAT.len());
    let (boat_l, boat_r) = match cfg.boat {
        Side::Left => (BOAT, blank.as_str()),
        Side::Right => (blank.as_str(), BOAT),
    };
    format!(
        "[M:{} C:{}] {boat_l} {} {boat_r} [M:{m_right} C:{c_right}]",
        cfg.missionaries,
        cfg.cannibals,
        "~".repeat(RIVER_WIDTH)
    )
}

/// Write every frame of a solution, each followed by the crossing that leaves it, pausing
/// `delay` between frames.
pub fn animate<W: Write>(
    out: &mut W,
    puzzle: &Puzzle,
    sol: &Solution,
    delay: Duration,
) -> io::Result<()> {
    for (i, cfg) in sol.path.iter().enumerate() {
        match sol.crossings.get(i) {
            Some(mv) => writeln!(out, "{:>3}  {}   {mv}", i, frame(puzzle, cfg))?,
            None => writeln!(out, "{:>3}  {}", i, frame(puzzle, cfg))?,
        }
        out.flush()?;
        if !delay.is_zero() && i + 1 < sol.path.len() {
            thread::sleep(delay);
        }
    }
    Ok(())
}

fn status_cell(r: &CaseReport) -> &'static str {
    match r.status {
        CaseStatus::Solved => "solved",
        CaseStatus::NotFound => "not found",
        CaseStatus::InvalidStart => "invalid",
    }
}

fn opt_cell<T: ToString>(v: Option<T>) -> String {
    v.map_or_else(|| "-".to_string(), |x| x.to_string())
}

const RULE: &str =
    "+----+----------------------+-----------+-------+-------------+-----+----------+----------+----------+---------+";

/// Fixed-width comparison table for one strategy's battery run.
pub fn table(title: &str, rows: &[CaseReport]) -> String {
    let mut s = String::new();
    s.push_str(title);
    s.push('\n');
    s.push_str(RULE);
    s.push('\n');
    s.push_str(
        "| #  | Case                 | Status    | Trips | Optimal     | Gap | Expanded | Frontier | Time(s)  | Success |\n",
    );
    s.push_str(RULE);
    s.push('\n');
    for r in rows {
        let name: String = r.case.chars().take(20).collect();
        s.push_str(&format!(
            "| {:>2} | {:<20} | {:<9} | {:>5} | {:>11} | {:>3} | {:>8} | {:>8} | {:>8.5} | {:>3}/{:<3} |\n",
            r.index,
            name,
            status_cell(r),
            opt_cell(r.trips),
            r.optimal.to_string(),
            opt_cell(r.gap),
            r.nodes_expanded,
            r.max_frontier,
            r.mean_secs,
            r.successes,
            r.runs,
        ));
    }
    s.push_str(RULE);
    s.push('\n');
    s
}

/// One line per strategy.
pub fn summary_lines(summaries: &[StrategySummary]) -> String {
    let mut s = String::new();
    for x in summaries {
        s.push_str(&format!(
            "{:<20} solved {:>2}/{:<2} optimal {:>2}  gap {:>3}  invalid {:>2}  expanded {:>6}\n",
            x.strategy.label(),
            x.solved,
            x.cases,
            x.optimal,
            x.total_gap,
            x.invalid,
            x.nodes_expanded,
        ));
    }
    s
}
