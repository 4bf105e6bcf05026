//! Side-channel counters observed by the drivers.
//!
//! Drivers report every expansion and the frontier size before each pop; they never read the
//! counters back, so a sink cannot influence the search.

use serde::{Deserialize, Serialize};

pub trait MetricsSink {
    fn record_expansion(&mut self);

    fn record_frontier_size(&mut self, n: usize);
}

/// Counts expansions and keeps the peak frontier size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMetrics {
    pub nodes_expanded: u64,
    pub max_frontier: usize,
}

impl SearchMetrics {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetricsSink for SearchMetrics {
    #[inline]
    fn record_expansion(&mut self) {
        self.nodes_expanded = self.nodes_expanded.saturating_add(1);
    }

    #[inline]
    fn record_frontier_size(&mut self, n: usize) {
        self.max_frontier = self.max_frontier.max(n);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoMetrics;

impl MetricsSink for NoMetrics {
    #[inline]
    fn record_expansion(&mut self) {}

    #[inline]
    fn record_frontier_size(&mut self, _n: usize) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_count_and_peak() {
        let mut m = SearchMetrics::new();
        m.record_frontier_size(3);
        m.record_expansion();
        m.record_frontier_size(7);
        m.record_expansion();
        m.record_frontier_size(2);
        assert_eq!(m.nodes_expanded, 2);
        assert_eq!(m.max_frontier, 7);
    }
}
