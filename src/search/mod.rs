//! Search: move generation, the optimal-length oracle, and the graded drivers.

pub mod annealing;
pub mod best_first;
pub mod metrics;
pub mod movegen;
pub mod oracle;
pub mod path;
pub mod run;
pub mod space;
pub mod strategy;
pub mod tree;
