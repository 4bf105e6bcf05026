//! State-space search for the missionaries-and-cannibals river crossing.
//!
//! Pure puzzle rules live in [`core`] and [`puzzle`]; [`search`] holds the drivers (one generic
//! frontier search for BFS/DFS/Greedy/A*, plus simulated annealing) and the optimal-length
//! oracle used to grade them; [`report`] and [`render`] turn battery runs into tables.

pub mod config;
pub mod core;
pub mod logging;
pub mod puzzle;
pub mod render;
pub mod report;
pub mod scenario;
pub mod scenarios;
pub mod search;
