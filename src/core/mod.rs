//! Value types shared by every solver.
//!
//! These are small `Copy` types that are hashed and compared constantly, so they carry no
//! derived data:
//!
//! - [`side`]: the two river banks (also the boat position and crossing direction).
//! - [`configuration`]: left-bank counts plus boat side; right-bank counts are derived.
//! - [`crossing`]: one boat trip (who crosses, and from which bank).

pub mod configuration;
pub mod crossing;
pub mod side;
