//! Word Target search
//!
//! This module contains the pruning filters, the backtracking engine and the
//! reduction of its raw output into the final answer set.

mod engine;
pub mod filter;
mod reducer;

pub use engine::{DEFAULT_MIN_LENGTH, SearchOutcome, SearchStats, Searcher, search};
pub use filter::{OpenGate, PrefixFilter, PruneMode};
pub use reducer::{Solution, reduce};
