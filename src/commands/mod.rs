//! Command implementations

pub mod benchmark;
pub mod check;
pub mod prefixes;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use check::{CheckReport, Violation, answer_violations, check_puzzle};
pub use prefixes::write_prefixes;
pub use solve::{SolveConfig, SolveResult, solve_puzzle};
