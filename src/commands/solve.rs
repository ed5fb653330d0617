//! Puzzle solving command
//!
//! Runs the search on one board and reduces the result for display.

use crate::core::{GRID_SIZE, Grid, Lexicon, PrefixGate};
use crate::solver::{DEFAULT_MIN_LENGTH, PruneMode, SearchStats, Searcher, Solution, reduce};
use std::time::{Duration, Instant};

/// Configuration for solving a puzzle
#[derive(Debug, Clone, Copy)]
pub struct SolveConfig {
    pub min_length: usize,
    pub prune: bool,
    pub parallel: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(min_length: usize) -> Self {
        Self {
            min_length,
            prune: true,
            parallel: false,
        }
    }
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH)
    }
}

/// Result of solving a puzzle
pub struct SolveResult {
    pub grid: Grid,
    pub min_length: usize,
    pub prune_mode: &'static str,
    pub solution: Solution,
    pub stats: SearchStats,
    pub duration: Duration,
}

/// Solve a puzzle with the given dictionary and prefix table
#[must_use]
pub fn solve_puzzle(
    config: &SolveConfig,
    grid: &Grid,
    lexicon: &Lexicon,
    gate: &PrefixGate,
) -> SolveResult {
    let start = Instant::now();

    let mode = PruneMode::new(gate, config.prune);
    let searcher = Searcher::new(grid, lexicon, mode, config.min_length);
    let outcome = if config.parallel {
        searcher.search_parallel()
    } else {
        searcher.search()
    };
    let solution = reduce(outcome.words, config.min_length, GRID_SIZE);

    SolveResult {
        grid: *grid,
        min_length: config.min_length,
        prune_mode: mode.name(),
        solution,
        stats: outcome.stats,
        duration: start.elapsed(),
    }
}
