//! Result verification command
//!
//! Solves a puzzle with and without prefix pruning and verifies that both
//! runs agree and that every answer obeys the puzzle rules.

use super::solve::{SolveConfig, SolveResult, solve_puzzle};
use crate::core::{Grid, Lexicon, PrefixGate};
use std::fmt;

/// A rule broken by a reported answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Uses a letter more often than the board has it
    NotComposable(String),
    MissingCentre(String),
    TooShort(String),
    NotInLexicon(String),
    /// Found without pruning but lost with it
    DroppedByPruning(String),
    /// Found with pruning but not without it
    AddedByPruning(String),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotComposable(w) => write!(f, "'{w}' cannot be spelled from the grid"),
            Self::MissingCentre(w) => write!(f, "'{w}' does not use the centre letter"),
            Self::TooShort(w) => write!(f, "'{w}' is shorter than the minimum length"),
            Self::NotInLexicon(w) => write!(f, "'{w}' is not in the dictionary"),
            Self::DroppedByPruning(w) => write!(f, "'{w}' is lost when pruning is enabled"),
            Self::AddedByPruning(w) => write!(f, "'{w}' only appears when pruning is enabled"),
        }
    }
}

/// Result of checking a puzzle
pub struct CheckReport {
    pub pruned: SolveResult,
    pub full: SolveResult,
    pub violations: Vec<Violation>,
}

impl CheckReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Fraction of search nodes skipped thanks to pruning, as a percentage
    #[must_use]
    pub fn reduction_percent(&self) -> f64 {
        self.pruned.stats.percent_saved(&self.full.stats)
    }
}

/// Check the rules an answer must obey
#[must_use]
pub fn answer_violations(
    word: &str,
    grid: &Grid,
    lexicon: &Lexicon,
    min_length: usize,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    if !grid.can_compose(word) {
        violations.push(Violation::NotComposable(word.to_string()));
    }
    if !word.as_bytes().contains(&grid.centre_letter()) {
        violations.push(Violation::MissingCentre(word.to_string()));
    }
    if word.len() < min_length {
        violations.push(Violation::TooShort(word.to_string()));
    }
    if !lexicon.contains(word) {
        violations.push(Violation::NotInLexicon(word.to_string()));
    }
    violations
}

/// Solve with and without pruning and collect every violation
///
/// The unpruned run walks the full tree, so this is much slower than
/// solving.
#[must_use]
pub fn check_puzzle(
    config: &SolveConfig,
    grid: &Grid,
    lexicon: &Lexicon,
    gate: &PrefixGate,
) -> CheckReport {
    let pruned = solve_puzzle(
        &SolveConfig {
            prune: true,
            ..*config
        },
        grid,
        lexicon,
        gate,
    );
    let full = solve_puzzle(
        &SolveConfig {
            prune: false,
            ..*config
        },
        grid,
        lexicon,
        gate,
    );

    let mut violations: Vec<Violation> = pruned
        .solution
        .words()
        .iter()
        .flat_map(|word| answer_violations(word, grid, lexicon, config.min_length))
        .collect();

    violations.extend(
        full.solution
            .words()
            .iter()
            .filter(|w| !pruned.solution.contains(w))
            .map(|w| Violation::DroppedByPruning(w.clone())),
    );
    violations.extend(
        pruned
            .solution
            .words()
            .iter()
            .filter(|w| !full.solution.contains(w))
            .map(|w| Violation::AddedByPruning(w.clone())),
    );

    CheckReport {
        pruned,
        full,
        violations,
    }
}
