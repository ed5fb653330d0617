//! Word Target Solver
//!
//! Finds every dictionary word that can be spelled from a 3×3 letter grid,
//! using each cell at most once and always including the centre letter.
//!
//! # Quick Start
//!
//! ```rust
//! use word_target::core::{Grid, Lexicon, PrefixGate};
//! use word_target::solver::{Searcher, reduce};
//!
//! let grid = Grid::parse("b a t\ne N g\ni g h").unwrap();
//! let lexicon = Lexicon::from_unsorted(["bang", "bath", "begin", "night"]);
//! let gate = PrefixGate::derive(&lexicon);
//!
//! let outcome = Searcher::new(&grid, &lexicon, &gate, 4).search();
//! let solution = reduce(outcome.words, 4, 9);
//! assert_eq!(solution.words(), ["bang", "begin", "night"]);
//! ```

// Core domain types
pub mod core;

// Search engine and result reduction
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
