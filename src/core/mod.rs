//! Core domain types for Word Target
//!
//! This module contains the board and the sorted word collections.
//! All types here are pure and independent of I/O.

mod grid;
mod lexicon;

pub use grid::{DEFAULT_CENTRE, GRID_SIDE, GRID_SIZE, Grid, GridError};
pub use lexicon::{Lexicon, LexiconError, PREFIX_LENGTHS, PrefixGate};
