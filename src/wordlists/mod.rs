//! Word lists for Word Target solving
//!
//! Provides the embedded default dictionary and loaders for puzzle,
//! dictionary and prefix files.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
