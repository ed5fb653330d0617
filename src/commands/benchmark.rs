//! Benchmark command
//!
//! Measures how much prefix pruning saves on random puzzles built from
//! nine-letter dictionary words.

use crate::core::{GRID_SIZE, Grid, Lexicon, PrefixGate};
use crate::solver::{OpenGate, SearchStats, Searcher, reduce};
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};
use tracing::warn;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub puzzles: usize,
    pub seed: u64,
    pub total_answers: usize,
    /// Summed over every puzzle
    pub pruned: SearchStats,
    pub full: SearchStats,
    pub pruned_time: Duration,
    pub full_time: Duration,
    /// Puzzles where pruning changed the answer set
    pub mismatches: Vec<Grid>,
}

impl BenchmarkResult {
    /// Fraction of search nodes skipped thanks to pruning, as a percentage
    #[must_use]
    pub fn reduction_percent(&self) -> f64 {
        self.pruned.percent_saved(&self.full)
    }

    /// How many times faster the pruned search ran
    #[must_use]
    pub fn speedup(&self) -> f64 {
        let pruned = self.pruned_time.as_secs_f64();
        if pruned == 0.0 {
            return 0.0;
        }
        self.full_time.as_secs_f64() / pruned
    }
}

/// Build a random puzzle from a nine-letter word
///
/// The letters are shuffled and a random cell becomes the centre.
fn random_grid<R: Rng>(word: &str, rng: &mut R) -> Option<Grid> {
    let mut letters: Vec<char> = word.chars().collect();
    letters.shuffle(rng);
    let letters: String = letters.into_iter().collect();
    Grid::with_centre(&letters, rng.random_range(0..GRID_SIZE)).ok()
}

/// Run the pruned and unpruned search on `count` random puzzles
///
/// A fixed `seed` makes the puzzle sequence reproducible.
///
/// # Errors
///
/// Returns an error if the dictionary has no nine-letter words to build
/// puzzles from.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_benchmark(
    lexicon: &Lexicon,
    gate: &PrefixGate,
    count: usize,
    min_length: usize,
    seed: Option<u64>,
) -> Result<BenchmarkResult, String> {
    let sources: Vec<&str> = lexicon
        .iter()
        .filter(|w| w.len() == GRID_SIZE && w.bytes().all(|b| b.is_ascii_alphabetic()))
        .collect();
    if sources.is_empty() {
        return Err(format!(
            "Dictionary has no {GRID_SIZE}-letter words to build puzzles from"
        ));
    }

    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut result = BenchmarkResult {
        puzzles: 0,
        seed,
        total_answers: 0,
        pruned: SearchStats::default(),
        full: SearchStats::default(),
        pruned_time: Duration::ZERO,
        full_time: Duration::ZERO,
        mismatches: Vec::new(),
    };

    for _ in 0..count {
        let Some(grid) = sources
            .choose(&mut rng)
            .and_then(|word| random_grid(word, &mut rng))
        else {
            continue;
        };

        let start = Instant::now();
        let pruned = Searcher::new(&grid, lexicon, gate, min_length).search();
        result.pruned_time += start.elapsed();

        let start = Instant::now();
        let full = Searcher::new(&grid, lexicon, OpenGate, min_length).search();
        result.full_time += start.elapsed();

        let pruned_solution = reduce(pruned.words, min_length, GRID_SIZE);
        let full_solution = reduce(full.words, min_length, GRID_SIZE);
        if pruned_solution != full_solution {
            warn!(grid = %String::from_utf8_lossy(grid.letters()), "pruning changed the answers");
            result.mismatches.push(grid);
        }

        result.puzzles += 1;
        result.total_answers += pruned_solution.len();
        result.pruned = result.pruned.merge(pruned.stats);
        result.full = result.full.merge(full.stats);

        pb.set_message(format!("Saved: {:.1}%", result.reduction_percent()));
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::embedded_lexicon;

    #[test]
    fn benchmark_runs() {
        let lexicon = embedded_lexicon();
        let gate = PrefixGate::derive(&lexicon);
        let result = run_benchmark(&lexicon, &gate, 2, 4, Some(7)).unwrap();

        assert_eq!(result.puzzles, 2);
        assert_eq!(result.seed, 7);
        assert!(result.mismatches.is_empty());
        assert!(result.pruned.visited < result.full.visited);
        assert!(result.pruned.pruned > 0);
        assert_eq!(result.full.pruned, 0);
        assert!(result.reduction_percent() > 0.0);
        // Every puzzle at least finds its own source word
        assert!(result.total_answers >= 2);
    }

    #[test]
    fn benchmark_is_reproducible_with_seed() {
        let lexicon = embedded_lexicon();
        let gate = PrefixGate::derive(&lexicon);
        let a = run_benchmark(&lexicon, &gate, 1, 4, Some(42)).unwrap();
        let b = run_benchmark(&lexicon, &gate, 1, 4, Some(42)).unwrap();

        assert_eq!(a.pruned, b.pruned);
        assert_eq!(a.total_answers, b.total_answers);
    }

    #[test]
    fn benchmark_requires_nine_letter_words() {
        let lexicon = Lexicon::from_unsorted(["bang", "night"]);
        let gate = PrefixGate::derive(&lexicon);
        assert!(run_benchmark(&lexicon, &gate, 1, 4, Some(1)).is_err());
    }

    #[test]
    fn benchmark_zero_puzzles() {
        let lexicon = embedded_lexicon();
        let gate = PrefixGate::derive(&lexicon);
        let result = run_benchmark(&lexicon, &gate, 0, 4, Some(1)).unwrap();

        assert_eq!(result.puzzles, 0);
        assert!(result.reduction_percent().abs() < f64::EPSILON);
    }

    #[test]
    fn random_grid_keeps_letters() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = random_grid("triangles", &mut rng).unwrap();

        let mut letters = grid.letters().to_vec();
        letters.sort_unstable();
        assert_eq!(letters, b"aegilnrst");
        assert!(grid.can_compose("triangles"));
    }
}
