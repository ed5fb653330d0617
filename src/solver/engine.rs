//! Backtracking search over the board
//!
//! Walks every ordering of every subset of the nine cells, depth first.
//! Cells in use are tracked with a bitmask and the candidate lives in a fixed
//! stack buffer, so the walk allocates only for accepted words.

use super::filter::PrefixFilter;
use crate::core::{GRID_SIZE, Grid, Lexicon};
use rayon::prelude::*;
use tracing::debug;

/// Minimum answer length used by the standard puzzle
pub const DEFAULT_MIN_LENGTH: usize = 4;

/// Node counts gathered during a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursion nodes entered, the empty root included
    pub visited: usize,
    /// Subtrees abandoned by the prefix filter
    pub pruned: usize,
    /// Candidates accepted, duplicates included
    pub accepted: usize,
}

impl SearchStats {
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            visited: self.visited + other.visited,
            pruned: self.pruned + other.pruned,
            accepted: self.accepted + other.accepted,
        }
    }

    /// Share of `baseline`'s visited nodes this search skipped, as a
    /// percentage; 0 when the baseline visited nothing
    #[must_use]
    pub fn percent_saved(&self, baseline: &Self) -> f64 {
        if baseline.visited == 0 {
            return 0.0;
        }
        let saved = baseline.visited.saturating_sub(self.visited);
        saved as f64 / baseline.visited as f64 * 100.0
    }
}

/// Raw search output
///
/// `words` is unordered and may repeat a word reached through repeated
/// letters; see [`reduce`](super::reduce).
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub words: Vec<String>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    fn merge(mut self, other: Self) -> Self {
        self.words.extend(other.words);
        self.stats = self.stats.merge(other.stats);
        self
    }
}

/// Word Target search engine
///
/// Coordinates the walk using a given prefix filter.
pub struct Searcher<'a, P: PrefixFilter> {
    grid: &'a Grid,
    lexicon: &'a Lexicon,
    filter: P,
    min_length: usize,
}

impl<'a, P: PrefixFilter> Searcher<'a, P> {
    /// Create a new searcher
    ///
    /// # Parameters
    /// - `grid`: The board to search
    /// - `lexicon`: Dictionary of valid answers
    /// - `filter`: Prefix filter used to cut dead branches
    /// - `min_length`: Shortest accepted answer
    pub const fn new(grid: &'a Grid, lexicon: &'a Lexicon, filter: P, min_length: usize) -> Self {
        Self {
            grid,
            lexicon,
            filter,
            min_length,
        }
    }

    /// Run the search on the current thread
    ///
    /// # Examples
    /// ```
    /// use word_target::core::{Grid, Lexicon, PrefixGate};
    /// use word_target::solver::Searcher;
    ///
    /// let grid = Grid::new("batenggih").unwrap();
    /// let lexicon = Lexicon::from_unsorted(["bang", "bath", "night"]);
    /// let gate = PrefixGate::derive(&lexicon);
    ///
    /// let outcome = Searcher::new(&grid, &lexicon, &gate, 4).search();
    /// let mut words = outcome.words;
    /// words.sort();
    /// words.dedup();
    /// assert_eq!(words, vec!["bang", "night"]);
    /// ```
    #[must_use]
    pub fn search(&self) -> SearchOutcome {
        let mut outcome = SearchOutcome::default();
        let mut buffer = [0u8; GRID_SIZE];
        self.visit(0, &mut buffer, 0, &mut outcome);
        log_outcome(&outcome, false);
        outcome
    }

    /// Enter the node for `buffer[..depth]`, then every extension by an unused cell
    fn visit(
        &self,
        used: u16,
        buffer: &mut [u8; GRID_SIZE],
        depth: usize,
        out: &mut SearchOutcome,
    ) {
        out.stats.visited += 1;

        let prefix = &buffer[..depth];
        if !self.filter.is_viable(prefix) {
            out.stats.pruned += 1;
            return;
        }

        if self.accepts(prefix) {
            out.words.push(prefix.iter().map(|&b| char::from(b)).collect());
            out.stats.accepted += 1;
        }

        let letters = self.grid.letters();
        for (cell, &letter) in letters.iter().enumerate() {
            let bit = 1u16 << cell;
            if used & bit == 0 {
                buffer[depth] = letter;
                self.visit(used | bit, buffer, depth + 1, out);
            }
        }
    }

    /// Long enough, uses the centre letter, and is a dictionary word
    #[inline]
    fn accepts(&self, prefix: &[u8]) -> bool {
        prefix.len() >= self.min_length
            && prefix.contains(&self.grid.centre_letter())
            && self.lexicon.contains_bytes(prefix)
    }
}

impl<P: PrefixFilter + Sync> Searcher<'_, P> {
    /// Run the search with one rayon task per first letter
    ///
    /// Each task owns a disjoint subtree; the merged outcome holds the same
    /// words and counts as [`search`](Self::search).
    #[must_use]
    pub fn search_parallel(&self) -> SearchOutcome {
        let letters = self.grid.letters();
        let mut outcome = (0..GRID_SIZE)
            .into_par_iter()
            .map(|cell| {
                let mut local = SearchOutcome::default();
                let mut buffer = [0u8; GRID_SIZE];
                buffer[0] = letters[cell];
                self.visit(1u16 << cell, &mut buffer, 1, &mut local);
                local
            })
            .reduce(SearchOutcome::default, SearchOutcome::merge);

        // The empty root is never viable-checked or accepted, only counted
        outcome.stats.visited += 1;
        log_outcome(&outcome, true);
        outcome
    }
}

fn log_outcome(outcome: &SearchOutcome, parallel: bool) {
    debug!(
        visited = outcome.stats.visited,
        pruned = outcome.stats.pruned,
        accepted = outcome.stats.accepted,
        parallel,
        "search complete"
    );
}

/// Find every dictionary word on the board
///
/// Convenience wrapper returning only the raw word list.
#[must_use]
pub fn search<P: PrefixFilter>(
    grid: &Grid,
    lexicon: &Lexicon,
    filter: P,
    min_length: usize,
) -> Vec<String> {
    Searcher::new(grid, lexicon, filter, min_length).search().words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PrefixGate;
    use crate::solver::filter::OpenGate;
    use rustc_hash::FxHashSet;

    /// Sum of 9!/(9-k)! for k = 0..=9
    const FULL_TREE: usize = 986_410;

    fn setup() -> (Grid, Lexicon, PrefixGate) {
        let grid = Grid::parse("b a t\ne N g\ni g h").unwrap();
        let lexicon =
            Lexicon::from_unsorted(["bang", "bath", "begin", "eight", "gain", "night", "thing"]);
        let gate = PrefixGate::derive(&lexicon);
        (grid, lexicon, gate)
    }

    fn unique(words: Vec<String>) -> FxHashSet<String> {
        words.into_iter().collect()
    }

    fn visited(count: usize) -> SearchStats {
        SearchStats {
            visited: count,
            ..SearchStats::default()
        }
    }

    #[test]
    fn percent_saved_against_baseline() {
        assert!((visited(25).percent_saved(&visited(100)) - 75.0).abs() < 1e-9);
        assert!(visited(100).percent_saved(&visited(100)).abs() < f64::EPSILON);
        // More nodes than the baseline saves nothing rather than going negative
        assert!(visited(150).percent_saved(&visited(100)).abs() < f64::EPSILON);
        assert!(visited(0).percent_saved(&visited(0)).abs() < f64::EPSILON);
    }

    #[test]
    fn finds_words_with_centre_letter() {
        let (grid, lexicon, gate) = setup();
        let found = unique(search(&grid, &lexicon, &gate, 4));

        let expected: FxHashSet<String> = ["bang", "begin", "gain", "night", "thing"]
            .iter()
            .map(|&w| w.to_string())
            .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn excludes_words_without_centre_letter() {
        let (grid, lexicon, gate) = setup();
        let found = search(&grid, &lexicon, &gate, 4);
        assert!(!found.iter().any(|w| w == "bath"));
        assert!(!found.iter().any(|w| w == "eight"));
    }

    #[test]
    fn respects_min_length() {
        let (grid, lexicon, gate) = setup();
        let found = unique(search(&grid, &lexicon, &gate, 5));
        assert!(found.iter().all(|w| w.len() >= 5));
        assert!(found.contains("night"));
        assert!(!found.contains("bang"));
    }

    #[test]
    fn repeated_letters_produce_duplicates() {
        // Two g cells give two paths to "bang"
        let (grid, lexicon, gate) = setup();
        let found = search(&grid, &lexicon, &gate, 4);
        assert_eq!(found.iter().filter(|w| *w == "bang").count(), 2);
    }

    #[test]
    fn unpruned_search_visits_full_tree() {
        let (grid, lexicon, _) = setup();
        let outcome = Searcher::new(&grid, &lexicon, OpenGate, 4).search();
        assert_eq!(outcome.stats.visited, FULL_TREE);
        assert_eq!(outcome.stats.pruned, 0);
    }

    #[test]
    fn pruning_does_not_change_results() {
        let (grid, lexicon, gate) = setup();
        let pruned = Searcher::new(&grid, &lexicon, &gate, 4).search();
        let full = Searcher::new(&grid, &lexicon, OpenGate, 4).search();

        assert!(pruned.stats.visited < full.stats.visited);
        assert!(pruned.stats.pruned > 0);
        assert_eq!(unique(pruned.words), unique(full.words));
    }

    #[test]
    fn parallel_matches_sequential() {
        let (grid, lexicon, gate) = setup();
        let searcher = Searcher::new(&grid, &lexicon, &gate, 4);
        let sequential = searcher.search();
        let parallel = searcher.search_parallel();

        assert_eq!(parallel.stats, sequential.stats);
        let mut a = sequential.words;
        let mut b = parallel.words;
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_lexicon_finds_nothing() {
        let (grid, _, _) = setup();
        let lexicon = Lexicon::default();
        let gate = PrefixGate::derive(&lexicon);
        let outcome = Searcher::new(&grid, &lexicon, &gate, 4).search();

        assert!(outcome.words.is_empty());
        // Root, 9 one-letter, 72 two-letter, 504 three-letter nodes; all
        // three-letter nodes are pruned
        assert_eq!(outcome.stats.visited, 1 + 9 + 72 + 504);
        assert_eq!(outcome.stats.pruned, 504);
    }

    #[test]
    fn nine_letter_word_is_found() {
        let grid = Grid::new("triangles").unwrap();
        let lexicon = Lexicon::from_unsorted(["triangles", "tangles", "slate"]);
        let gate = PrefixGate::derive(&lexicon);
        let found = unique(search(&grid, &lexicon, &gate, 4));

        assert!(found.contains("triangles"));
        assert!(found.contains("tangles"));
        // No centre letter
        assert!(!found.contains("slate"));
    }

    #[test]
    fn stats_merge_adds_fields() {
        let a = SearchStats {
            visited: 10,
            pruned: 2,
            accepted: 1,
        };
        let b = SearchStats {
            visited: 5,
            pruned: 1,
            accepted: 0,
        };
        assert_eq!(
            a.merge(b),
            SearchStats {
                visited: 15,
                pruned: 3,
                accepted: 1,
            }
        );
    }
}
