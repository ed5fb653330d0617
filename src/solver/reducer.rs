//! Result reduction
//!
//! Turns the engine's raw, repeating word list into the final answer set
//! grouped by length.

use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

/// Unique answers, sorted, plus the same answers bucketed by length
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    words: Vec<String>,
    buckets: BTreeMap<usize, Vec<String>>,
}

impl Solution {
    /// All answers in lexicographic order
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Answers keyed by length; every length in the reduced range has an entry
    #[must_use]
    pub const fn buckets(&self) -> &BTreeMap<usize, Vec<String>> {
        &self.buckets
    }

    /// Answers of exactly `length` letters, in lexicographic order
    #[must_use]
    pub fn bucket(&self, length: usize) -> &[String] {
        self.buckets.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Number of unique answers
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|w| w.as_str().cmp(word))
            .is_ok()
    }
}

/// Deduplicate, sort and bucket raw search output
///
/// Buckets are created for every length in `min_length..=max_length`, empty
/// or not. A word outside that range still gets its own bucket.
///
/// # Examples
/// ```
/// use word_target::solver::reduce;
///
/// let raw = vec!["night".to_string(), "bang".to_string(), "bang".to_string()];
/// let solution = reduce(raw, 4, 9);
///
/// assert_eq!(solution.words(), ["bang", "night"]);
/// assert_eq!(solution.bucket(4), ["bang"]);
/// assert!(solution.bucket(6).is_empty());
/// ```
#[must_use]
pub fn reduce<I>(raw: I, min_length: usize, max_length: usize) -> Solution
where
    I: IntoIterator<Item = String>,
{
    let unique: FxHashSet<String> = raw.into_iter().collect();
    let mut words: Vec<String> = unique.into_iter().collect();
    words.sort_unstable();

    let mut buckets: BTreeMap<usize, Vec<String>> =
        (min_length..=max_length).map(|len| (len, Vec::new())).collect();
    for word in &words {
        buckets.entry(word.len()).or_default().push(word.clone());
    }

    Solution { words, buckets }
}
