//! Sorted word collections
//!
//! Both the dictionary and the prefix table answer membership queries by
//! binary search, so both must be sorted. Sortedness is checked once when the
//! collection is built.

use std::fmt;

/// Prefix lengths covered by a [`PrefixGate`]
pub const PREFIX_LENGTHS: [usize; 2] = [3, 4];

/// Error type for collections that break the ordering contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    /// `next` sorts before `previous` at position `index`
    Unsorted {
        index: usize,
        previous: String,
        next: String,
    },
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsorted {
                index,
                previous,
                next,
            } => write!(
                f,
                "Word list is not sorted: '{next}' at entry {} sorts before '{previous}'",
                index + 1
            ),
        }
    }
}

impl std::error::Error for LexiconError {}

/// A sorted list of words queried by exact-match binary search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct SortedWords(Vec<String>);

impl SortedWords {
    /// Order is checked on the entries as given; entries with uppercase
    /// letters are dropped afterwards since lookups are always lowercase
    fn new(mut words: Vec<String>) -> Result<Self, LexiconError> {
        if let Some(index) = words.windows(2).position(|pair| pair[0] > pair[1]) {
            return Err(LexiconError::Unsorted {
                index: index + 1,
                previous: words[index].clone(),
                next: words[index + 1].clone(),
            });
        }
        words.retain(|w| !w.chars().any(char::is_uppercase));
        Ok(Self(words))
    }

    fn from_unsorted<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        words.sort_unstable();
        words.dedup();
        Self(words)
    }

    /// `candidate` must already be lowercase
    #[inline]
    fn contains_bytes(&self, candidate: &[u8]) -> bool {
        self.0
            .binary_search_by(|word| word.as_bytes().cmp(candidate))
            .is_ok()
    }

    fn contains(&self, candidate: &str) -> bool {
        self.contains_bytes(candidate.to_lowercase().as_bytes())
    }
}

/// The dictionary of valid answers
///
/// # Examples
/// ```
/// use word_target::core::Lexicon;
///
/// let lexicon = Lexicon::new(vec!["bang".into(), "night".into()]).unwrap();
/// assert!(lexicon.contains("NIGHT"));
/// assert!(!lexicon.contains("nigh"));
///
/// assert!(Lexicon::new(vec!["night".into(), "bang".into()]).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: SortedWords,
}

impl Lexicon {
    /// Build a lexicon from words already in sorted order
    ///
    /// Order is byte order of the entries as given. Adjacent duplicates are
    /// accepted. Entries containing uppercase letters can never match a
    /// lookup and are dropped.
    ///
    /// # Errors
    /// Returns `LexiconError::Unsorted` at the first out-of-order pair.
    pub fn new(words: Vec<String>) -> Result<Self, LexiconError> {
        Ok(Self {
            words: SortedWords::new(words)?,
        })
    }

    /// Build a lexicon from words in any order
    ///
    /// Words are trimmed, lowercased, sorted and deduplicated.
    pub fn from_unsorted<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: SortedWords::from_unsorted(words),
        }
    }

    /// Case-insensitive exact-match lookup
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        self.words.contains(candidate)
    }

    /// Exact-match lookup of an already lowercase candidate
    #[inline]
    #[must_use]
    pub fn contains_bytes(&self, candidate: &[u8]) -> bool {
        self.words.contains_bytes(candidate)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.0.len()
    }

    /// True if the lexicon has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.0.is_empty()
    }

    /// Entries in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.0.iter().map(String::as_str)
    }
}

/// Table of viable 3- and 4-letter word beginnings used to prune the search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixGate {
    prefixes: SortedWords,
}

impl PrefixGate {
    /// Build a gate from prefixes already in sorted order
    ///
    /// # Errors
    /// Returns `LexiconError::Unsorted` at the first out-of-order pair.
    pub fn new(prefixes: Vec<String>) -> Result<Self, LexiconError> {
        Ok(Self {
            prefixes: SortedWords::new(prefixes)?,
        })
    }

    /// Build a gate from prefixes in any order
    pub fn from_unsorted<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            prefixes: SortedWords::from_unsorted(prefixes),
        }
    }

    /// Derive the gate from a lexicon
    ///
    /// Takes the first 3 and first 4 letters of every word long enough to
    /// have them.
    ///
    /// # Examples
    /// ```
    /// use word_target::core::{Lexicon, PrefixGate};
    ///
    /// let lexicon = Lexicon::from_unsorted(["night", "nigh", "at"]);
    /// let gate = PrefixGate::derive(&lexicon);
    /// assert_eq!(gate.iter().collect::<Vec<_>>(), vec!["nig", "nigh"]);
    /// ```
    #[must_use]
    pub fn derive(lexicon: &Lexicon) -> Self {
        let prefixes = lexicon.iter().flat_map(|word| {
            PREFIX_LENGTHS
                .into_iter()
                .filter_map(move |len| word.get(..len))
        });
        Self::from_unsorted(prefixes)
    }

    /// Case-insensitive exact-match lookup
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        self.prefixes.contains(candidate)
    }

    /// Exact-match lookup of an already lowercase candidate
    #[inline]
    #[must_use]
    pub fn contains_bytes(&self, candidate: &[u8]) -> bool {
        self.prefixes.contains_bytes(candidate)
    }

    /// Number of prefixes
    #[must_use]
    pub fn len(&self) -> usize {
        self.prefixes.0.len()
    }

    /// True if the gate has no prefixes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefixes.0.is_empty()
    }

    /// Prefixes in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.prefixes.0.iter().map(String::as_str)
    }
}
