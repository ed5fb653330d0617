//! Word list and puzzle loading utilities
//!
//! Provides functions to load puzzles, dictionaries and prefix tables from
//! files or to use the embedded dictionary.

use super::DICTIONARY;
use crate::core::{Grid, GridError, Lexicon, LexiconError, PrefixGate};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Error type for input files that cannot be used
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    Grid { path: PathBuf, source: GridError },
    /// `line` is the 1-based file line of the offending entry
    Lexicon {
        path: PathBuf,
        line: usize,
        source: LexiconError,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read {}: {source}", path.display())
            }
            Self::Grid { path, source } => {
                write!(f, "Invalid puzzle in {}: {source}", path.display())
            }
            Self::Lexicon {
                path,
                line,
                source: LexiconError::Unsorted { previous, next, .. },
            } => write!(
                f,
                "Word list {} is not sorted: '{next}' at line {line} sorts before '{previous}'",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Grid { source, .. } => Some(source),
            Self::Lexicon { source, .. } => Some(source),
        }
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// One entry per non-blank line, file order and case kept
///
/// Returns the entries and the 1-based line number of each.
fn entries(content: &str) -> (Vec<String>, Vec<usize>) {
    content
        .lines()
        .enumerate()
        .map(|(index, line)| (line.trim(), index + 1))
        .filter(|(line, _)| !line.is_empty())
        .map(|(line, number)| (line.to_string(), number))
        .unzip()
}

fn sort_error(path: &Path, lines: &[usize], source: LexiconError) -> LoadError {
    let LexiconError::Unsorted { index, .. } = &source;
    LoadError::Lexicon {
        path: path.to_path_buf(),
        line: lines.get(*index).copied().unwrap_or(index + 1),
        source,
    }
}

/// Load a puzzle file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold nine letters.
///
/// # Examples
/// ```no_run
/// use word_target::wordlists::loader::load_grid;
///
/// let grid = load_grid("data/puzzle.txt").unwrap();
/// println!("Centre letter: {}", char::from(grid.centre_letter()));
/// ```
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<Grid, LoadError> {
    let path = path.as_ref();
    Grid::parse(&read(path)?).map_err(|source| LoadError::Grid {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a sorted dictionary file, one word per line
///
/// The file must be in byte order as written. Blank lines are skipped and
/// capitalised entries are dropped, since they can never match.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not sorted.
pub fn load_lexicon<P: AsRef<Path>>(path: P) -> Result<Lexicon, LoadError> {
    let path = path.as_ref();
    let (words, lines) = entries(&read(path)?);
    let lexicon = Lexicon::new(words).map_err(|source| sort_error(path, &lines, source))?;
    info!(path = %path.display(), words = lexicon.len(), "loaded dictionary");
    Ok(lexicon)
}

/// Load a sorted prefix table file, one prefix per line
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not sorted.
pub fn load_prefix_gate<P: AsRef<Path>>(path: P) -> Result<PrefixGate, LoadError> {
    let path = path.as_ref();
    let (prefixes, lines) = entries(&read(path)?);
    let gate = PrefixGate::new(prefixes).map_err(|source| sort_error(path, &lines, source))?;
    info!(path = %path.display(), prefixes = gate.len(), "loaded prefix table");
    Ok(gate)
}

/// The dictionary compiled into the binary
///
/// # Examples
/// ```
/// use word_target::wordlists::{DICTIONARY, loader::embedded_lexicon};
///
/// let lexicon = embedded_lexicon();
/// assert_eq!(lexicon.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn embedded_lexicon() -> Lexicon {
    Lexicon::from_unsorted(DICTIONARY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_grid_file() {
        let file = file_with("b a t\ne N g\ni g h\n");
        let grid = load_grid(file.path()).unwrap();
        assert_eq!(grid.letters(), b"batengigh");
        assert_eq!(grid.centre_letter(), b'n');
    }

    #[test]
    fn rejects_short_grid_file() {
        let file = file_with("b a t\n");
        let err = load_grid(file.path()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Grid {
                source: GridError::InvalidCellCount(3),
                ..
            }
        ));
    }

    #[test]
    fn loads_lexicon_file() {
        let file = file_with("bang\nbegin\n\ngain\nnight\n");
        let lexicon = load_lexicon(file.path()).unwrap();
        assert_eq!(lexicon.len(), 4);
        assert!(lexicon.contains("BEGIN"));
    }

    #[test]
    fn loads_byte_sorted_mixed_case_file() {
        let file = file_with("Zulu\napple\nbang\n");
        let lexicon = load_lexicon(file.path()).unwrap();
        assert_eq!(lexicon.iter().collect::<Vec<_>>(), vec!["apple", "bang"]);
        assert!(!lexicon.contains("zulu"));
    }

    #[test]
    fn rejects_unsorted_lexicon_file() {
        let file = file_with("night\nbang\n");
        let err = load_lexicon(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Lexicon { line: 2, .. }));
        assert!(err.to_string().contains("not sorted"));
    }

    #[test]
    fn unsorted_error_reports_file_line() {
        let file = file_with("bang\n\n\nnight\n\ngain\n");
        let err = load_lexicon(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Lexicon { line: 6, .. }));
        assert!(err.to_string().contains("'gain' at line 6"));
    }

    #[test]
    fn unsorted_prefix_file_reports_file_line() {
        let file = file_with("nig\n\nban\n");
        let err = load_prefix_gate(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Lexicon { line: 3, .. }));
    }

    #[test]
    fn loads_prefix_file() {
        let file = file_with("ban\nbang\nnig\n");
        let gate = load_prefix_gate(file.path()).unwrap();
        assert_eq!(gate.len(), 3);
        assert!(gate.contains("nig"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_lexicon("/nonexistent/words.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/words.txt"));
    }

    #[test]
    fn embedded_lexicon_matches_const() {
        let lexicon = embedded_lexicon();
        assert_eq!(lexicon.len(), DICTIONARY.len());
        assert!(lexicon.contains("triangles"));
    }
}
