//! Word Target puzzle board
//!
//! A Grid holds the nine letters of the board in row-major order and remembers
//! which cell is the mandatory centre.

use rustc_hash::FxHashMap;
use std::fmt;

/// Number of cells on the board
pub const GRID_SIZE: usize = 9;

/// Side length of the square board
pub const GRID_SIDE: usize = 3;

/// Index of the middle cell, the centre in the standard puzzle layout
pub const DEFAULT_CENTRE: usize = 4;

/// The 3×3 Word Target board
///
/// Letters are stored lowercase. Exactly one cell is the centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    letters: [u8; GRID_SIZE],
    centre: usize,
}

/// Error type for invalid boards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    InvalidCellCount(usize),
    InvalidLetter(char),
    CentreOutOfRange(usize),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCellCount(count) => {
                write!(f, "Grid must have exactly {GRID_SIZE} letters, got {count}")
            }
            Self::InvalidLetter(c) => write!(f, "Grid cell '{c}' is not an ASCII letter"),
            Self::CentreOutOfRange(index) => {
                write!(f, "Centre index {index} is outside the {GRID_SIZE}-cell grid")
            }
        }
    }
}

impl std::error::Error for GridError {}

impl Grid {
    /// Create a grid from nine letters with the middle cell as centre
    ///
    /// # Errors
    /// Returns `GridError` if the input is not exactly nine ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use word_target::core::Grid;
    ///
    /// let grid = Grid::new("triaNgles").unwrap();
    /// assert_eq!(grid.centre_letter(), b'n');
    /// assert_eq!(grid.letters(), b"triangles");
    ///
    /// assert!(Grid::new("short").is_err());
    /// ```
    pub fn new(letters: &str) -> Result<Self, GridError> {
        Self::with_centre(letters, DEFAULT_CENTRE)
    }

    /// Create a grid from nine letters with an explicit centre cell
    ///
    /// # Errors
    /// Returns `GridError` if the input is not exactly nine ASCII letters or
    /// `centre` is not a cell index.
    pub fn with_centre(letters: &str, centre: usize) -> Result<Self, GridError> {
        let count = letters.chars().count();
        if count != GRID_SIZE {
            return Err(GridError::InvalidCellCount(count));
        }
        if centre >= GRID_SIZE {
            return Err(GridError::CentreOutOfRange(centre));
        }

        let mut cells = [0u8; GRID_SIZE];
        for (cell, c) in cells.iter_mut().zip(letters.chars()) {
            if !c.is_ascii_alphabetic() {
                return Err(GridError::InvalidLetter(c));
            }
            *cell = c.to_ascii_lowercase() as u8;
        }

        Ok(Self {
            letters: cells,
            centre,
        })
    }

    /// Parse the puzzle text format
    ///
    /// Each non-blank line is one row of whitespace-separated tokens. The
    /// first character of each of the first three tokens is a cell; further
    /// tokens on the line are ignored. The middle cell is the centre.
    ///
    /// # Errors
    /// Returns `GridError` if the text does not describe exactly nine letters.
    ///
    /// # Examples
    /// ```
    /// use word_target::core::Grid;
    ///
    /// let grid = Grid::parse("b a t\ne N g\ni g h\n").unwrap();
    /// assert_eq!(grid.letters(), b"batengigh");
    /// assert_eq!(grid.centre_letter(), b'n');
    /// ```
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let cells: String = text
            .lines()
            .flat_map(|line| {
                line.split_whitespace()
                    .take(GRID_SIDE)
                    .filter_map(|token| token.chars().next())
            })
            .collect();
        Self::new(&cells)
    }

    /// The nine letters in row-major order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; GRID_SIZE] {
        &self.letters
    }

    /// Index of the centre cell
    #[inline]
    #[must_use]
    pub const fn centre(&self) -> usize {
        self.centre
    }

    /// The letter every answer must contain
    #[inline]
    #[must_use]
    pub const fn centre_letter(&self) -> u8 {
        self.letters[self.centre]
    }

    /// The board as three rows of three letters
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.letters.chunks(GRID_SIDE)
    }

    /// Count of each letter on the board
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.letters {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }

    /// Check whether `word` can be spelled using each cell at most once
    #[must_use]
    pub fn can_compose(&self, word: &str) -> bool {
        let mut available = self.letter_counts();
        word.bytes().all(|b| {
            available
                .get_mut(&b.to_ascii_lowercase())
                .is_some_and(|count| {
                    if *count == 0 {
                        false
                    } else {
                        *count -= 1;
                        true
                    }
                })
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.rows().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(col, &ch)| {
                    let ch = char::from(ch);
                    if row_index * GRID_SIDE + col == self.centre {
                        ch.to_ascii_uppercase().to_string()
                    } else {
                        ch.to_string()
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
