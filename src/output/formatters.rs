//! Formatting utilities for terminal output

use crate::core::{GRID_SIDE, Grid};

/// Format the board as three rows with the centre letter marked
///
/// The centre is upper-cased and bracketed so it stands out without colour.
#[must_use]
pub fn grid_rows(grid: &Grid) -> Vec<String> {
    grid.rows()
        .enumerate()
        .map(|(row_index, row)| {
            row.iter()
                .enumerate()
                .map(|(col, &ch)| {
                    let ch = char::from(ch);
                    if row_index * GRID_SIDE + col == grid.centre() {
                        format!("[{}]", ch.to_ascii_uppercase())
                    } else {
                        format!(" {ch} ")
                    }
                })
                .collect::<String>()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Pick the singular or plural noun for `count`
#[must_use]
pub const fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_rows_mark_centre() {
        let grid = Grid::new("triangles").unwrap();
        assert_eq!(grid_rows(&grid), vec![" t  r  i ", " a [N] g ", " l  e  s "]);
    }

    #[test]
    fn grid_rows_mark_corner_centre() {
        let grid = Grid::with_centre("triangles", 0).unwrap();
        assert_eq!(grid_rows(&grid)[0], "[T] r  i ");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(1, "result", "results"), "result");
        assert_eq!(plural(0, "result", "results"), "results");
        assert_eq!(plural(7, "letter", "letters"), "letters");
    }
}
