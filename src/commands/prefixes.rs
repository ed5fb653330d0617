//! Prefix table command
//!
//! Derives the pruning table from a dictionary and writes it out in the
//! format the solver loads.

use crate::core::{Lexicon, PrefixGate};
use std::io::{self, Write};

/// Derive the prefix table and write it, one prefix per line
///
/// Returns the number of prefixes written.
///
/// # Errors
///
/// Returns an I/O error if writing fails.
///
/// # Examples
/// ```
/// use word_target::commands::write_prefixes;
/// use word_target::core::Lexicon;
///
/// let lexicon = Lexicon::from_unsorted(["night", "bang"]);
/// let mut out = Vec::new();
/// let count = write_prefixes(&lexicon, &mut out).unwrap();
///
/// assert_eq!(count, 4);
/// assert_eq!(String::from_utf8(out).unwrap(), "ban\nbang\nnig\nnigh\n");
/// ```
pub fn write_prefixes<W: Write>(lexicon: &Lexicon, writer: W) -> io::Result<usize> {
    let gate = PrefixGate::derive(lexicon);
    let mut writer = io::BufWriter::new(writer);
    for prefix in gate.iter() {
        writeln!(writer, "{prefix}")?;
    }
    writer.flush()?;
    Ok(gate.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PrefixGate;

    #[test]
    fn written_table_loads_back() {
        let lexicon = Lexicon::from_unsorted(["triangles", "tangle", "tan", "at"]);
        let mut out = Vec::new();
        let count = write_prefixes(&lexicon, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        assert_eq!(lines.len(), count);

        let gate = PrefixGate::new(lines).unwrap();
        assert_eq!(gate, PrefixGate::derive(&lexicon));
        assert!(gate.contains("tan"));
        assert!(gate.contains("tria"));
        assert!(!gate.contains("at"));
    }

    #[test]
    fn empty_lexicon_writes_nothing() {
        let mut out = Vec::new();
        let count = write_prefixes(&Lexicon::default(), &mut out).unwrap();
        assert_eq!(count, 0);
        assert!(out.is_empty());
    }
}
