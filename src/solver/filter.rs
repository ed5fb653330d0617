//! Prefix pruning
//!
//! Defines the PrefixFilter trait consulted by the search engine and its
//! concrete implementations.

use crate::core::{PREFIX_LENGTHS, PrefixGate};

/// Decides whether a partial candidate can still grow into a word
///
/// Implementations must never reject a prefix of a real word: a rejected
/// prefix abandons its whole subtree.
pub trait PrefixFilter {
    /// Check whether `prefix` (lowercase) is worth extending
    fn is_viable(&self, prefix: &[u8]) -> bool;
}

impl<T: PrefixFilter + ?Sized> PrefixFilter for &T {
    #[inline]
    fn is_viable(&self, prefix: &[u8]) -> bool {
        (**self).is_viable(prefix)
    }
}

impl PrefixFilter for PrefixGate {
    /// Only prefixes of exactly 3 or 4 letters are looked up; all other
    /// lengths pass.
    #[inline]
    fn is_viable(&self, prefix: &[u8]) -> bool {
        !PREFIX_LENGTHS.contains(&prefix.len()) || self.contains_bytes(prefix)
    }
}

/// Filter that accepts every prefix (pruning disabled)
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenGate;

impl PrefixFilter for OpenGate {
    #[inline]
    fn is_viable(&self, _prefix: &[u8]) -> bool {
        true
    }
}

/// Enum wrapper for all filter types
///
/// Allows runtime selection of pruning while maintaining static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum PruneMode<'a> {
    /// Prune with a prefix table
    Gate(&'a PrefixGate),
    /// Explore the full search space
    Off(OpenGate),
}

impl PrefixFilter for PruneMode<'_> {
    #[inline]
    fn is_viable(&self, prefix: &[u8]) -> bool {
        match self {
            Self::Gate(gate) => gate.is_viable(prefix),
            Self::Off(open) => open.is_viable(prefix),
        }
    }
}

impl<'a> PruneMode<'a> {
    /// Select pruning with `gate`, or no pruning when `enabled` is false
    #[must_use]
    pub const fn new(gate: &'a PrefixGate, enabled: bool) -> Self {
        if enabled {
            Self::Gate(gate)
        } else {
            Self::Off(OpenGate)
        }
    }

    /// Get the display name of this mode
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Gate(_) => "prefix gate",
            Self::Off(_) => "off",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> PrefixGate {
        PrefixGate::from_unsorted(["ban", "bang", "nig", "nigh"])
    }

    #[test]
    fn gate_checks_three_and_four_letter_prefixes() {
        let gate = gate();
        assert!(gate.is_viable(b"ban"));
        assert!(gate.is_viable(b"nigh"));
        assert!(!gate.is_viable(b"bat"));
        assert!(!gate.is_viable(b"bane"));
    }

    #[test]
    fn gate_passes_other_lengths() {
        let gate = gate();
        assert!(gate.is_viable(b""));
        assert!(gate.is_viable(b"z"));
        assert!(gate.is_viable(b"zz"));
        assert!(gate.is_viable(b"zzzzz"));
    }

    #[test]
    fn open_gate_accepts_everything() {
        assert!(OpenGate.is_viable(b"zzz"));
        assert!(OpenGate.is_viable(b"qqqq"));
    }

    #[test]
    fn prune_mode_dispatches() {
        let gate = gate();
        let on = PruneMode::new(&gate, true);
        let off = PruneMode::new(&gate, false);

        assert!(!on.is_viable(b"bat"));
        assert!(off.is_viable(b"bat"));
        assert_eq!(on.name(), "prefix gate");
        assert_eq!(off.name(), "off");
    }
}
