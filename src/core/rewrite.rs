//! Left-to-right rewrite engine
//!
//! Every phonological rule is a matcher that looks at the remaining units and
//! either declines or returns the span it consumed plus the replacement.
//! Matches never overlap: after a rewrite, scanning resumes right after the
//! consumed span.

use super::alphabet::{Boundary, Unit};

/// Which separators a rule tolerates between the two sides of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separators {
    /// `#` counts (the other three markers always do)
    compound: bool,
    /// the word-separating space counts
    space: bool,
}

impl Separators {
    /// `| § # ~`
    pub const MARKERS: Separators = Separators {
        compound: true,
        space: false,
    };
    /// `| § # ~` or a space
    pub const MARKERS_OR_SPACE: Separators = Separators {
        compound: true,
        space: true,
    };
    /// `| § ~`, i.e. not across a compound boundary
    pub const MORPH_MARKERS: Separators = Separators {
        compound: false,
        space: false,
    };

    pub fn admits(&self, unit: &Unit) -> bool {
        match unit {
            Unit::Boundary(Boundary::BetweenRoots) => self.compound,
            Unit::Boundary(_) => true,
            Unit::Space => self.space,
            _ => false,
        }
    }
}

/// Optional separator at `at`
///
/// Returns the separator (if one is tolerated there) and the index of the
/// unit following it.
pub fn separator(units: &[Unit], at: usize, allowed: Separators) -> (Option<Unit>, usize) {
    match units.get(at) {
        Some(u) if allowed.admits(u) => (Some(*u), at + 1),
        _ => (None, at),
    }
}

/// A successful match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// number of units consumed
    pub span: usize,
    pub replacement: Vec<Unit>,
}

impl Rewrite {
    pub fn new(span: usize, replacement: Vec<Unit>) -> Self {
        Self { span, replacement }
    }
}

/// Apply `matcher` at every position, left to right, without overlap
pub fn rewrite<F>(units: &[Unit], mut matcher: F) -> Vec<Unit>
where
    F: FnMut(&[Unit]) -> Option<Rewrite>,
{
    let mut out = Vec::with_capacity(units.len() + 4);
    let mut i = 0;

    while i < units.len() {
        match matcher(&units[i..]) {
            Some(rw) if rw.span > 0 => {
                out.extend(rw.replacement);
                i += rw.span;
            }
            _ => {
                out.push(units[i]);
                i += 1;
            }
        }
    }

    out
}

/// Push `sep` into `out` when present
pub(crate) fn keep(out: &mut Vec<Unit>, sep: Option<Unit>) {
    if let Some(u) = sep {
        out.push(u);
    }
}
