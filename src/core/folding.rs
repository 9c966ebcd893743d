//! Spelling normalization: `x` expansion, digraph folding, geminate folding

use super::alphabet::{is_geminable, Unit};
use super::rewrite::{rewrite, Rewrite};

/// Hungarian multi-letter spellings and the sound they fold to
///
/// Geminate spellings come first so `ccs` never folds as `c` + `cs`.
const DIGRAPHS: [(&str, char, bool); 18] = [
    ("ccs", 'č', true),
    ("ddzs", 'ĵ', true),
    ("ddz", 'ď', true),
    ("ggy", 'ǧ', true),
    ("lly", 'j', true),
    ("nny", 'ɲ', true),
    ("ssz", 'ʃ', true),
    ("tty", 'ť', true),
    ("zzs", 'ž', true),
    ("cs", 'č', false),
    ("dzs", 'ĵ', false),
    ("dz", 'ď', false),
    ("gy", 'ǧ', false),
    ("ly", 'j', false),
    ("ny", 'ɲ', false),
    ("sz", 'ʃ', false),
    ("ty", 'ť', false),
    ("zs", 'ž', false),
];

/// `x` is read as `ksz`
pub fn expand_x(units: &[Unit]) -> Vec<Unit> {
    let mut out = Vec::with_capacity(units.len());
    for u in units {
        match u {
            Unit::Sound { base: 'x', .. } => {
                out.extend([Unit::short('k'), Unit::short('s'), Unit::short('z')]);
            }
            _ => out.push(*u),
        }
    }
    out
}

/// Whether `rest` starts with `spelling` written in short letters
fn spelled(rest: &[Unit], spelling: &str) -> Option<usize> {
    let mut n = 0;
    for c in spelling.chars() {
        if !rest.get(n)?.is_short(c) {
            return None;
        }
        n += 1;
    }
    Some(n)
}

/// Fold digraphs and trigraphs into single sounds
pub fn fold_digraphs(units: &[Unit]) -> Vec<Unit> {
    rewrite(units, |rest| {
        DIGRAPHS.iter().find_map(|&(spelling, base, long)| {
            spelled(rest, spelling).map(|n| Rewrite::new(n, vec![Unit::Sound { base, long }]))
        })
    })
}

/// Fold two identical short consonants into one long one
pub fn fold_geminates(units: &[Unit]) -> Vec<Unit> {
    rewrite(units, |rest| {
        let c = rest.first()?.short_in(is_geminable)?;
        if rest.get(1)?.is_short(c) {
            Some(Rewrite::new(2, vec![Unit::long(c)]))
        } else {
            None
        }
    })
}

/// Digraph folding followed by geminate folding
pub fn fold_spelling(units: &[Unit]) -> Vec<Unit> {
    fold_geminates(&fold_digraphs(units))
}

/// Drop all morph boundary markers
pub fn strip_boundaries(units: &[Unit]) -> Vec<Unit> {
    units.iter().filter(|u| !u.is_boundary()).copied().collect()
}
