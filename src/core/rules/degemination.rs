//! Degemination: a long consonant shortens next to another consonant

use crate::core::alphabet::{is_consonant, is_nasal, is_obstruent, Unit};
use crate::core::folding::fold_geminates;
use crate::core::rewrite::{keep, rewrite, separator, Rewrite, Separators};

/// Shorten long consonants in consonant clusters
///
/// Sub-rules run in a fixed order, each as its own left-to-right pass.
pub fn degemination(units: &[Unit]) -> Vec<Unit> {
    let s = rewrite(units, long_before_consonant);
    let s = rewrite(&s, doubled_after_consonant);
    let s = rewrite(&s, long_after_consonant);
    let s = rewrite(&s, |rest| split_geminate_before(rest, is_obstruent));
    let s = rewrite(&s, |rest| long_before(rest, is_obstruent));
    let s = rewrite(&s, |rest| split_geminate_before(rest, is_nasal));
    let s = rewrite(&s, |rest| long_before(rest, is_nasal));
    fold_geminates(&s)
}

// toll|tartó, meggy fa
fn long_before_consonant(rest: &[Unit]) -> Option<Rewrite> {
    let c = rest.first()?.long_in(is_consonant)?;
    let (sep, k) = separator(rest, 1, Separators::MARKERS_OR_SPACE);
    let d = rest.get(k)?.short_in(is_consonant)?;

    let mut out = vec![Unit::short(c)];
    keep(&mut out, sep);
    out.push(Unit::short(d));
    Some(Rewrite::new(k + 1, out))
}

// hang|gal
fn doubled_after_consonant(rest: &[Unit]) -> Option<Rewrite> {
    let c1 = rest.first()?.short_in(is_consonant)?;
    let c2 = rest.get(1)?.short_in(is_consonant)?;
    let (_, k) = separator(rest, 2, Separators::MARKERS_OR_SPACE);
    if !rest.get(k)?.is_short(c2) {
        return None;
    }
    Some(Rewrite::new(k + 1, vec![Unit::short(c1), Unit::short(c2)]))
}

// mond~tt
fn long_after_consonant(rest: &[Unit]) -> Option<Rewrite> {
    let c = rest.first()?.short_in(is_consonant)?;
    let (_, k) = separator(rest, 1, Separators::MARKERS);
    let d = rest.get(k)?.long_in(is_consonant)?;
    Some(Rewrite::new(k + 1, vec![Unit::short(c), Unit::short(d)]))
}

// split doubled letter followed by a consonant of `class`
fn split_geminate_before(rest: &[Unit], class: fn(char) -> bool) -> Option<Rewrite> {
    let c = rest.first()?.short_in(is_consonant)?;
    let (_, k) = separator(rest, 1, Separators::MARKERS_OR_SPACE);
    if !rest.get(k)?.is_short(c) {
        return None;
    }
    let next = rest.get(k + 1)?.short_in(class)?;
    Some(Rewrite::new(k + 2, vec![Unit::short(c), Unit::short(next)]))
}

fn long_before(rest: &[Unit], class: fn(char) -> bool) -> Option<Rewrite> {
    let c = rest.first()?.long_in(is_consonant)?;
    let next = rest.get(1)?.short_in(class)?;
    Some(Rewrite::new(2, vec![Unit::short(c), Unit::short(next)]))
}
