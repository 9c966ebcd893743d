//! H-realization and hiatus filling (run once, before the main passes)

use crate::core::alphabet::{is_non_i_vowel, is_sonorant, is_uvular_context, Unit};
use crate::core::folding::fold_geminates;
use crate::core::rewrite::{keep, rewrite, separator, Rewrite, Separators};

/// Realize `h` and `ch` by context
///
/// In order: word-final `ch` becomes a long `ḧ`; `h` between vowels becomes
/// `ɦ` and `hh` between vowels becomes a long `ḧ`; `ch` after a vowel becomes
/// `ḧ` unless a vowel follows; `h` after a sonorant becomes `ɦ`.
pub fn h_realization(units: &[Unit]) -> Vec<Unit> {
    let s = rewrite(units, word_final_ch);
    let s = rewrite(&s, |rest| intervocalic_h(rest, false));
    let s = rewrite(&s, |rest| intervocalic_h(rest, true));
    let s = rewrite(&s, postvocalic_ch);
    let s = rewrite(&s, postsonorant_h);
    fold_geminates(&s)
}

fn at_word_end(next: Option<&Unit>) -> bool {
    matches!(next, None | Some(Unit::Space) | Some(Unit::Other(_)))
}

// pech
fn word_final_ch(rest: &[Unit]) -> Option<Rewrite> {
    if rest.first()?.is_short('c') && rest.get(1)?.is_short('h') && at_word_end(rest.get(2)) {
        Some(Rewrite::new(2, vec![Unit::long('ḧ')]))
    } else {
        None
    }
}

// tehén, ahhoz
fn intervocalic_h(rest: &[Unit], long: bool) -> Option<Rewrite> {
    let before = *rest.first()?;
    if !before.is_vowel() {
        return None;
    }
    let (left, i) = separator(rest, 1, Separators::MARKERS_OR_SPACE);
    if *rest.get(i)? != (Unit::Sound { base: 'h', long }) {
        return None;
    }
    let (right, j) = separator(rest, i + 1, Separators::MARKERS_OR_SPACE);
    let after = *rest.get(j)?;
    if !after.is_vowel() {
        return None;
    }

    let mut out = vec![before];
    keep(&mut out, left);
    out.push(if long { Unit::long('ḧ') } else { Unit::short('ɦ') });
    keep(&mut out, right);
    out.push(after);
    Some(Rewrite::new(j + 1, out))
}

// pechből
fn postvocalic_ch(rest: &[Unit]) -> Option<Rewrite> {
    let vowel = *rest.first()?;
    if !vowel.is_vowel() {
        return None;
    }
    let (sep, i) = separator(rest, 1, Separators::MARKERS);
    if !rest.get(i)?.is_short('c') || !rest.get(i + 1)?.is_short('h') {
        return None;
    }
    let followed_ok = match rest.get(i + 2) {
        None | Some(Unit::Space) | Some(Unit::Boundary(_)) | Some(Unit::Other(_)) => true,
        Some(Unit::Sound { base, .. }) => is_uvular_context(*base),
    };
    if !followed_ok {
        return None;
    }

    let mut out = vec![vowel];
    keep(&mut out, sep);
    out.push(Unit::short('ḧ'));
    Some(Rewrite::new(i + 2, out))
}

// konyha
fn postsonorant_h(rest: &[Unit]) -> Option<Rewrite> {
    let son = rest.first()?.short_in(is_sonorant)?;
    let (sep, i) = separator(rest, 1, Separators::MARKERS);
    if !rest.get(i)?.is_short('h') {
        return None;
    }

    let mut out = vec![Unit::short(son)];
    keep(&mut out, sep);
    out.push(Unit::short('ɦ'));
    Some(Rewrite::new(i + 1, out))
}

/// Insert a `j` glide between `i` and a neighbouring vowel
///
/// A morph marker inside the hiatus is replaced by the glide; compound
/// boundaries block it.
pub fn hiatus_filling(units: &[Unit]) -> Vec<Unit> {
    // fiú
    let s = rewrite(units, |rest| {
        if !rest.first()?.is_short('i') {
            return None;
        }
        let (_, k) = separator(rest, 1, Separators::MORPH_MARKERS);
        let v = rest.get(k)?.short_in(is_non_i_vowel)?;
        Some(Rewrite::new(
            k + 1,
            vec![Unit::short('i'), Unit::short('j'), Unit::short(v)],
        ))
    });
    // kalauzi
    rewrite(&s, |rest| {
        let v = rest.first()?.short_in(is_non_i_vowel)?;
        let (_, k) = separator(rest, 1, Separators::MORPH_MARKERS);
        if !rest.get(k)?.is_short('i') {
            return None;
        }
        Some(Rewrite::new(
            k + 1,
            vec![Unit::short(v), Unit::short('j'), Unit::short('i')],
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::{parse, render};
    use crate::core::folding::fold_spelling;

    fn h(s: &str) -> String {
        render(&h_realization(&fold_spelling(&parse(s))))
    }

    fn hiatus(s: &str) -> String {
        render(&hiatus_filling(&parse(s)))
    }

    #[test]
    fn test_intervocalic_h() {
        assert_eq!(h("tehén "), "teɦén ");
        assert_eq!(h("ne|hogy "), "ne|ɦoǧ ");
        // across a word boundary too
        assert_eq!(h("a hal "), "a ɦal ");
    }

    #[test]
    fn test_intervocalic_long_h() {
        assert_eq!(h("ahhoz "), "aḦoz ");
    }

    #[test]
    fn test_word_initial_h_unchanged() {
        assert_eq!(h("hal "), "hal ");
    }

    #[test]
    fn test_word_final_ch() {
        assert_eq!(h("pech "), "peḦ ");
        assert_eq!(h("pech"), "peḦ");
        assert_eq!(h("pech."), "peḦ.");
    }

    #[test]
    fn test_ch_before_consonant() {
        assert_eq!(h("pech~ből "), "peḧ~ből ");
        assert_eq!(h("techno "), "teḧno ");
    }

    #[test]
    fn test_ch_before_vowel_unchanged() {
        assert_eq!(h("acha "), "acha ");
    }

    #[test]
    fn test_h_after_sonorant() {
        assert_eq!(h("konyha "), "koɲɦa ");
        assert_eq!(h("fel§hő "), "fel§ɦő ");
        // compound marker is tolerated here
        assert_eq!(h("ár#hullám "), "ár#ɦuLám ");
    }

    #[test]
    fn test_hiatus_after_i() {
        assert_eq!(hiatus("fiú "), "fijú ");
        assert_eq!(hiatus("dia "), "dija ");
        // the marker is replaced by the glide
        assert_eq!(hiatus("kocsi|a "), "kocsija ");
    }

    #[test]
    fn test_hiatus_before_i() {
        assert_eq!(hiatus("kalauzi "), "kalauzi ");
        assert_eq!(hiatus("mai "), "maji ");
        assert_eq!(hiatus("hajó|i "), "hajóji ");
    }

    #[test]
    fn test_hiatus_blocked_by_compound_marker() {
        assert_eq!(hiatus("mini#autó "), "mini#autó ");
    }

    #[test]
    fn test_hiatus_ignores_long_i_pairs() {
        assert_eq!(hiatus("ii "), "ii ");
        assert_eq!(hiatus("ií "), "ií ");
    }
}
