//! Assimilation rules of the main passes

use crate::core::alphabet::{
    is_devoicing_target, is_voiceless, is_voicing_trigger, voice_counterpart, Unit,
};
use crate::core::folding::{fold_geminates, fold_spelling};
use crate::core::rewrite::{keep, rewrite, separator, Rewrite, Separators};

/// `n` before `g`/`k` becomes the velar nasal `ŋ` (marker dropped)
pub fn velar_nasalization(units: &[Unit]) -> Vec<Unit> {
    let s = rewrite(units, |rest| {
        if !rest.first()?.is_short('n') {
            return None;
        }
        let (_, k) = separator(rest, 1, Separators::MARKERS);
        let stop = rest.get(k)?.short_of("gk")?;
        Some(Rewrite::new(k + 1, vec![Unit::short('ŋ'), Unit::short(stop)]))
    });
    fold_spelling(&s)
}

/// `l` (short or long) before `r` merges into a long `r`
pub fn l_assimilation(units: &[Unit]) -> Vec<Unit> {
    let s = rewrite(units, |rest| {
        if !matches!(rest.first()?, Unit::Sound { base: 'l', .. }) {
            return None;
        }
        let (_, k) = separator(rest, 1, Separators::MARKERS);
        if !rest.get(k)?.is_short('r') {
            return None;
        }
        Some(Rewrite::new(k + 1, vec![Unit::long('r')]))
    });
    fold_spelling(&s)
}

/// `n` before `l`/`r` merges into a long `l`/`r`, not across compounds
pub fn n_lateral_assimilation(units: &[Unit]) -> Vec<Unit> {
    let s = rewrite(units, |rest| {
        if !rest.first()?.is_short('n') {
            return None;
        }
        let (_, k) = separator(rest, 1, Separators::MORPH_MARKERS);
        let liquid = rest.get(k)?.short_of("lr")?;
        Some(Rewrite::new(k + 1, vec![Unit::long(liquid)]))
    });
    fold_geminates(&s)
}

/// Long sound a consonant merges into before `j`
fn merge_before_j(c: char) -> Option<char> {
    match c {
        'ǧ' | 'd' => Some('ǧ'),
        'l' => Some('j'),
        'n' | 'ɲ' => Some('ɲ'),
        't' | 'ť' => Some('ť'),
        _ => None,
    }
}

/// Palatal stop a dental stop becomes
fn palatal_of(c: char) -> Option<char> {
    match c {
        'd' => Some('ǧ'),
        't' => Some('ť'),
        _ => None,
    }
}

fn palatalize(units: &[Unit], clusters: bool) -> Vec<Unit> {
    // lát|ja, hagy|ja
    let s = rewrite(units, |rest| {
        let merged = rest.first()?.short_base().and_then(merge_before_j)?;
        let (_, k) = separator(rest, 1, Separators::MARKERS);
        if !rest.get(k)?.is_short('j') {
            return None;
        }
        Some(Rewrite::new(k + 1, vec![Unit::long(merged)]))
    });
    // átgyúr
    let s = rewrite(&s, |rest| {
        rest.first()?.short_of("dt")?;
        let (_, k) = separator(rest, 1, Separators::MARKERS_OR_SPACE);
        let palatal = rest.get(k)?.short_of("ǧť")?;
        Some(Rewrite::new(k + 1, vec![Unit::long(palatal)]))
    });
    let s = if clusters {
        // lapát#nyél
        rewrite(&s, |rest| {
            let palatal = rest.first()?.short_base().and_then(palatal_of)?;
            let (_, k) = separator(rest, 1, Separators::MARKERS_OR_SPACE);
            if !rest.get(k)?.is_short('ɲ') {
                return None;
            }
            Some(Rewrite::new(
                k + 1,
                vec![Unit::short(palatal), Unit::short('ɲ')],
            ))
        })
    } else {
        s
    };
    fold_geminates(&s)
}

/// Full and partial palatal assimilation
///
/// `d l n ɲ t ť ǧ` merge with a following `j` into a long palatal; `d`/`t`
/// merge with a following `ǧ`/`ť` into a long one.
pub fn palatal_assimilation(units: &[Unit]) -> Vec<Unit> {
    palatalize(units, false)
}

/// [`palatal_assimilation`] plus `d`/`t` before `ɲ` turning palatal
pub fn palatal_assimilation_with_clusters(units: &[Unit]) -> Vec<Unit> {
    palatalize(units, true)
}

/// `m`/`n` before `f`/`v` becomes the labiodental nasal `ɱ` (separator dropped)
pub fn labial_nasalization(units: &[Unit]) -> Vec<Unit> {
    let s = rewrite(units, |rest| {
        rest.first()?.short_of("mn")?;
        let (_, k) = separator(rest, 1, Separators::MARKERS_OR_SPACE);
        let fricative = rest.get(k)?.short_of("fv")?;
        Some(Rewrite::new(
            k + 1,
            vec![Unit::short('ɱ'), Unit::short(fricative)],
        ))
    });
    fold_geminates(&s)
}

/// Stop, tolerated separators, sibilant, resulting long affricate
const SIBILANT_MERGES: [(char, Separators, char, char); 6] = [
    ('t', Separators::MARKERS, 'ʃ', 'c'),
    ('t', Separators::MARKERS, 's', 'č'),
    ('t', Separators::MARKERS_OR_SPACE, 'c', 'c'),
    ('t', Separators::MARKERS_OR_SPACE, 'č', 'č'),
    ('d', Separators::MARKERS, 'ʃ', 'c'),
    ('d', Separators::MARKERS, 's', 'č'),
];

/// `t`/`d` merge with a following sibilant or affricate into a long affricate
pub fn sibilant_assimilation(units: &[Unit]) -> Vec<Unit> {
    let s = SIBILANT_MERGES
        .iter()
        .fold(units.to_vec(), |s, &(stop, allowed, sibilant, affricate)| {
            rewrite(&s, |rest| {
                if !rest.first()?.is_short(stop) {
                    return None;
                }
                let (_, k) = separator(rest, 1, allowed);
                if !rest.get(k)?.is_short(sibilant) {
                    return None;
                }
                Some(Rewrite::new(k + 1, vec![Unit::long(affricate)]))
            })
        });
    fold_geminates(&s)
}

/// Regressive voice assimilation between adjacent obstruents
///
/// Devoicing runs first, then voicing; separators are kept. `v` devoices but
/// never voices what precedes it, and `h` voices to `ɦ`.
pub fn voice_assimilation(units: &[Unit]) -> Vec<Unit> {
    let s = rewrite(units, |rest| {
        assimilate_voice(rest, is_devoicing_target, is_voiceless)
    });
    let s = rewrite(&s, |rest| {
        assimilate_voice(rest, is_voiceless, is_voicing_trigger)
    });
    fold_geminates(&s)
}

fn assimilate_voice(
    rest: &[Unit],
    target: fn(char) -> bool,
    trigger: fn(char) -> bool,
) -> Option<Rewrite> {
    let c = rest.first()?.short_in(target)?;
    let (sep, k) = separator(rest, 1, Separators::MARKERS);
    let next = rest.get(k)?.short_in(trigger)?;

    let mut out = vec![Unit::short(voice_counterpart(c)?)];
    keep(&mut out, sep);
    out.push(Unit::short(next));
    Some(Rewrite::new(k + 1, out))
}

/// `n` takes the place of a following labial or palatal
///
/// Before `p b f v` it becomes `m`, before `ǧ ť` it becomes `ɲ` (separators
/// kept); `n` before `ɲ` merges into a long `ɲ` (marker dropped).
pub fn nasal_place_assimilation(units: &[Unit]) -> Vec<Unit> {
    let s = rewrite(units, |rest| {
        if !rest.first()?.is_short('n') {
            return None;
        }
        let (sep, k) = separator(rest, 1, Separators::MARKERS);
        let c = rest.get(k)?.short_of("pbfvǧť")?;
        let nasal = if "pbfv".contains(c) { 'm' } else { 'ɲ' };

        let mut out = vec![Unit::short(nasal)];
        keep(&mut out, sep);
        out.push(Unit::short(c));
        Some(Rewrite::new(k + 1, out))
    });
    let s = rewrite(&s, |rest| {
        if !rest.first()?.is_short('n') {
            return None;
        }
        let (_, k) = separator(rest, 1, Separators::MARKERS);
        if !rest.get(k)?.is_short('ɲ') {
            return None;
        }
        Some(Rewrite::new(k + 1, vec![Unit::long('ɲ')]))
    });
    fold_geminates(&s)
}
