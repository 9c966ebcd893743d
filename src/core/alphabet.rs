//! Internal phonetic alphabet
//!
//! A transcription is held as a sequence of [`Unit`]s instead of raw text. Each
//! sound carries its own length flag, so upper case never has to stand in for
//! gemination while rules run. Text rendering still uses the upper-case-is-long
//! convention (`baRa`, `aḦoz`) so intermediate forms stay readable.

/// Morph boundary marker inserted by the segmenter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// `|` between two suffixes, or anything after the root latch
    BetweenSuffixes,
    /// `§` a non-root morph followed by a root
    BeforeRoot,
    /// `#` two roots (compound)
    BetweenRoots,
    /// `~` a root followed by a suffix
    AfterRoot,
}

impl Boundary {
    pub const ALL: [Boundary; 4] = [
        Boundary::BetweenSuffixes,
        Boundary::BeforeRoot,
        Boundary::BetweenRoots,
        Boundary::AfterRoot,
    ];

    /// Marker symbol as it appears in segmented text
    pub fn symbol(self) -> char {
        match self {
            Boundary::BetweenSuffixes => '|',
            Boundary::BeforeRoot => '§',
            Boundary::BetweenRoots => '#',
            Boundary::AfterRoot => '~',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '|' => Some(Boundary::BetweenSuffixes),
            '§' => Some(Boundary::BeforeRoot),
            '#' => Some(Boundary::BetweenRoots),
            '~' => Some(Boundary::AfterRoot),
            _ => None,
        }
    }
}

/// One position of an internal transcription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// A letter of the internal alphabet (`base` is always lower case)
    Sound { base: char, long: bool },
    /// Morph boundary marker
    Boundary(Boundary),
    /// Word separator
    Space,
    /// Digits, punctuation and anything else that rules never touch
    Other(char),
}

impl Unit {
    pub const fn short(base: char) -> Self {
        Unit::Sound { base, long: false }
    }

    pub const fn long(base: char) -> Self {
        Unit::Sound { base, long: true }
    }

    /// Base symbol of a short sound
    pub fn short_base(&self) -> Option<char> {
        match *self {
            Unit::Sound { base, long: false } => Some(base),
            _ => None,
        }
    }

    /// Base symbol of a long sound
    pub fn long_base(&self) -> Option<char> {
        match *self {
            Unit::Sound { base, long: true } => Some(base),
            _ => None,
        }
    }

    /// Short sound whose base satisfies `class`
    pub fn short_in(&self, class: fn(char) -> bool) -> Option<char> {
        self.short_base().filter(|&c| class(c))
    }

    /// Long sound whose base satisfies `class`
    pub fn long_in(&self, class: fn(char) -> bool) -> Option<char> {
        self.long_base().filter(|&c| class(c))
    }

    /// Short sound whose base is one of the letters of `set`
    pub fn short_of(&self, set: &str) -> Option<char> {
        self.short_base().filter(|&c| set.contains(c))
    }

    pub fn is_short(&self, c: char) -> bool {
        self.short_base() == Some(c)
    }

    pub fn is_vowel(&self) -> bool {
        matches!(*self, Unit::Sound { base, .. } if is_vowel(base))
    }

    pub fn is_boundary(&self) -> bool {
        matches!(self, Unit::Boundary(_))
    }

    /// Text form; long sounds render in upper case
    pub fn symbol(&self) -> char {
        match *self {
            Unit::Sound { base, long: false } => base,
            Unit::Sound { base, long: true } => long_symbol(base),
            Unit::Boundary(b) => b.symbol(),
            Unit::Space => ' ',
            Unit::Other(c) => c,
        }
    }
}

/// Upper-case form used to display a long sound
pub fn long_symbol(base: char) -> char {
    let mut upper = base.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(c), None) => c,
        _ => base,
    }
}

/// Parse segmented text into units
///
/// The input is lowercased first, so upper-case letters are read as ordinary
/// short sounds rather than as geminates.
pub fn parse(text: &str) -> Vec<Unit> {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if let Some(b) = Boundary::from_symbol(c) {
                Unit::Boundary(b)
            } else if c == ' ' {
                Unit::Space
            } else if c.is_alphabetic() {
                Unit::short(c)
            } else {
                Unit::Other(c)
            }
        })
        .collect()
}

/// Render units in the internal alphabet
pub fn render(units: &[Unit]) -> String {
    units.iter().map(Unit::symbol).collect()
}

pub fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'á' | 'e' | 'é' | 'i' | 'í' | 'o' | 'ó' | 'ö' | 'ő' | 'u' | 'ú' | 'ü' | 'ű'
    )
}

/// Vowels that take a hiatus glide next to `i`
pub fn is_non_i_vowel(c: char) -> bool {
    is_vowel(c) && c != 'i' && c != 'í'
}

/// Consonants the degemination rules operate on
pub fn is_consonant(c: char) -> bool {
    matches!(
        c,
        'b' | 'c'
            | 'd'
            | 'f'
            | 'g'
            | 'h'
            | 'j'
            | 'k'
            | 'l'
            | 'm'
            | 'n'
            | 'p'
            | 'q'
            | 'r'
            | 's'
            | 't'
            | 'v'
            | 'w'
            | 'x'
            | 'z'
            | 'č'
            | 'ď'
            | 'ǧ'
            | 'ɲ'
            | 'ʃ'
            | 'ť'
            | 'ž'
    )
}

/// Consonants whose doubled spelling folds into one long sound
pub fn is_geminable(c: char) -> bool {
    c != 'w' && is_consonant(c)
}

pub fn is_obstruent(c: char) -> bool {
    is_consonant(c) && !matches!(c, 'j' | 'l' | 'm' | 'n' | 'r' | 'ɲ')
}

pub fn is_nasal(c: char) -> bool {
    matches!(c, 'm' | 'n' | 'ɲ')
}

pub fn is_sonorant(c: char) -> bool {
    matches!(c, 'm' | 'n' | 'ɲ' | 'r' | 'l' | 'j')
}

/// Consonants allowed right after `ch` for it to read as `ḧ`
pub fn is_uvular_context(c: char) -> bool {
    c != 'h' && c != 'w' && is_consonant(c)
}

/// Obstruents that lose voice before a voiceless obstruent
pub fn is_devoicing_target(c: char) -> bool {
    matches!(c, 'b' | 'd' | 'ǧ' | 'g' | 'z' | 'ž' | 'ď' | 'v' | 'ĵ')
}

/// Obstruents that trigger voicing on a preceding voiceless obstruent
///
/// `v` is missing on purpose: it devoices but never voices what precedes it.
pub fn is_voicing_trigger(c: char) -> bool {
    matches!(c, 'b' | 'd' | 'ǧ' | 'g' | 'z' | 'ž' | 'ď' | 'ĵ')
}

pub fn is_voiceless(c: char) -> bool {
    matches!(c, 'p' | 't' | 'ť' | 'k' | 'ʃ' | 's' | 'c' | 'f' | 'h' | 'č')
}

/// Voiced/voiceless counterpart of an obstruent
pub fn voice_counterpart(c: char) -> Option<char> {
    match c {
        'p' => Some('b'),
        'b' => Some('p'),
        't' => Some('d'),
        'd' => Some('t'),
        'ť' => Some('ǧ'),
        'ǧ' => Some('ť'),
        'k' => Some('g'),
        'g' => Some('k'),
        'f' => Some('v'),
        'v' => Some('f'),
        'ʃ' => Some('z'),
        'z' => Some('ʃ'),
        's' => Some('ž'),
        'ž' => Some('s'),
        'c' => Some('ď'),
        'ď' => Some('c'),
        'č' => Some('ĵ'),
        'ĵ' => Some('č'),
        'h' => Some('ɦ'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_markers_and_space() {
        let units = parse("ház|ak §x");
        assert_eq!(units[0], Unit::short('h'));
        assert_eq!(units[3], Unit::Boundary(Boundary::BetweenSuffixes));
        assert_eq!(units[6], Unit::Space);
        assert_eq!(units[7], Unit::Boundary(Boundary::BeforeRoot));
    }

    #[test]
    fn test_parse_lowercases_input() {
        // upper case in the input is never read as length
        assert_eq!(parse("Ház"), parse("ház"));
        assert!(parse("BB").iter().all(|u| u.short_base() == Some('b')));
    }

    #[test]
    fn test_parse_other() {
        assert_eq!(parse("1,"), vec![Unit::Other('1'), Unit::Other(',')]);
    }

    #[test]
    fn test_render_long_as_upper() {
        let units = vec![
            Unit::short('b'),
            Unit::short('a'),
            Unit::long('r'),
            Unit::short('a'),
            Unit::Space,
        ];
        assert_eq!(render(&units), "baRa ");
        assert_eq!(render(&[Unit::long('ʃ'), Unit::long('ɲ')]), "ƩƝ");
        assert_eq!(render(&[Unit::long('ḧ')]), "Ḧ");
    }

    #[test]
    fn test_marker_symbols() {
        for b in Boundary::ALL {
            assert_eq!(Boundary::from_symbol(b.symbol()), Some(b));
        }
        assert_eq!(Boundary::from_symbol('a'), None);
    }

    #[test]
    fn test_classes() {
        assert!(is_consonant('w'));
        assert!(!is_geminable('w'));
        assert!(is_obstruent('ʃ'));
        assert!(!is_obstruent('ɲ'));
        assert!(is_nasal('ɲ'));
        assert!(is_sonorant('j'));
        assert!(!is_non_i_vowel('í'));
        assert!(is_non_i_vowel('ű'));
        assert!(!is_voicing_trigger('v'));
        assert!(is_devoicing_target('v'));
    }

    #[test]
    fn test_voice_pairs_are_symmetric() {
        for c in "pbtdťǧkgfvʃzsžcďčĵ".chars() {
            let other = voice_counterpart(c).unwrap();
            assert_eq!(voice_counterpart(other), Some(c));
        }
        assert_eq!(voice_counterpart('h'), Some('ɦ'));
        assert_eq!(voice_counterpart('m'), None);
    }
}
