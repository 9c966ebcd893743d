//! Surface form + analyses -> segmented word

use super::analysis::{boundary_count, parse_candidates, parse_morphana, SegmentError};
use crate::core::Boundary;

/// One input token: surface form and its raw `anas` JSON field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub form: String,
    pub anas: String,
}

impl Token {
    pub fn new(form: &str, anas: &str) -> Self {
        Self {
            form: form.to_string(),
            anas: anas.to_string(),
        }
    }
}

/// Joins the morphs of the finest analysis with boundary markers
#[derive(Debug, Clone, Copy, Default)]
pub struct Segmenter;

impl Segmenter {
    pub fn new() -> Self {
        Self
    }

    /// The analysis with the most morph joints; the first one wins a tie
    pub fn select_analysis(candidates: &[String]) -> Option<&str> {
        let mut best: Option<&String> = None;
        for c in candidates {
            match best {
                Some(b) if boundary_count(b) >= boundary_count(c) => {}
                _ => best = Some(c),
            }
        }
        best.map(String::as_str)
    }

    /// Segment one word
    ///
    /// Without a usable analysis the lowercased surface form is returned. The
    /// result always ends in a single space.
    pub fn segment(&self, surface: &str, candidates: &[String]) -> Result<String, SegmentError> {
        let analysis = match Self::select_analysis(candidates) {
            Some(a) if !a.is_empty() => a,
            _ => return Ok(format!("{} ", surface.to_lowercase())),
        };
        log::debug!("{}: {}", surface, analysis);

        let morphs = parse_morphana(analysis);
        let Some((last, init)) = morphs.split_last() else {
            return Err(SegmentError::MalformedAnalysis(analysis.to_string()));
        };

        let mut word = String::new();
        // set once a root has been followed by a suffix
        let mut root_ended = false;

        for (i, morph) in init.iter().enumerate() {
            word.push_str(&morph.form.to_lowercase());

            let next = &morphs[i + 1];
            if next.form.is_empty() {
                continue;
            }
            let marker = if root_ended {
                Boundary::BetweenSuffixes
            } else {
                match (morph.is_main_class(), next.is_main_class()) {
                    (true, true) => Boundary::BetweenRoots,
                    (false, true) => Boundary::BeforeRoot,
                    (true, false) => {
                        root_ended = true;
                        Boundary::AfterRoot
                    }
                    (false, false) => Boundary::BetweenSuffixes,
                }
            };
            word.push(marker.symbol());
        }
        // a trailing empty morph (e.g. nominative) leaves nothing behind
        word.push_str(&last.form.to_lowercase());
        word.push(' ');

        Ok(word)
    }

    /// Segment a token, reading its candidates from the `anas` field
    pub fn segment_token(&self, token: &Token) -> Result<String, SegmentError> {
        let candidates = parse_candidates(&token.anas)?;
        self.segment(&token.form, &candidates)
    }

    /// Segment every token of a sentence, one entry per token
    pub fn segment_sentence(&self, tokens: &[Token]) -> Result<Vec<String>, SegmentError> {
        tokens.iter().map(|t| self.segment_token(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(surface: &str, candidates: &[&str]) -> String {
        let candidates: Vec<String> = candidates.iter().map(|s| s.to_string()).collect();
        Segmenter::new().segment(surface, &candidates).unwrap()
    }

    #[test]
    fn test_root_then_suffixes() {
        assert_eq!(seg("házakban", &["[/N]=ház+[Pl]=ak+[Ine]=ban"]), "ház~ak|ban ");
    }

    #[test]
    fn test_compound() {
        assert_eq!(seg("lapátnyél", &["[/N]=lapát+[/N]=nyél+[Nom]="]), "lapát#nyél ");
    }

    #[test]
    fn test_prefix_before_root() {
        assert_eq!(seg("megad", &["[/Prev]=meg+[/V]=ad"]), "meg§ad ");
    }

    #[test]
    fn test_suffix_latch() {
        // after the first root-to-suffix boundary everything is `|`,
        // even a following root
        assert_eq!(
            seg("x", &["[/N]=ház+[_Der]=i+[/N]=ház"]),
            "ház~i|ház "
        );
    }

    #[test]
    fn test_non_main_pair() {
        assert_eq!(seg("x", &["[/Prev]=el+[/Prev]=ő"]), "el|ő ");
    }

    #[test]
    fn test_empty_morph_skips_marker() {
        assert_eq!(seg("ház", &["[/N]=ház+[Nom]="]), "ház ");
        assert_eq!(seg("x", &["[/N]=a+[Nom]=+[Pl]=k"]), "a|k ");
    }

    #[test]
    fn test_single_morph() {
        assert_eq!(seg("Ház", &["[/N]=Ház"]), "ház ");
    }

    #[test]
    fn test_lowercases_morphs() {
        assert_eq!(seg("x", &["[/N]=Buda+[/N]=Pest"]), "buda#pest ");
    }

    #[test]
    fn test_most_joints_wins() {
        assert_eq!(
            seg("házak", &["[/N]=házak", "[/N]=ház+[Pl]=ak", "[/V]=ház"]),
            "ház~ak "
        );
    }

    #[test]
    fn test_tie_keeps_first() {
        assert_eq!(seg("x", &["[/N]=a+[Pl]=b", "[/V]=c+[/V]=d"]), "a~b ");
        let candidates = vec!["[/N]=a".to_string(), "[/V]=b".to_string()];
        assert_eq!(Segmenter::select_analysis(&candidates), Some("[/N]=a"));
    }

    #[test]
    fn test_fallback_to_surface() {
        assert_eq!(seg("Budapest", &[]), "budapest ");
        assert_eq!(seg(",", &[""]), ", ");
    }

    #[test]
    fn test_malformed_analysis() {
        let candidates = vec!["garbage".to_string()];
        let result = Segmenter::new().segment("x", &candidates);
        assert!(matches!(result, Err(SegmentError::MalformedAnalysis(_))));
    }

    #[test]
    fn test_no_adjacent_markers() {
        let out = seg("x", &["[/N]=a+[Nom]=+[/N]=b+[Pl]=+[Ine]=c"]);
        let markers = ['|', '§', '#', '~'];
        let chars: Vec<char> = out.chars().collect();
        for w in chars.windows(2) {
            assert!(!(markers.contains(&w[0]) && markers.contains(&w[1])), "{}", out);
        }
    }

    #[test]
    fn test_segment_sentence() {
        let tokens = vec![
            Token::new("Házak", r#"[{"morphana": "[/N]=ház+[Pl]=ak+[Nom]="}]"#),
            Token::new(".", ""),
        ];
        let segmented = Segmenter::new().segment_sentence(&tokens).unwrap();
        assert_eq!(segmented, vec!["ház~ak ", ". "]);
    }

    #[test]
    fn test_segment_sentence_malformed() {
        let tokens = vec![Token::new("x", "{")];
        assert!(Segmenter::new().segment_sentence(&tokens).is_err());
    }
}
