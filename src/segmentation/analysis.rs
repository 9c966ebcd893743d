//! Morphological analysis strings
//!
//! An analysis looks like `[/N]=ház+[Pl]=ak+[Nom]=`: bracketed tags each
//! followed by `=` and the surface form of the morph, joined by `+`.

use std::collections::HashSet;

use lazy_static::lazy_static;
use serde::Deserialize;

lazy_static! {
    /// Verb, noun, adjective, adverb
    static ref MAIN_CLASS_TAGS: HashSet<&'static str> =
        ["/V", "/N", "/Adj", "/Adv"].into_iter().collect();
}

/// Segmentation error
#[derive(Debug)]
pub enum SegmentError {
    /// Analysis input that cannot be read as morphs
    MalformedAnalysis(String),
}

impl std::fmt::Display for SegmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SegmentError::MalformedAnalysis(s) => write!(f, "malformed analysis: {}", s),
        }
    }
}

impl std::error::Error for SegmentError {}

impl From<serde_json::Error> for SegmentError {
    fn from(e: serde_json::Error) -> Self {
        SegmentError::MalformedAnalysis(e.to_string())
    }
}

/// One tag/form pair of an analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morph {
    pub tag: String,
    pub form: String,
}

impl Morph {
    pub fn new(tag: &str, form: &str) -> Self {
        Self {
            tag: tag.to_string(),
            form: form.to_string(),
        }
    }

    /// Whether the morph is a root of a main word class
    pub fn is_main_class(&self) -> bool {
        MAIN_CLASS_TAGS.contains(self.tag.as_str())
    }
}

/// Extract the `[tag]=form` pairs of an analysis
///
/// Text outside the pairs is ignored. The tag runs to the first `]=` after
/// the opening bracket, the form to the next `+` or the end of the string.
pub fn parse_morphana(analysis: &str) -> Vec<Morph> {
    let mut morphs = Vec::new();
    let mut pos = 0;

    while let Some(open) = analysis[pos..].find('[').map(|i| pos + i) {
        let tag_start = open + 1;
        let Some(close) = analysis[tag_start..].find("]=").map(|i| tag_start + i) else {
            break;
        };
        let form_start = close + 2;
        let (form_end, next) = match analysis[form_start..].find('+') {
            Some(i) => (form_start + i, form_start + i + 1),
            None => (analysis.len(), analysis.len()),
        };

        morphs.push(Morph::new(
            &analysis[tag_start..close],
            &analysis[form_start..form_end],
        ));
        pos = next;
    }

    morphs
}

/// Number of morph joints (`+`) in an analysis
pub fn boundary_count(analysis: &str) -> usize {
    analysis.matches('+').count()
}

#[derive(Debug, Deserialize)]
struct Candidate {
    morphana: String,
}

/// Read the `morphana` strings from an `anas` JSON array
///
/// An empty field means no candidates.
pub fn parse_candidates(anas: &str) -> Result<Vec<String>, SegmentError> {
    if anas.trim().is_empty() {
        return Ok(Vec::new());
    }
    let candidates: Vec<Candidate> = serde_json::from_str(anas)?;
    Ok(candidates.into_iter().map(|c| c.morphana).collect())
}
