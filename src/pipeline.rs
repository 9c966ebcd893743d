//! Sentence driver: segmentation followed by transcription

use crate::config::{EmphonConfig, Mode};
use crate::core::{IpaTable, IpaTableError, Transcriber};
use crate::segmentation::{SegmentError, Segmenter, Token};

/// Filler for tokens whose transcription is carried by the first token
pub const PADDING: &str = "_";

#[derive(Debug)]
pub enum EmphonError {
    Segment(SegmentError),
    IpaTable(IpaTableError),
}

impl std::fmt::Display for EmphonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmphonError::Segment(e) => write!(f, "{}", e),
            EmphonError::IpaTable(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for EmphonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmphonError::Segment(e) => Some(e),
            EmphonError::IpaTable(e) => Some(e),
        }
    }
}

impl From<SegmentError> for EmphonError {
    fn from(e: SegmentError) -> Self {
        EmphonError::Segment(e)
    }
}

impl From<IpaTableError> for EmphonError {
    fn from(e: IpaTableError) -> Self {
        EmphonError::IpaTable(e)
    }
}

/// Transcription of one sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceTranscription {
    /// `# phon = ...` line, when enabled
    pub comment: Option<String>,
    /// One entry per input token
    pub phon: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Emphon {
    segmenter: Segmenter,
    transcriber: Transcriber,
    mode: Mode,
    sentence_comment: bool,
}

impl Emphon {
    pub fn new(config: &EmphonConfig) -> Result<Self, EmphonError> {
        let table = match &config.ipa_table {
            Some(path) => IpaTable::load(&path.to_string_lossy())?,
            None => IpaTable::embedded()?,
        };
        let transcriber = Transcriber::with_table(config.transcriber_options(), table);

        Ok(Self {
            segmenter: Segmenter::new(),
            transcriber,
            mode: config.mode,
            sentence_comment: config.sentence_comment,
        })
    }

    pub fn transcriber(&self) -> &Transcriber {
        &self.transcriber
    }

    /// Segment and transcribe one sentence
    ///
    /// A malformed analysis on any token fails the whole sentence.
    pub fn process_sentence(&self, tokens: &[Token]) -> Result<SentenceTranscription, EmphonError> {
        let segmented = self.segmenter.segment_sentence(tokens)?;

        let phon = match self.mode {
            Mode::Strict => self.transcribe_strict(&segmented),
            Mode::Lax => self.transcribe_lax(&segmented),
        };

        let comment = if self.sentence_comment {
            let whole = match self.mode {
                Mode::Lax => phon.first().cloned().unwrap_or_default(),
                Mode::Strict => phon.concat(),
            };
            Some(format!("# phon = {}", whole.trim_end()))
        } else {
            None
        };

        Ok(SentenceTranscription { comment, phon })
    }

    /// Each word on its own; rules never cross a word boundary
    pub fn transcribe_strict(&self, segmented: &[String]) -> Vec<String> {
        segmented
            .iter()
            .map(|word| self.transcriber.transcribe(word))
            .collect()
    }

    /// The whole sentence at once; the first entry carries it, the rest are padding
    pub fn transcribe_lax(&self, segmented: &[String]) -> Vec<String> {
        if segmented.is_empty() {
            return Vec::new();
        }
        let sentence = self.transcriber.transcribe(&segmented.concat());

        let mut phon = Vec::with_capacity(segmented.len());
        phon.push(sentence);
        phon.resize(segmented.len(), PADDING.to_string());
        phon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emphon(mode: Mode) -> Emphon {
        Emphon::new(&EmphonConfig {
            ipaize: false,
            mode,
            ..EmphonConfig::default()
        })
        .unwrap()
    }

    fn sentence() -> Vec<Token> {
        vec![
            Token::new("kút", r#"[{"morphana": "[/N]=kút+[Nom]="}]"#),
            Token::new("ban", r#"[{"morphana": "[/N]=ban"}]"#),
        ]
    }

    #[test]
    fn test_strict_mode() {
        let result = emphon(Mode::Strict).process_sentence(&sentence()).unwrap();
        assert_eq!(result.phon, vec!["kút ", "ban "]);
        assert_eq!(result.comment, None);
    }

    #[test]
    fn test_lax_mode() {
        let result = emphon(Mode::Lax).process_sentence(&sentence()).unwrap();
        assert_eq!(result.phon, vec!["kút ban ", "_"]);
    }

    #[test]
    fn test_lax_padding() {
        let e = emphon(Mode::Lax);
        let segmented: Vec<String> = vec!["a ".into(), "b ".into(), "c ".into()];
        assert_eq!(e.transcribe_lax(&segmented), vec!["a b c ", "_", "_"]);
        assert!(e.transcribe_lax(&[]).is_empty());
    }

    #[test]
    fn test_lax_assimilates_across_words() {
        let e = emphon(Mode::Lax);
        let segmented: Vec<String> = vec!["nem ".into(), "vár ".into()];
        assert_eq!(e.transcribe_lax(&segmented), vec!["neɱvár ", "_"]);
        assert_eq!(e.transcribe_strict(&segmented), vec!["nem ", "vár "]);
    }

    #[test]
    fn test_sentence_comment() {
        let e = Emphon::new(&EmphonConfig {
            ipaize: false,
            sentence_comment: true,
            ..EmphonConfig::default()
        })
        .unwrap();
        let result = e.process_sentence(&sentence()).unwrap();
        assert_eq!(result.comment.as_deref(), Some("# phon = kút ban"));
    }

    #[test]
    fn test_malformed_fails_sentence() {
        let tokens = vec![
            Token::new("a", ""),
            Token::new("b", r#"[{"morphana": "garbage"}]"#),
        ];
        let result = emphon(Mode::Lax).process_sentence(&tokens);
        assert!(matches!(
            result,
            Err(EmphonError::Segment(SegmentError::MalformedAnalysis(_)))
        ));
    }

    #[test]
    fn test_missing_ipa_table() {
        let result = Emphon::new(&EmphonConfig {
            ipa_table: Some("/nonexistent/ipa.json".into()),
            ..EmphonConfig::default()
        });
        assert!(matches!(result, Err(EmphonError::IpaTable(_))));
    }
}
