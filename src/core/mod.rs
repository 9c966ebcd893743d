//! Phonetic transcription core

pub mod alphabet;
pub mod folding;
pub mod ipa;
pub mod rewrite;
pub mod rules;
pub mod transcriber;

pub use alphabet::{Boundary, Unit};
pub use ipa::{IpaTable, IpaTableError};
pub use transcriber::{Transcriber, TranscriberOptions};
