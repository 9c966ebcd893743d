pub mod config;
pub mod core;
pub mod pipeline;
pub mod segmentation;

pub use crate::core::{IpaTable, IpaTableError, Transcriber, TranscriberOptions};
pub use config::{load_config, EmphonConfig, Mode};
pub use pipeline::{Emphon, EmphonError, SentenceTranscription};
pub use segmentation::{SegmentError, Segmenter, Token};
