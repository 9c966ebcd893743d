//! Morphological segmentation

mod analysis;
mod segmenter;

pub use analysis::{boundary_count, parse_candidates, parse_morphana, Morph, SegmentError};
pub use segmenter::{Segmenter, Token};
