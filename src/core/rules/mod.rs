//! Phonological rewrite rules
//!
//! Every rule is a pure function over the unit sequence. Rules that can create
//! new doubled consonants end with a geminate fold of their own output.

mod assimilation;
mod degemination;
mod realization;

use super::alphabet::Unit;

pub use assimilation::{
    l_assimilation, labial_nasalization, n_lateral_assimilation, nasal_place_assimilation,
    palatal_assimilation, palatal_assimilation_with_clusters, sibilant_assimilation,
    velar_nasalization, voice_assimilation,
};
pub use degemination::degemination;
pub use realization::{h_realization, hiatus_filling};

/// A single rewrite rule
pub type Rule = fn(&[Unit]) -> Vec<Unit>;
