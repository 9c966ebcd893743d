//! Segmented text -> phonetic transcription
//!
//! Normalization runs once, then the assimilation pipeline is repeated
//! `passes` times so that changes made late in one pass can feed rules that
//! ran earlier.

use super::alphabet::{parse, render, Unit};
use super::folding::{expand_x, fold_spelling, strip_boundaries};
use super::ipa::{IpaTable, IpaTableError};
use super::rules::{self, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscriberOptions {
    /// Render the result in IPA instead of the internal alphabet
    pub ipaize: bool,
    /// Also palatalize `d`/`t` before `ny`
    pub optional_palatal_assimilation: bool,
    /// Number of times the assimilation pipeline runs
    pub passes: usize,
}

impl Default for TranscriberOptions {
    fn default() -> Self {
        Self {
            ipaize: true,
            optional_palatal_assimilation: false,
            passes: 2,
        }
    }
}

const NORMALIZATION: [(&str, Rule); 4] = [
    ("x expansion", expand_x),
    ("spelling", fold_spelling),
    ("h realization", rules::h_realization),
    ("hiatus filling", rules::hiatus_filling),
];

#[derive(Debug, Clone)]
pub struct Transcriber {
    options: TranscriberOptions,
    table: IpaTable,
    pipeline: Vec<(&'static str, Rule)>,
}

impl Transcriber {
    /// Transcriber with the embedded IPA table
    pub fn new(options: TranscriberOptions) -> Result<Self, IpaTableError> {
        Ok(Self::with_table(options, IpaTable::embedded()?))
    }

    pub fn with_table(options: TranscriberOptions, table: IpaTable) -> Self {
        let palatal: Rule = if options.optional_palatal_assimilation {
            rules::palatal_assimilation_with_clusters
        } else {
            rules::palatal_assimilation
        };

        let pipeline: Vec<(&'static str, Rule)> = vec![
            ("velar nasal", rules::velar_nasalization),
            ("l assimilation", rules::l_assimilation),
            ("degemination", rules::degemination),
            ("n lateral", rules::n_lateral_assimilation),
            ("palatal", palatal),
            ("labial nasal", rules::labial_nasalization),
            ("sibilant", rules::sibilant_assimilation),
            ("voice", rules::voice_assimilation),
            ("nasal place", rules::nasal_place_assimilation),
        ];

        Self {
            options,
            table,
            pipeline,
        }
    }

    pub fn options(&self) -> &TranscriberOptions {
        &self.options
    }

    /// Transcribe segmented text using the configured output alphabet
    pub fn transcribe(&self, segmented: &str) -> String {
        self.process(segmented, self.options.ipaize)
    }

    /// Transcribe, choosing the output alphabet per call
    pub fn process(&self, segmented: &str, ipaize: bool) -> String {
        let units = self.to_internal(segmented);
        if ipaize {
            self.ipaize(&units)
        } else {
            render(&units)
        }
    }

    /// Run every rule and return the internal form (markers kept)
    pub fn to_internal(&self, segmented: &str) -> Vec<Unit> {
        let mut units = parse(segmented);
        for &(name, rule) in NORMALIZATION.iter() {
            units = apply(name, rule, &units);
        }
        for _ in 0..self.options.passes {
            for &(name, rule) in &self.pipeline {
                units = apply(name, rule, &units);
            }
        }
        units
    }

    /// Render units in IPA
    ///
    /// Markers are dropped first, which can bring doubled letters together, so
    /// spelling is folded once more before lookup.
    pub fn ipaize(&self, units: &[Unit]) -> String {
        let units = fold_spelling(&strip_boundaries(units));
        let mut out = String::with_capacity(units.len() * 2);
        for u in &units {
            let symbol = u.symbol();
            match self.table.lookup(symbol) {
                Some(ipa) => out.push_str(ipa),
                None => out.push(symbol),
            }
        }
        out
    }
}

fn apply(name: &str, rule: Rule, units: &[Unit]) -> Vec<Unit> {
    let out = rule(units);
    if log::log_enabled!(log::Level::Trace) {
        log::trace!("{:<16} {}", name, render(&out));
    }
    out
}
