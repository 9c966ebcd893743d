//! IPA table: internal alphabet symbol -> IPA string
//!
//! The table is a flat JSON object. Long sounds are keyed by their upper-case
//! symbol, e.g. `"s": "ʃ"` and `"S": "ʃː"`.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

const EMBEDDED_TABLE: &str = include_str!("../../data/ipa_key.json");

/// IPA table load/parse error
#[derive(Debug)]
pub enum IpaTableError {
    /// File read failure
    IoError(std::io::Error),
    /// Invalid JSON
    ParseError(String),
    /// Valid JSON, wrong shape
    FormatError(String),
}

impl std::fmt::Display for IpaTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IpaTableError::IoError(e) => write!(f, "cannot read IPA table: {}", e),
            IpaTableError::ParseError(s) => write!(f, "IPA table is not valid JSON: {}", s),
            IpaTableError::FormatError(s) => write!(f, "malformed IPA table: {}", s),
        }
    }
}

impl std::error::Error for IpaTableError {}

impl From<std::io::Error> for IpaTableError {
    fn from(e: std::io::Error) -> Self {
        IpaTableError::IoError(e)
    }
}

#[derive(Debug, Clone)]
pub struct IpaTable {
    entries: HashMap<char, String>,
}

impl IpaTable {
    /// Load a table from a JSON file
    pub fn load(path: &str) -> Result<Self, IpaTableError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let value: serde_json::Value = serde_json::from_reader(reader)
            .map_err(|e| IpaTableError::ParseError(e.to_string()))?;

        let table = Self::from_json_value(&value)?;
        log::debug!("loaded IPA table from {} ({} entries)", path, table.len());
        Ok(table)
    }

    pub fn from_json(json_str: &str) -> Result<Self, IpaTableError> {
        let value: serde_json::Value = serde_json::from_str(json_str)
            .map_err(|e| IpaTableError::ParseError(e.to_string()))?;

        Self::from_json_value(&value)
    }

    /// The table shipped with the crate
    pub fn embedded() -> Result<Self, IpaTableError> {
        Self::from_json(EMBEDDED_TABLE)
    }

    fn from_json_value(value: &serde_json::Value) -> Result<Self, IpaTableError> {
        let obj = value
            .as_object()
            .ok_or_else(|| IpaTableError::FormatError("expected a JSON object".into()))?;

        let mut entries = HashMap::with_capacity(obj.len());
        for (key, val) in obj {
            let mut chars = key.chars();
            let symbol = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(IpaTableError::FormatError(format!(
                        "key must be a single symbol: {:?}",
                        key
                    )))
                }
            };
            let ipa = val.as_str().ok_or_else(|| {
                IpaTableError::FormatError(format!("value for {:?} is not a string", key))
            })?;
            entries.insert(symbol, ipa.to_string());
        }

        Ok(Self { entries })
    }

    pub fn lookup(&self, symbol: char) -> Option<&str> {
        self.entries.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
