//! Configuration file load/save (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::TranscriberOptions;

/// How a sentence is handed to the transcriber
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Word by word; rules never cross word boundaries
    Strict,
    /// The whole sentence at once; the first token carries the result
    Lax,
}

/// EmPhon settings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EmphonConfig {
    /// Output IPA instead of the internal alphabet
    #[serde(default = "default_ipaize")]
    pub ipaize: bool,
    /// Palatalize `d`/`t` before `ny`
    #[serde(default)]
    pub optional_palatal_assimilation: bool,
    #[serde(default = "default_mode")]
    pub mode: Mode,
    /// Number of assimilation passes (at least 1)
    #[serde(default = "default_passes")]
    pub passes: usize,
    /// Emit a `# phon = ...` comment line per sentence
    #[serde(default)]
    pub sentence_comment: bool,
    /// External IPA table; the embedded one when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipa_table: Option<PathBuf>,
}

fn default_ipaize() -> bool {
    true
}

fn default_mode() -> Mode {
    Mode::Lax
}

fn default_passes() -> usize {
    2
}

impl Default for EmphonConfig {
    fn default() -> Self {
        Self {
            ipaize: default_ipaize(),
            optional_palatal_assimilation: false,
            mode: default_mode(),
            passes: default_passes(),
            sentence_comment: false,
            ipa_table: None,
        }
    }
}

impl EmphonConfig {
    pub fn transcriber_options(&self) -> TranscriberOptions {
        TranscriberOptions {
            ipaize: self.ipaize,
            optional_palatal_assimilation: self.optional_palatal_assimilation,
            passes: self.passes,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.passes == 0 {
            return Err(ConfigError::Invalid("passes must be at least 1".into()));
        }
        Ok(())
    }

    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: EmphonConfig =
            serde_json::from_str(json_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration load/save error
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    /// Bad JSON or an unknown value
    Parse(String),
    /// Well-formed but out of range
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {}", e),
            ConfigError::Parse(s) => write!(f, "cannot parse config: {}", s),
            ConfigError::Invalid(s) => write!(f, "invalid config: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

/// Config file path
///
/// `$EMPHON_CONFIG`, else `$XDG_CONFIG_HOME/emphon/config.json`, else
/// `~/.config/emphon/config.json`.
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os("EMPHON_CONFIG").filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("/var/tmp"))
                .join(".config")
        });
    base.join("emphon").join("config.json")
}

/// Load the config file (defaults when it does not exist)
pub fn load_config() -> Result<EmphonConfig, ConfigError> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<EmphonConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(content) => EmphonConfig::from_json(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::warn!("no config at {}, using defaults", path.display());
            Ok(EmphonConfig::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// Save the config file
pub fn save_config(config: &EmphonConfig) -> Result<(), ConfigError> {
    save_config_to(config, &config_path())
}

pub fn save_config_to(config: &EmphonConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json =
        serde_json::to_string_pretty(config).map_err(|e| ConfigError::Parse(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EmphonConfig::default();
        assert!(config.ipaize);
        assert!(!config.optional_palatal_assimilation);
        assert_eq!(config.mode, Mode::Lax);
        assert_eq!(config.passes, 2);
        assert!(!config.sentence_comment);
        assert_eq!(config.ipa_table, None);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = EmphonConfig {
            ipaize: false,
            mode: Mode::Strict,
            passes: 3,
            ..EmphonConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""mode":"strict""#));
        let parsed = EmphonConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = EmphonConfig::from_json(r#"{"mode": "strict"}"#).unwrap();
        assert_eq!(config.mode, Mode::Strict);
        assert!(config.ipaize);
        assert_eq!(config.passes, 2);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let result = EmphonConfig::from_json(r#"{"mode": "loose"}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_zero_passes_rejected() {
        let result = EmphonConfig::from_json(r#"{"passes": 0}"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_transcriber_options() {
        let config = EmphonConfig {
            optional_palatal_assimilation: true,
            ..EmphonConfig::default()
        };
        let options = config.transcriber_options();
        assert!(options.ipaize);
        assert!(options.optional_palatal_assimilation);
        assert_eq!(options.passes, 2);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("emphon-test-missing/config.json");
        let config = load_config_from(&path).unwrap();
        assert_eq!(config, EmphonConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("emphon-test-{}", std::process::id()));
        let path = dir.join("nested").join("config.json");
        let config = EmphonConfig {
            sentence_comment: true,
            ipa_table: Some(PathBuf::from("/tmp/ipa.json")),
            ..EmphonConfig::default()
        };
        save_config_to(&config, &path).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), config);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = std::env::temp_dir().join(format!("emphon-test-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        fs::write(&path, "{ nope").unwrap();
        assert!(load_config_from(&path).is_err());
        let _ = fs::remove_dir_all(&dir);
    }
}
