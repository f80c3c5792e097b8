//! Normalizer configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use layered_kreyol_grammar::{BuiltinTables, CliticPolicy, FileTables, TableProvider};

use crate::ConfigError;

/// Settings for a [`Normalizer`](crate::Normalizer).
///
/// Loaded from TOML; every key is optional:
///
/// ```toml
/// enable_segmentation = true
/// validate_tam_sequences = false
/// clitic_policy = "vowel-final-host"   # or "standalone-only"
/// tables_dir = "data/lexicon"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizerConfig {
    /// Split fused forms (`map` -> `m` `ap`) before tagging.
    pub enable_segmentation: bool,
    /// Warn about adjacent TAM markers outside the legal combinations.
    pub validate_tam_sequences: bool,
    pub clitic_policy: CliticPolicy,
    /// Directory of JSON lexical tables; built-in tables when unset.
    pub tables_dir: Option<PathBuf>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            enable_segmentation: true,
            validate_tam_sequences: false,
            clitic_policy: CliticPolicy::default(),
            tables_dir: None,
        }
    }
}

impl NormalizerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: "<inline>".to_string(),
            source,
        })
    }

    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// The table provider this configuration selects.
    pub fn table_provider(&self) -> Box<dyn TableProvider> {
        match &self.tables_dir {
            Some(dir) => Box::new(FileTables::new(dir.clone())),
            None => Box::new(BuiltinTables),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NormalizerConfig::default();
        assert!(config.enable_segmentation);
        assert!(!config.validate_tam_sequences);
        assert_eq!(config.clitic_policy, CliticPolicy::VowelFinalHost);
        assert_eq!(config.tables_dir, None);
    }

    #[test]
    fn test_partial_toml() {
        let config = NormalizerConfig::from_toml_str(
            r#"
            enable_segmentation = false
            clitic_policy = "standalone-only"
            "#,
        )
        .unwrap();

        assert!(!config.enable_segmentation);
        assert_eq!(config.clitic_policy, CliticPolicy::StandaloneOnly);
        assert!(!config.validate_tam_sequences);
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let err = NormalizerConfig::from_toml_str("segment = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));

        let err = NormalizerConfig::from_toml_str(r#"clitic_policy = "strict""#).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse config <inline>"));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = NormalizerConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(missing, NormalizerConfig::default());

        let path = dir.path().join("kreyol.toml");
        fs::write(&path, "validate_tam_sequences = true\ntables_dir = \"data/lexicon\"\n").unwrap();
        let config = NormalizerConfig::load(&path).unwrap();
        assert!(config.validate_tam_sequences);
        assert_eq!(config.tables_dir, Some(PathBuf::from("data/lexicon")));
    }
}
