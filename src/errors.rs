//! Error types for configuration and lexicon loading.
//!
//! Nothing here is produced by [`Normalizer::normalize`](crate::Normalizer::normalize):
//! these are construction-time errors for hosts that load files.

use thiserror::Error;

/// Errors loading a [`NormalizerConfig`](crate::NormalizerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Errors loading a [`MemoryLexicon`](crate::MemoryLexicon) from JSON.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse lexicon: {0}")]
    Parse(#[from] serde_json::Error),
}
