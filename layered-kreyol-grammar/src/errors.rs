//! Error types for table loading and grammatical validation.

use thiserror::Error;

/// Errors that can occur while loading a lexical table file.
#[derive(Debug, Error)]
pub enum TableError {
    /// The table file could not be read.
    #[error("failed to read table {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The table file is not valid JSON for its schema.
    #[error("failed to parse table {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    /// The table parsed but its content is unusable.
    #[error("invalid table {path}: {message}")]
    Invalid { path: String, message: String },
}

/// A dependent clitic found in a context that does not license it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliticViolation {
    /// The clitic is the whole utterance.
    #[error("clitic '{clitic}' cannot stand alone")]
    Standalone { clitic: String },

    /// The clitic follows a host ending in a consonant.
    #[error("clitic '{clitic}' cannot attach to consonant-final '{host}'; write '{full_form}'")]
    ConsonantFinalHost {
        clitic: String,
        host: String,
        full_form: String,
    },
}

/// An ordered TAM marker sequence outside the grammar of legal combinations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid TAM combination: {}", .markers.join(" + "))]
pub struct InvalidCombination {
    /// The markers as given by the caller
    pub markers: Vec<String>,
    /// The canonical sequence that was checked (unrecognized markers dropped)
    pub canonical: Vec<String>,
}
