//! The normalization pipeline.
//!
//! ```text
//! raw text
//!   -> tokenize                 (surface text + source span)
//!   -> segment fused forms      (one token may become several)
//!   -> per word, first match wins:
//!        spelling fix -> pronoun -> TAM marker -> lexicon -> unknown
//!   -> clitic (and optional TAM sequence) diagnostics over the stream
//! ```
//!
//! Pronouns and TAM markers are small closed classes and are tried before
//! the lexicon so an open-ended word list can never shadow them.

use std::sync::Arc;

use layered_kreyol_grammar::{lookup_key, BuiltinTables, LexicalTables, TableProvider};

use crate::diagnostics::{clitic_warnings, tam_sequence_warnings};
use crate::{
    tokenize, EmptyLexicon, Lexicon, NormalizationResult, NormalizerConfig, SourceSpan, Token,
    TracingSink, UnknownTermSink,
};

/// Haitian Creole text normalizer.
///
/// Holds only read-only state, so one instance can serve concurrent
/// [`normalize`](Self::normalize) calls.
///
/// ```
/// use layered_kreyol::Normalizer;
///
/// let result = Normalizer::new().normalize("Map manje");
/// let forms: Vec<&str> = result.tokens().iter().map(|t| t.normalized.as_str()).collect();
/// assert_eq!(forms, ["m", "ap", "manje"]);
/// ```
#[derive(Clone)]
pub struct Normalizer {
    tables: Arc<LexicalTables>,
    lexicon: Arc<dyn Lexicon>,
    sink: Arc<dyn UnknownTermSink>,
    config: NormalizerConfig,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Normalizer {
    /// Built-in tables, no lexicon, unknown terms logged through `tracing`.
    pub fn new() -> Self {
        Self {
            tables: BuiltinTables.load(),
            lexicon: Arc::new(EmptyLexicon),
            sink: Arc::new(TracingSink),
            config: NormalizerConfig::default(),
        }
    }

    /// Tables selected by `config.tables_dir`, other collaborators default.
    pub fn from_config(config: NormalizerConfig) -> Self {
        let tables = config.table_provider().load();
        Self {
            tables,
            config,
            ..Self::new()
        }
    }

    pub fn with_lexicon(mut self, lexicon: impl Lexicon + 'static) -> Self {
        self.lexicon = Arc::new(lexicon);
        self
    }

    pub fn with_sink(mut self, sink: impl UnknownTermSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    pub fn with_tables(mut self, provider: &dyn TableProvider) -> Self {
        self.tables = provider.load();
        self
    }

    /// Replace the settings. Tables are kept; use [`Self::from_config`] to
    /// load the tables a configuration names.
    pub fn with_config(mut self, config: NormalizerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_segmentation(mut self, enable: bool) -> Self {
        self.config.enable_segmentation = enable;
        self
    }

    pub fn tables(&self) -> &LexicalTables {
        &self.tables
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize `text` into tagged tokens plus advisory warnings.
    ///
    /// Never fails: unknown words, bad clitic placement and empty input all
    /// degrade to data in the result.
    pub fn normalize(&self, text: &str) -> NormalizationResult {
        let mut tokens = Vec::new();

        for raw in tokenize(text) {
            let segmentation = if self.config.enable_segmentation {
                self.tables.segmenter().segment(raw.text)
            } else {
                None
            };

            match segmentation {
                Some(result) => {
                    for (idx, part) in result.segments.iter().enumerate() {
                        let token = self
                            .classify(part, raw.span, text)
                            .segmented_from(raw.text)
                            .starting_sentence(raw.sentence_start && idx == 0);
                        tokens.push(token);
                    }
                }
                None => tokens.push(
                    self.classify(raw.text, raw.span, text)
                        .starting_sentence(raw.sentence_start),
                ),
            }
        }

        let mut warnings = clitic_warnings(self.config.clitic_policy, &tokens);
        if self.config.validate_tam_sequences {
            warnings.extend(tam_sequence_warnings(self.tables.tam(), &tokens));
        }

        tracing::debug!(
            tokens = tokens.len(),
            warnings = warnings.len(),
            "normalized text"
        );

        NormalizationResult::new(text.to_string(), tokens, warnings)
    }

    /// Classify one word. The first table that recognizes it wins.
    fn classify(&self, word: &str, span: SourceSpan, context: &str) -> Token {
        let key = lookup_key(word);
        let word_key = self.tables.spelling().apply(&key);
        let token = Token::new(word, word_key, span);

        if let Some(form) = self.tables.pronouns().form_info(word_key) {
            return token.with_pronoun(form);
        }

        if let Some(form) = self.tables.tam().form_info(word_key) {
            return token.with_tam(form);
        }

        if let Some(entry) = self.lexicon.lookup(word_key) {
            return token.with_lexicon_entry(entry);
        }

        if is_alphabetic(word_key) {
            self.sink.record(word_key, context);
            return Token {
                is_unknown: true,
                ..token
            };
        }

        token
    }
}

/// Non-empty and letters only. Numerals and stray symbols are never unknown.
fn is_alphabetic(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}
