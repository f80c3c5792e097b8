#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Haitian Creole text normalization.
//!
//! Turns raw, inconsistently written Kreyòl into a stream of tokens that
//! each carry a canonical spelling, an optional grammatical tag and the
//! exact byte span of the source text they came from.
//!
//! ## Pipeline
//!
//! - [`tokenize`]: grapheme-aware split on whitespace and boundary
//!   punctuation; apostrophes stay inside words (`m'ap`, `l’ap`)
//! - segmentation: fused forms such as `map` or `n'ap` become several
//!   tokens that share the span of the fused word
//! - classification: spelling fix, then pronoun, then TAM marker, then the
//!   [`Lexicon`]; alphabetic words nothing recognizes are reported to an
//!   [`UnknownTermSink`]
//! - diagnostics: clitic placement (and optionally TAM marker order) as
//!   advisory warnings on the [`NormalizationResult`]
//!
//! The closed-class tables live in [`layered_kreyol_grammar`] and are
//! re-exported here.
//!
//! ## Usage
//!
//! ```
//! use layered_kreyol::{Normalizer, MemoryLexicon, LexiconEntry};
//!
//! let lexicon = MemoryLexicon::new().with_entry("zoranj", LexiconEntry::new("NOUN", "orange"));
//! let normalizer = Normalizer::new().with_lexicon(lexicon);
//!
//! let result = normalizer.normalize("Moin renmen zoranj");
//! assert_eq!(result.tokens()[0].normalized, "mwen");
//! assert_eq!(result.tokens()[2].english_gloss.as_deref(), Some("orange"));
//! assert!(result.tokens()[1].is_unknown);
//! ```

mod config;
mod diagnostics;
mod display;
mod errors;
mod lexicon;
mod normalizer;
mod sink;
mod span;
mod token;
mod tokenizer;

pub use config::NormalizerConfig;
pub use diagnostics::{clitic_warnings, tam_sequence_warnings};
pub use display::{AlignmentDisplay, ALIGNMENT_HEADER};
pub use errors::{ConfigError, LexiconError};
pub use lexicon::{EmptyLexicon, Lexicon, LexiconEntry, MemoryLexicon};
pub use normalizer::Normalizer;
pub use sink::{CollectingSink, NullSink, ReviewQueueSink, TracingSink, UnknownTerm, UnknownTermSink};
pub use span::SourceSpan;
pub use token::{NormalizationResult, Token};
pub use tokenizer::{
    detokenize, normalize_apostrophes, tokenize, RawToken, Tokenizer, BOUNDARY_PUNCTUATION,
    SENTENCE_FINAL,
};

pub use layered_kreyol_grammar::{
    check_clitic_context, fold_apostrophes, lookup_key, BuiltinTables, CliticPolicy,
    CliticViolation, FileTables, FormType, InvalidCombination, LexicalTables, Number, Person,
    PronounForm, PronounTag, PronounTagger, SegmentationResult, Segmenter, SpellingTable,
    TableError, TableProvider, TamCategory, TamForm, TamTag, TamTagger, PRONOUN_FILE,
    SEGMENTATION_FILE, SPELLING_FILE, TAM_FILE, VALID_COMBINATIONS,
};
