#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Closed-class grammar tables for layered-kreyol.
//!
//! This crate holds the small, high-frequency word classes of Haitian Creole
//! that must never be shadowed by an open-ended lexicon, together with the
//! static tables the normalizer consults before any lexicon lookup.
//!
//! ## Tables
//!
//! - [`PronounTagger`]: surface spelling to [`PronounTag`] (person, number,
//!   canonical form) plus the independent/clitic distinction
//! - [`TamTagger`]: surface spelling to [`TamTag`] plus the grammar of legal
//!   marker sequences
//! - [`SpellingTable`]: known misspellings and variants to their canonical
//!   spelling
//! - [`Segmenter`]: fused surface forms (`map`, `l'ap`) to their parts
//!
//! ## Loading
//!
//! All four tables are bundled in [`LexicalTables`] and produced by a
//! [`TableProvider`]. [`BuiltinTables`] serves the default inventory;
//! [`FileTables`] reads JSON files from a directory and falls back to the
//! built-in inventory table by table.
//!
//! ```
//! use layered_kreyol_grammar::{BuiltinTables, TableProvider};
//!
//! let tables = BuiltinTables.load();
//! let tag = tables.pronouns().classify("moin").unwrap();
//! assert_eq!(tag.to_string(), "PRON_1SG");
//! assert_eq!(tag.canonical, "mwen");
//! ```

mod apostrophe;
mod errors;
mod pronoun;
mod segmenter;
mod spelling;
mod tables;
mod tam;
mod types;

pub use apostrophe::{fold_apostrophes, is_apostrophe, lookup_key, CANONICAL_APOSTROPHE};
pub use errors::{CliticViolation, InvalidCombination, TableError};
pub use pronoun::{check_clitic_context, CliticPolicy, PronounTagger};
pub use segmenter::{SegmentationResult, Segmenter};
pub use spelling::SpellingTable;
pub use tables::{
    BuiltinTables, FileTables, LexicalTables, TableProvider, PRONOUN_FILE, SEGMENTATION_FILE,
    SPELLING_FILE, TAM_FILE,
};
pub use tam::{TamTagger, VALID_COMBINATIONS};
pub use types::{FormType, Number, Person, PronounForm, PronounTag, TamCategory, TamForm, TamTag};
