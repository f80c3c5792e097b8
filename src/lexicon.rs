//! Lexicon provider capability.
//!
//! Open-class content words (verbs, nouns, ...) are looked up last, after
//! spelling correction and the closed-class taggers. The backing store lives
//! outside this crate; the normalizer only needs [`Lexicon::lookup`].

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use layered_kreyol_grammar::lookup_key;

use crate::LexiconError;

/// One approved lexicon entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// VERB, NOUN, ADJ, ADV, ...
    pub part_of_speech: String,
    pub definition: String,
    /// Short English gloss
    pub english: String,
    pub is_standard: bool,
}

impl LexiconEntry {
    /// A standard entry whose definition is its English gloss.
    pub fn new(part_of_speech: impl Into<String>, english: impl Into<String>) -> Self {
        let english = english.into();
        Self {
            part_of_speech: part_of_speech.into(),
            definition: english.clone(),
            english,
            is_standard: true,
        }
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = definition.into();
        self
    }
}

/// Read-only word lookup.
///
/// The normalizer always passes a lookup key: lowercase, apostrophes folded.
///
/// Implementations may be backed by a database or a network service and
/// must tolerate concurrent calls from independent normalizations.
pub trait Lexicon: Send + Sync {
    fn lookup(&self, word: &str) -> Option<LexiconEntry>;
}

impl<L: Lexicon + ?Sized> Lexicon for Arc<L> {
    fn lookup(&self, word: &str) -> Option<LexiconEntry> {
        (**self).lookup(word)
    }
}

/// A lexicon that knows no words.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyLexicon;

impl Lexicon for EmptyLexicon {
    fn lookup(&self, _word: &str) -> Option<LexiconEntry> {
        None
    }
}

/// An in-memory lexicon. Words are stored and looked up as lookup keys, so
/// `Pa’t` and `pa't` are the same entry.
#[derive(Debug, Clone, Default)]
pub struct MemoryLexicon {
    entries: HashMap<String, LexiconEntry>,
}

/// A row as exported from the lexicon store.
#[derive(Deserialize)]
struct LexiconRecord {
    word: String,
    pos: String,
    #[serde(default)]
    definition: Option<String>,
    english: String,
    #[serde(default = "default_standard")]
    is_standard: bool,
}

fn default_standard() -> bool {
    true
}

impl MemoryLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<W: AsRef<str>>(entries: impl IntoIterator<Item = (W, LexiconEntry)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(word, entry)| (lookup_key(word.as_ref()), entry))
            .collect();
        Self { entries }
    }

    /// Parse a JSON array of `{word, pos, definition?, english, is_standard?}`
    /// records. A missing definition defaults to the English gloss.
    pub fn from_json_str(json: &str) -> Result<Self, LexiconError> {
        let records: Vec<LexiconRecord> = serde_json::from_str(json)?;
        Ok(Self::from_entries(records.into_iter().map(|record| {
            let entry = LexiconEntry {
                part_of_speech: record.pos,
                definition: record.definition.unwrap_or_else(|| record.english.clone()),
                english: record.english,
                is_standard: record.is_standard,
            };
            (record.word, entry)
        })))
    }

    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let content = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, word: &str, entry: LexiconEntry) -> Option<LexiconEntry> {
        self.entries.insert(lookup_key(word), entry)
    }

    pub fn with_entry(mut self, word: &str, entry: LexiconEntry) -> Self {
        self.insert(word, entry);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Lexicon for MemoryLexicon {
    fn lookup(&self, word: &str) -> Option<LexiconEntry> {
        self.entries.get(&lookup_key(word)).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let lexicon = MemoryLexicon::new().with_entry("Manje", LexiconEntry::new("VERB", "eat"));
        let entry = lexicon.lookup("MANJE").unwrap();
        assert_eq!(entry.part_of_speech, "VERB");
        assert_eq!(entry.definition, "eat");
        assert_eq!(lexicon.lookup("dlo"), None);
        assert_eq!(EmptyLexicon.lookup("manje"), None);
    }

    #[test]
    fn test_apostrophe_variants_share_entry() {
        let lexicon = MemoryLexicon::new().with_entry("pa’t", LexiconEntry::new("ADV", "not (past)"));
        assert_eq!(lexicon.lookup("pa't").unwrap().part_of_speech, "ADV");
        assert!(lexicon.lookup("PA‘T").is_some());
    }

    #[test]
    fn test_from_json_records() {
        let lexicon = MemoryLexicon::from_json_str(
            r#"[
                {"word": "dlo", "pos": "NOUN", "definition": "Water", "english": "water"},
                {"word": "lakay", "pos": "NOUN", "english": "home", "is_standard": false}
            ]"#,
        )
        .unwrap();

        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.lookup("dlo").unwrap().definition, "Water");

        let lakay = lexicon.lookup("lakay").unwrap();
        assert_eq!(lakay.definition, "home");
        assert!(!lakay.is_standard);
    }

    #[test]
    fn test_load_errors() {
        assert!(matches!(
            MemoryLexicon::from_json_str("{}"),
            Err(LexiconError::Parse(_))
        ));
        assert!(matches!(
            MemoryLexicon::load(Path::new("/nonexistent/lexicon.json")),
            Err(LexiconError::Io { .. })
        ));
    }

    #[test]
    fn test_shared_lexicon() {
        let shared = Arc::new(MemoryLexicon::new().with_entry("liv", LexiconEntry::new("NOUN", "book")));
        assert_eq!(shared.lookup("liv").unwrap().english, "book");
    }
}
