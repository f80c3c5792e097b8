//! Lexical table providers.
//!
//! The normalizer never cares where its tables came from. A
//! [`TableProvider`] hands it a shared, read-only [`LexicalTables`] bundle,
//! either the built-in inventory or one read from JSON files on disk.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{
    FormType, Number, Person, PronounForm, PronounTag, PronounTagger, Segmenter, SpellingTable,
    TableError, TamCategory, TamForm, TamTag, TamTagger,
};

pub const PRONOUN_FILE: &str = "pronouns.json";
pub const TAM_FILE: &str = "tense_aspect.json";
pub const SPELLING_FILE: &str = "spelling.json";
pub const SEGMENTATION_FILE: &str = "segmentation.json";

static BUILTIN: Lazy<Arc<LexicalTables>> = Lazy::new(|| {
    Arc::new(LexicalTables {
        pronouns: PronounTagger::builtin(),
        tam: TamTagger::builtin(),
        spelling: SpellingTable::builtin(),
        segmenter: Segmenter::builtin(),
    })
});

/// Every static table the normalizer consults. Immutable once built.
#[derive(Debug, Clone)]
pub struct LexicalTables {
    pronouns: PronounTagger,
    tam: TamTagger,
    spelling: SpellingTable,
    segmenter: Segmenter,
}

impl LexicalTables {
    pub fn new(
        pronouns: PronounTagger,
        tam: TamTagger,
        spelling: SpellingTable,
        segmenter: Segmenter,
    ) -> Self {
        Self {
            pronouns,
            tam,
            spelling,
            segmenter,
        }
    }

    pub fn pronouns(&self) -> &PronounTagger {
        &self.pronouns
    }

    pub fn tam(&self) -> &TamTagger {
        &self.tam
    }

    pub fn spelling(&self) -> &SpellingTable {
        &self.spelling
    }

    pub fn segmenter(&self) -> &Segmenter {
        &self.segmenter
    }
}

/// Source of the lexical tables, selected when a normalizer is built.
pub trait TableProvider {
    /// Produce the tables. Must not fail: unusable sources degrade to the
    /// built-in inventory.
    fn load(&self) -> Arc<LexicalTables>;
}

/// The built-in closed-class inventory, built once per process.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTables;

impl TableProvider for BuiltinTables {
    fn load(&self) -> Arc<LexicalTables> {
        let shared: &Arc<LexicalTables> = &BUILTIN;
        Arc::clone(shared)
    }
}

/// Tables read from JSON files in a directory.
///
/// Each of `pronouns.json`, `tense_aspect.json`, `spelling.json` and
/// `segmentation.json` is optional; a missing or malformed file is replaced
/// by the built-in table for that inventory.
#[derive(Debug, Clone)]
pub struct FileTables {
    dir: PathBuf,
}

impl FileTables {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Strict variant of [`TableProvider::load`]: any unreadable table is an
    /// error. Meant for validating curated files.
    pub fn try_load(&self) -> Result<LexicalTables, TableError> {
        Ok(LexicalTables {
            pronouns: load_pronouns(&self.dir.join(PRONOUN_FILE))?,
            tam: load_tam(&self.dir.join(TAM_FILE))?,
            spelling: load_spelling(&self.dir.join(SPELLING_FILE))?,
            segmenter: load_segmentation(&self.dir.join(SEGMENTATION_FILE))?,
        })
    }

    fn load_or_builtin<T>(
        &self,
        file: &str,
        parse: fn(&Path) -> Result<T, TableError>,
        builtin: impl FnOnce(&LexicalTables) -> T,
    ) -> T {
        let path = self.dir.join(file);
        match parse(&path) {
            Ok(table) => table,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "falling back to built-in table");
                let fallback: &LexicalTables = &BUILTIN;
                builtin(fallback)
            }
        }
    }
}

impl TableProvider for FileTables {
    fn load(&self) -> Arc<LexicalTables> {
        let tables = LexicalTables {
            pronouns: self.load_or_builtin(PRONOUN_FILE, load_pronouns, |t| t.pronouns.clone()),
            tam: self.load_or_builtin(TAM_FILE, load_tam, |t| t.tam.clone()),
            spelling: self.load_or_builtin(SPELLING_FILE, load_spelling, |t| t.spelling.clone()),
            segmenter: self.load_or_builtin(SEGMENTATION_FILE, load_segmentation, |t| {
                t.segmenter.clone()
            }),
        };
        tracing::debug!(
            dir = %self.dir.display(),
            pronouns = tables.pronouns.len(),
            tam = tables.tam.len(),
            spelling = tables.spelling.len(),
            fused = tables.segmenter.len(),
            "loaded lexical tables"
        );
        Arc::new(tables)
    }
}

#[derive(Deserialize)]
struct PronounFile {
    #[serde(default)]
    surface_forms: BTreeMap<String, PronounRecord>,
}

#[derive(Deserialize)]
struct PronounRecord {
    person: Person,
    number: Number,
    canonical: String,
    #[serde(rename = "type")]
    form_type: FormType,
    #[serde(default)]
    note: Option<String>,
}

#[derive(Deserialize)]
struct TamFile {
    #[serde(default)]
    surface_forms: BTreeMap<String, TamRecord>,
}

#[derive(Deserialize)]
struct TamRecord {
    category: TamCategory,
    canonical: String,
    #[serde(default)]
    is_fused: bool,
    #[serde(default)]
    note: Option<String>,
}

#[derive(Deserialize)]
struct SpellingFile {
    #[serde(default)]
    fixes: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct SegmentationFile {
    #[serde(default)]
    fused_forms: BTreeMap<String, Vec<String>>,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, TableError> {
    let content = fs::read_to_string(path).map_err(|source| TableError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| TableError::Parse {
        path: path.display().to_string(),
        source,
    })
}

fn invalid(path: &Path, message: impl Into<String>) -> TableError {
    TableError::Invalid {
        path: path.display().to_string(),
        message: message.into(),
    }
}

fn load_pronouns(path: &Path) -> Result<PronounTagger, TableError> {
    let file: PronounFile = read_json(path)?;
    if file.surface_forms.is_empty() {
        return Err(invalid(path, "no surface_forms"));
    }

    Ok(PronounTagger::from_forms(file.surface_forms.into_iter().map(
        |(surface, record)| PronounForm {
            surface,
            tag: PronounTag::new(record.person, record.number, record.canonical),
            form_type: record.form_type,
            note: record.note,
        },
    )))
}

fn load_tam(path: &Path) -> Result<TamTagger, TableError> {
    let file: TamFile = read_json(path)?;
    if file.surface_forms.is_empty() {
        return Err(invalid(path, "no surface_forms"));
    }

    Ok(TamTagger::from_forms(file.surface_forms.into_iter().map(
        |(surface, record)| TamForm {
            surface,
            tag: TamTag::new(record.category, record.canonical),
            is_fused: record.is_fused,
            note: record.note,
        },
    )))
}

fn load_spelling(path: &Path) -> Result<SpellingTable, TableError> {
    let file: SpellingFile = read_json(path)?;
    Ok(SpellingTable::from_pairs(file.fixes))
}

fn load_segmentation(path: &Path) -> Result<Segmenter, TableError> {
    let file: SegmentationFile = read_json(path)?;
    if let Some((surface, _)) = file.fused_forms.iter().find(|(_, parts)| parts.len() < 2) {
        return Err(invalid(
            path,
            format!("fused form '{}' needs at least two parts", surface),
        ));
    }
    Ok(Segmenter::from_entries(file.fused_forms))
}
