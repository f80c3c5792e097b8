//! Tense-aspect-mood marker tagging.
//!
//! Maps marker spellings to abstract [`TamTag`]s and checks ordered marker
//! sequences against the grammar of legal combinations.

use std::collections::HashMap;

use crate::{lookup_key, InvalidCombination, TamCategory, TamForm, TamTag};

/// Built-in TAM inventory: (surface, category, canonical, fusible)
///
/// `a` is listed under the future reading; it is context-dependent and the
/// future entry is the one kept.
const BUILTIN_FORMS: &[(&str, TamCategory, &str, bool)] = &[
    // Progressive
    ("ap", TamCategory::Progressive, "ap", true),
    // Past
    ("te", TamCategory::Past, "te", true),
    ("t", TamCategory::Past, "te", true),
    // Future
    ("pral", TamCategory::Future, "pral", false),
    ("prale", TamCategory::Future, "pral", false),
    ("ral", TamCategory::Future, "pral", false),
    ("rale", TamCategory::Future, "pral", false),
    ("a", TamCategory::Future, "pral", true),
    // Irrealis
    ("ta", TamCategory::Irrealis, "ta", false),
    // Completive
    ("fin", TamCategory::Completive, "fin", false),
    ("fini", TamCategory::Completive, "fin", false),
    // Ability
    ("kapab", TamCategory::Ability, "kapab", false),
    ("ka", TamCategory::Ability, "kapab", false),
    ("kab", TamCategory::Ability, "kapab", false),
];

/// Ordered canonical marker pairs that may co-occur. Order matters:
/// `te ap` is past progressive, `ap te` is ungrammatical.
pub const VALID_COMBINATIONS: &[(&str, &str)] = &[("te", "ap"), ("te", "pral"), ("ta", "ap")];

/// Surface form to TAM tag lookup.
#[derive(Debug, Clone)]
pub struct TamTagger {
    forms: HashMap<String, TamForm>,
}

impl TamTagger {
    /// Build from explicit forms. Later forms win on duplicate surfaces.
    pub fn from_forms(forms: impl IntoIterator<Item = TamForm>) -> Self {
        let forms = forms
            .into_iter()
            .map(|form| (lookup_key(&form.surface), form))
            .collect();
        Self { forms }
    }

    /// The default closed-class inventory.
    pub fn builtin() -> Self {
        Self::from_forms(
            BUILTIN_FORMS
                .iter()
                .map(|&(surface, category, canonical, is_fused)| {
                    TamForm::new(surface, TamTag::new(category, canonical), is_fused)
                }),
        )
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Abstract tag for a marker spelling, case-insensitive.
    pub fn classify(&self, word: &str) -> Option<&TamTag> {
        self.form_info(word).map(|form| &form.tag)
    }

    pub fn form_info(&self, word: &str) -> Option<&TamForm> {
        self.forms.get(&lookup_key(word))
    }

    pub fn canonical_form(&self, word: &str) -> Option<&str> {
        self.classify(word).map(|tag| tag.canonical.as_str())
    }

    /// Whether the marker may fuse with a preceding pronoun clitic.
    pub fn can_fuse(&self, word: &str) -> bool {
        self.form_info(word).map_or(false, |form| form.is_fused)
    }

    /// Every surface form sharing `tag`, sorted.
    pub fn forms_for_tag(&self, tag: &TamTag) -> Vec<&str> {
        let mut surfaces: Vec<&str> = self
            .forms
            .values()
            .filter(|form| &form.tag == tag)
            .map(|form| form.surface.as_str())
            .collect();
        surfaces.sort_unstable();
        surfaces
    }

    /// Validate an ordered marker sequence.
    ///
    /// Sequences shorter than two are trivially valid. Otherwise each marker
    /// is mapped to its canonical form, unrecognized markers are dropped, and
    /// the remaining sequence must be one of [`VALID_COMBINATIONS`].
    pub fn validate_combination<S: AsRef<str>>(
        &self,
        markers: &[S],
    ) -> Result<(), InvalidCombination> {
        if markers.len() < 2 {
            return Ok(());
        }

        let canonical: Vec<&str> = markers
            .iter()
            .filter_map(|marker| self.canonical_form(marker.as_ref()))
            .collect();

        let is_valid = match canonical.as_slice() {
            [first, second] => VALID_COMBINATIONS
                .iter()
                .any(|&(a, b)| a == *first && b == *second),
            _ => false,
        };

        if is_valid {
            Ok(())
        } else {
            Err(InvalidCombination {
                markers: markers.iter().map(|m| m.as_ref().to_string()).collect(),
                canonical: canonical.into_iter().map(String::from).collect(),
            })
        }
    }
}
