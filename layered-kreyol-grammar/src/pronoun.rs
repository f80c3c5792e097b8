//! Pronoun and clitic tagging.
//!
//! Maps every known surface spelling to an abstract [`PronounTag`] and keeps
//! the independent/clitic distinction needed to judge clitic placement.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{lookup_key, CliticViolation, FormType, Number, Person, PronounForm, PronounTag};

/// Built-in pronoun inventory: (surface, person, number, canonical, form type)
///
/// The reduced `m` is written as such in standard orthography (`m ap`), so
/// it is its own canonical form.
const BUILTIN_FORMS: &[(&str, Person, Number, &str, FormType)] = &[
    // First person singular
    ("mwen", Person::First, Number::Singular, "mwen", FormType::Independent),
    ("moin", Person::First, Number::Singular, "mwen", FormType::Independent),
    ("m", Person::First, Number::Singular, "m", FormType::IndependentReduced),
    // Second person singular
    ("ou", Person::Second, Number::Singular, "ou", FormType::Independent),
    ("w", Person::Second, Number::Singular, "ou", FormType::DependentClitic),
    // Third person singular
    ("li", Person::Third, Number::Singular, "li", FormType::Independent),
    ("l", Person::Third, Number::Singular, "li", FormType::DependentClitic),
    // First person plural
    ("nou", Person::First, Number::Plural, "nou", FormType::Independent),
    ("n", Person::First, Number::Plural, "nou", FormType::DependentClitic),
    // Third person plural
    ("yo", Person::Third, Number::Plural, "yo", FormType::Independent),
    ("y", Person::Third, Number::Plural, "yo", FormType::DependentClitic),
];

/// How strictly clitic placement is judged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CliticPolicy {
    /// Only a clitic with no neighbor at all is rejected.
    StandaloneOnly,
    /// Additionally reject a clitic whose preceding host ends in a consonant.
    #[default]
    VowelFinalHost,
}

/// Surface form to pronoun tag lookup.
#[derive(Debug, Clone)]
pub struct PronounTagger {
    forms: HashMap<String, PronounForm>,
}

impl PronounTagger {
    /// Build from explicit forms. Later forms win on duplicate surfaces.
    pub fn from_forms(forms: impl IntoIterator<Item = PronounForm>) -> Self {
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
                .map(|&(surface, person, number, canonical, form_type)| {
                    PronounForm::new(surface, PronounTag::new(person, number, canonical), form_type)
                }),
        )
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Abstract tag for a surface form, case-insensitive.
    pub fn classify(&self, word: &str) -> Option<&PronounTag> {
        self.form_info(word).map(|form| &form.tag)
    }

    /// Complete information about a surface form.
    pub fn form_info(&self, word: &str) -> Option<&PronounForm> {
        self.forms.get(&lookup_key(word))
    }

    pub fn is_clitic(&self, word: &str) -> bool {
        self.form_info(word).map_or(false, PronounForm::is_clitic)
    }

    pub fn can_stand_alone(&self, word: &str) -> bool {
        self.form_info(word).map_or(false, PronounForm::can_stand_alone)
    }

    /// The standard written form of a surface form.
    pub fn canonical_form(&self, word: &str) -> Option<&str> {
        self.classify(word).map(|tag| tag.canonical.as_str())
    }

    /// Every surface form sharing `tag`, sorted.
    ///
    /// Used for lexicon curation, not on the normalization path.
    pub fn forms_for_tag(&self, tag: &PronounTag) -> Vec<&str> {
        let mut surfaces: Vec<&str> = self
            .forms
            .values()
            .filter(|form| &form.tag == tag)
            .map(|form| form.surface.as_str())
            .collect();
        surfaces.sort_unstable();
        surfaces
    }

    /// Check that a clitic appears in a context that licenses it.
    ///
    /// Words that are not dependent clitics are always accepted.
    pub fn validate_clitic_context(
        &self,
        word: &str,
        preceding: Option<&str>,
        following: Option<&str>,
        policy: CliticPolicy,
    ) -> Result<(), CliticViolation> {
        match self.form_info(word) {
            Some(form) if form.is_clitic() => {
                check_clitic_context(word, &form.tag, preceding, following, policy)
            }
            _ => Ok(()),
        }
    }
}

/// Judge the placement of a word already classified as a dependent clitic
/// with tag `tag`.
///
/// `clitic` is only used in the violation message, so it may be the
/// surface spelling the tag was resolved from.
pub fn check_clitic_context(
    clitic: &str,
    tag: &PronounTag,
    preceding: Option<&str>,
    following: Option<&str>,
    policy: CliticPolicy,
) -> Result<(), CliticViolation> {
    if preceding.is_none() && following.is_none() {
        return Err(CliticViolation::Standalone {
            clitic: clitic.to_string(),
        });
    }

    if policy == CliticPolicy::VowelFinalHost {
        if let Some(host) = preceding {
            if ends_in_vowel_sound(host) == Some(false) {
                return Err(CliticViolation::ConsonantFinalHost {
                    clitic: clitic.to_string(),
                    host: host.to_string(),
                    full_form: tag.canonical.clone(),
                });
            }
        }
    }

    Ok(())
}

fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e' | 'i' | 'o' | 'u' | 'à' | 'è' | 'é' | 'ì' | 'ò' | 'ù'
    )
}

/// `None` when the host does not end in a letter.
///
/// A final `n` after a vowel spells a nasal vowel (`pran`, `mwen`).
fn ends_in_vowel_sound(host: &str) -> Option<bool> {
    let lower = host.to_lowercase();
    // Decomposed accents (o + U+0300) leave the base letter last.
    let mut letters = lower
        .chars()
        .rev()
        .skip_while(|c| ('\u{0300}'..='\u{036F}').contains(c));

    let last = letters.next()?;
    if !last.is_alphabetic() {
        return None;
    }
    if is_vowel(last) {
        return Some(true);
    }
    if last == 'n' {
        return Some(letters.next().map_or(false, is_vowel));
    }
    Some(false)
}
