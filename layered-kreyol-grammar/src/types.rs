//! Core types for closed-class grammatical tags.
//!
//! Every surface spelling of a pronoun or tense-aspect-mood marker maps to an
//! abstract tag. Tags are plain values: two tags with equal fields are the
//! same tag, whichever surface form produced them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grammatical person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Person {
    /// mwen, nou
    First,
    /// ou
    Second,
    /// li, yo
    Third,
}

impl Person {
    /// The person as written in abstract tags (1, 2 or 3).
    pub fn as_u8(self) -> u8 {
        match self {
            Person::First => 1,
            Person::Second => 2,
            Person::Third => 3,
        }
    }
}

impl TryFrom<u8> for Person {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Person::First),
            2 => Ok(Person::Second),
            3 => Ok(Person::Third),
            other => Err(format!("person must be 1, 2 or 3, got {}", other)),
        }
    }
}

impl From<Person> for u8 {
    fn from(person: Person) -> u8 {
        person.as_u8()
    }
}

/// Grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Number {
    #[serde(rename = "SG")]
    Singular,
    #[serde(rename = "PL")]
    Plural,
}

impl Number {
    pub fn label(self) -> &'static str {
        match self {
            Number::Singular => "SG",
            Number::Plural => "PL",
        }
    }
}

/// Abstract representation of a pronoun.
///
/// All surface forms (`mwen`, `moin`) map to one tag whose
/// `canonical` field is the standard written form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PronounTag {
    pub person: Person,
    pub number: Number,
    /// The standard written form
    pub canonical: String,
}

impl PronounTag {
    pub fn new(person: Person, number: Number, canonical: impl Into<String>) -> Self {
        Self {
            person,
            number,
            canonical: canonical.into(),
        }
    }
}

/// Renders the abstract tag: `PRON_1SG`, `PRON_3PL`, ...
impl fmt::Display for PronounTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PRON_{}{}", self.person.as_u8(), self.number.label())
    }
}

/// How a pronoun surface form may be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormType {
    /// Full forms: mwen, ou, li, nou, yo
    Independent,
    /// Reduced but valid standalone: m
    IndependentReduced,
    /// Must attach to a neighboring host: w, l, n, y
    DependentClitic,
}

/// A surface spelling bound to its pronoun tag.
#[derive(Debug, Clone, PartialEq)]
pub struct PronounForm {
    pub surface: String,
    pub tag: PronounTag,
    pub form_type: FormType,
    pub note: Option<String>,
}

impl PronounForm {
    pub fn new(surface: impl Into<String>, tag: PronounTag, form_type: FormType) -> Self {
        Self {
            surface: surface.into(),
            tag,
            form_type,
            note: None,
        }
    }

    /// Set the curator note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Whether this is a dependent clitic.
    pub fn is_clitic(&self) -> bool {
        self.form_type == FormType::DependentClitic
    }

    /// Whether this form can appear without a host.
    pub fn can_stand_alone(&self) -> bool {
        matches!(
            self.form_type,
            FormType::Independent | FormType::IndependentReduced
        )
    }
}

/// Categories of tense-aspect-mood markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TamCategory {
    /// ap
    Progressive,
    /// te, t
    Past,
    /// pral, prale, ral, rale, a
    Future,
    /// ta
    Irrealis,
    /// fin, fini
    Completive,
    /// kapab, ka, kab
    Ability,
}

impl TamCategory {
    /// Abstract tag label, e.g. `TAM_PROG`.
    pub fn label(self) -> &'static str {
        match self {
            TamCategory::Progressive => "TAM_PROG",
            TamCategory::Past => "TAM_PAST",
            TamCategory::Future => "TAM_FUT",
            TamCategory::Irrealis => "TAM_IRR",
            TamCategory::Completive => "TAM_COMPL",
            TamCategory::Ability => "TAM_ABIL",
        }
    }
}

/// Abstract representation of a TAM marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TamTag {
    pub category: TamCategory,
    /// The standard written form
    pub canonical: String,
}

impl TamTag {
    pub fn new(category: TamCategory, canonical: impl Into<String>) -> Self {
        Self {
            category,
            canonical: canonical.into(),
        }
    }
}

impl fmt::Display for TamTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category.label())
    }
}

/// A surface spelling bound to its TAM tag.
#[derive(Debug, Clone, PartialEq)]
pub struct TamForm {
    pub surface: String,
    pub tag: TamTag,
    /// Whether the marker may fuse with a preceding clitic (`m` + `ap`)
    pub is_fused: bool,
    pub note: Option<String>,
}

impl TamForm {
    pub fn new(surface: impl Into<String>, tag: TamTag, is_fused: bool) -> Self {
        Self {
            surface: surface.into(),
            tag,
            is_fused,
            note: None,
        }
    }

    /// Set the curator note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}
