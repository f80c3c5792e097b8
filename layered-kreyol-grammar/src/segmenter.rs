//! Dictionary-based decomposition of fused surface forms.
//!
//! A fused form is a single written token that contracts two grammatical
//! units, e.g. `map` = `m` + `ap`. Segmentation is a static lookup, not a
//! rule engine: anything missing from the dictionary is left whole.

use std::collections::HashMap;

use crate::lookup_key;

/// Built-in pronoun-clitic + progressive fusions.
///
/// Apostrophe variants (`m’ap`, `m‘ap`) reach the `'` entries through
/// apostrophe folding.
const BUILTIN_FUSED_FORMS: &[(&str, &[&str])] = &[
    ("map", &["m", "ap"]),
    ("m'ap", &["m", "ap"]),
    ("nap", &["n", "ap"]),
    ("n'ap", &["n", "ap"]),
    ("wap", &["w", "ap"]),
    ("w'ap", &["w", "ap"]),
    ("lap", &["l", "ap"]),
    ("l'ap", &["l", "ap"]),
];

/// The decomposition of one fused surface form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentationResult<'a> {
    /// Canonical sub-forms, in order
    pub segments: &'a [String],
}

impl<'a> SegmentationResult<'a> {
    /// A decomposition is valid when it yields at least two parts.
    pub fn is_valid(&self) -> bool {
        self.segments.len() >= 2
    }
}

/// Fused surface form dictionary.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    fused: HashMap<String, Vec<String>>,
}

impl Segmenter {
    /// Build from (surface, parts) entries.
    pub fn from_entries<K, P>(entries: impl IntoIterator<Item = (K, Vec<P>)>) -> Self
    where
        K: AsRef<str>,
        P: Into<String>,
    {
        let fused = entries
            .into_iter()
            .map(|(surface, parts)| {
                (
                    lookup_key(surface.as_ref()),
                    parts.into_iter().map(Into::into).collect(),
                )
            })
            .collect();
        Self { fused }
    }

    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN_FUSED_FORMS
                .iter()
                .map(|&(surface, parts)| (surface, parts.to_vec())),
        )
    }

    pub fn len(&self) -> usize {
        self.fused.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fused.is_empty()
    }

    /// Look up a surface token, case- and apostrophe-insensitive.
    ///
    /// `None` means "not a fused form", not a failure.
    pub fn segment(&self, token: &str) -> Option<SegmentationResult<'_>> {
        self.fused
            .get(&lookup_key(token))
            .map(|segments| SegmentationResult { segments })
            .filter(SegmentationResult::is_valid)
    }
}
