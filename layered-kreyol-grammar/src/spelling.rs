//! Known misspellings and spelling variants.

use std::collections::HashMap;

use crate::lookup_key;

/// Built-in corrections: (variant, canonical)
const BUILTIN_FIXES: &[(&str, &str)] = &[
    ("vwati", "voiture"),
    ("manger", "manje"),
    ("kounyea", "kounye a"),
    ("kounya", "kounye a"),
];

/// Static variant to canonical spelling table, applied before tagging.
#[derive(Debug, Clone, Default)]
pub struct SpellingTable {
    fixes: HashMap<String, String>,
}

impl SpellingTable {
    /// Both sides are stored as lookup keys, so corrections come out
    /// lowercase with apostrophes folded.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let fixes = pairs
            .into_iter()
            .map(|(variant, canonical)| {
                (lookup_key(variant.as_ref()), lookup_key(canonical.as_ref()))
            })
            .collect();
        Self { fixes }
    }

    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_FIXES.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.fixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixes.is_empty()
    }

    /// The correction for `key`, if it is a known variant.
    ///
    /// `key` must already be a lookup key (lowercase, apostrophes folded).
    pub fn correction(&self, key: &str) -> Option<&str> {
        self.fixes.get(key).map(String::as_str)
    }

    /// The corrected spelling, or `key` itself when no fix applies.
    pub fn apply<'a>(&'a self, key: &'a str) -> &'a str {
        self.correction(key).unwrap_or(key)
    }
}
