//! Apostrophe folding.
//!
//! Creole texts write the elided pronoun in `m'ap` with any of several
//! apostrophe characters. Lookup keys fold them all to the ASCII one; the
//! source text itself is never rewritten.

use std::borrow::Cow;

pub const CANONICAL_APOSTROPHE: char = '\'';

/// Right/left single quotation marks, grave accent, modifier letter apostrophe
const APOSTROPHE_VARIANTS: &[char] = &['\u{2019}', '\u{2018}', '`', '\u{02BC}'];

/// Whether `c` is the canonical apostrophe or one of its variants.
pub fn is_apostrophe(c: char) -> bool {
    c == CANONICAL_APOSTROPHE || APOSTROPHE_VARIANTS.contains(&c)
}

/// Replace every apostrophe variant with [`CANONICAL_APOSTROPHE`].
///
/// Borrows the input when it contains no variant.
pub fn fold_apostrophes(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| APOSTROPHE_VARIANTS.contains(&c)) {
        return Cow::Borrowed(text);
    }

    Cow::Owned(
        text.chars()
            .map(|c| {
                if APOSTROPHE_VARIANTS.contains(&c) {
                    CANONICAL_APOSTROPHE
                } else {
                    c
                }
            })
            .collect(),
    )
}

/// The key every table is indexed by: lowercase, apostrophes folded.
pub fn lookup_key(word: &str) -> String {
    fold_apostrophes(word).to_lowercase()
}
