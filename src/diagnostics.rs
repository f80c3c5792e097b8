//! Advisory checks over the final token stream.
//!
//! These never reject input and never touch tokens; they only produce
//! human-readable warnings for the result.

use layered_kreyol_grammar::{check_clitic_context, CliticPolicy, TamTagger};

use crate::Token;

/// Warn about dependent clitics whose neighbors do not license them.
///
/// Clitics are the tokens classified as such, whatever spelling they were
/// resolved from. Neighbors are taken from the post-segmentation stream, so
/// the `w` of a segmented `wap` has `ap` as its following neighbor, and are
/// never looked for across a sentence boundary.
pub fn clitic_warnings(policy: CliticPolicy, tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .enumerate()
        .filter_map(|(idx, token)| {
            let tag = token.pronoun_tag.as_ref().filter(|_| token.is_clitic())?;

            let preceding = if token.sentence_start {
                None
            } else {
                idx.checked_sub(1)
                    .and_then(|prev| tokens.get(prev))
                    .map(|t| t.original.as_str())
            };
            let following = tokens
                .get(idx + 1)
                .filter(|next| !next.sentence_start)
                .map(|t| t.original.as_str());

            check_clitic_context(&token.original, tag, preceding, following, policy)
                .err()
                .map(|violation| violation.to_string())
        })
        .collect()
}

/// Warn about runs of adjacent TAM markers outside the legal combinations.
pub fn tam_sequence_warnings(tam: &TamTagger, tokens: &[Token]) -> Vec<String> {
    tokens
        .split(|token| !token.is_tam_marker())
        .filter(|run| run.len() >= 2)
        .filter_map(|run| {
            let markers: Vec<&str> = run.iter().map(|t| t.original.as_str()).collect();
            tam.validate_combination(markers.as_slice()).err()
        })
        .map(|err| err.to_string())
        .collect()
}
