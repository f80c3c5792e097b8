//! Tokenization for Haitian Creole.
//!
//! Splits raw text on whitespace and a fixed punctuation set while keeping
//! word-internal apostrophes (`m'ap`, `l’ap`) inside the token, so the
//! segmenter can see fused forms whole.
//!
//! The text is walked by extended grapheme cluster, so a letter written with
//! a combining accent (`o` + U+0300) is never split from its accent.
//! Spans always point into the text exactly as given; apostrophe variants
//! are folded only in lookup keys, never in the source.

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;

use crate::SourceSpan;

/// Characters that end a token, besides whitespace.
pub const BOUNDARY_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', // sentence punctuation
    '"', '(', ')', '[', ']', '{', '}', // ASCII quotes and brackets
    '«', '»', '‹', '›', '“', '”', '„', // guillemets and curly double quotes
];

/// Punctuation that closes a sentence. Clitic hosts are never looked for
/// across it.
pub const SENTENCE_FINAL: &[char] = &['.', '!', '?'];

/// A token as it appears in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken<'a> {
    pub text: &'a str,
    pub span: SourceSpan,
    /// First token of the text or of a sentence after `.`, `!` or `?`
    pub sentence_start: bool,
}

fn is_boundary(grapheme: &str) -> bool {
    grapheme
        .chars()
        .next()
        .map_or(true, |c| c.is_whitespace() || BOUNDARY_PUNCTUATION.contains(&c))
}

/// Split `text` into raw tokens with their source spans.
///
/// Casing and apostrophes are preserved. Empty or whitespace-only input
/// yields no tokens.
pub fn tokenize(text: &str) -> Vec<RawToken<'_>> {
    let mut tokens = Vec::new();
    // (byte offset, starts a sentence)
    let mut start: Option<(usize, bool)> = None;
    let mut after_break = true;

    for (idx, grapheme) in text.grapheme_indices(true) {
        if is_boundary(grapheme) {
            if let Some((token_start, sentence_start)) = start.take() {
                push_token(text, token_start, idx, sentence_start, &mut tokens);
            }
            if grapheme.starts_with(SENTENCE_FINAL) {
                after_break = true;
            }
        } else if start.is_none() {
            start = Some((idx, after_break));
            after_break = false;
        }
    }

    if let Some((token_start, sentence_start)) = start {
        push_token(text, token_start, text.len(), sentence_start, &mut tokens);
    }

    tokens
}

fn push_token<'a>(
    text: &'a str,
    start: usize,
    end: usize,
    sentence_start: bool,
    tokens: &mut Vec<RawToken<'a>>,
) {
    tokens.push(RawToken {
        text: &text[start..end],
        span: SourceSpan::new(start, end),
        sentence_start,
    });
}

/// Reusable tokenizer for callers that only need token texts.
///
/// With apostrophe folding on (the default) every returned token uses the
/// canonical `'`. Boundaries are the same as [`tokenize`], which should be
/// used instead when spans are needed.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    fold_apostrophes: bool,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Tokenizer {
    pub fn new(fold_apostrophes: bool) -> Self {
        Self { fold_apostrophes }
    }

    pub fn folds_apostrophes(&self) -> bool {
        self.fold_apostrophes
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        tokenize(text)
            .into_iter()
            .map(|token| {
                if self.fold_apostrophes {
                    normalize_apostrophes(token.text).into_owned()
                } else {
                    token.text.to_string()
                }
            })
            .collect()
    }

    pub fn batch_tokenize<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Vec<String>> {
        texts.iter().map(|text| self.tokenize(text.as_ref())).collect()
    }
}

/// Replace every apostrophe variant (`’ ‘ ` ʼ`) with `'`.
///
/// Spans computed on the returned text are only valid for the returned
/// text; the normalizer therefore tokenizes the original and folds
/// apostrophes per lookup key instead.
pub fn normalize_apostrophes(text: &str) -> Cow<'_, str> {
    layered_kreyol_grammar::fold_apostrophes(text)
}

/// Join tokens with single spaces.
pub fn detokenize<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<&str> {
        tokenize(input).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_splits_on_whitespace_and_punctuation() {
        assert_eq!(texts("Mwen ap pale kreyòl."), vec!["Mwen", "ap", "pale", "kreyòl"]);
        assert_eq!(texts("Ou te wè li?"), vec!["Ou", "te", "wè", "li"]);
        assert_eq!(
            texts("«Bonjou», li di: (mèsi)!"),
            vec!["Bonjou", "li", "di", "mèsi"]
        );
        assert_eq!(texts("“Wi”\t\n„non”"), vec!["Wi", "non"]);
    }

    #[test]
    fn test_keeps_apostrophes_inside_tokens() {
        assert_eq!(texts("M'ap travay jodi a."), vec!["M'ap", "travay", "jodi", "a"]);
        assert_eq!(texts("L’ap vini, n‘ap ale"), vec!["L’ap", "vini", "n‘ap", "ale"]);
        assert_eq!(texts("wʼap w`ap"), vec!["wʼap", "w`ap"]);
    }

    #[test]
    fn test_spans_recover_token_text() {
        let input = "  Li pral manje  demen… kreyòl ";
        for token in tokenize(input) {
            assert_eq!(token.span.slice(input), Some(token.text));
            assert!(!token.text.trim().is_empty());
        }
    }

    #[test]
    fn test_combining_accents_stay_attached() {
        let input = "kreyo\u{0300}l.";
        let tokens = tokenize(input);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "kreyo\u{0300}l");
        assert_eq!(tokens[0].span, SourceSpan::new(0, 8));
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t").is_empty());
        assert!(tokenize("?!...").is_empty());
    }

    #[test]
    fn test_sentence_starts() {
        let starts: Vec<(&str, bool)> = tokenize("Mwen rete lakay. L ale! «Wi», li di")
            .into_iter()
            .map(|t| (t.text, t.sentence_start))
            .collect();
        assert_eq!(
            starts,
            vec![
                ("Mwen", true),
                ("rete", false),
                ("lakay", false),
                ("L", true),
                ("ale", false),
                ("Wi", true),
                ("li", false),
                ("di", false),
            ]
        );
    }

    #[test]
    fn test_stateful_tokenizer() {
        let folding = Tokenizer::default();
        assert!(folding.folds_apostrophes());
        assert_eq!(folding.tokenize("M’ap ale."), vec!["M'ap", "ale"]);

        let verbatim = Tokenizer::new(false);
        assert_eq!(verbatim.tokenize("M’ap ale."), vec!["M’ap", "ale"]);

        assert_eq!(
            folding.batch_tokenize(&["l‘ap vini", "", "Ou te wè li?"]),
            vec![vec!["l'ap", "vini"], vec![], vec!["Ou", "te", "wè", "li"]]
        );
    }

    #[test]
    fn test_apostrophe_helpers() {
        assert_eq!(normalize_apostrophes("M’ap ale"), "M'ap ale");
        assert_eq!(detokenize(&["m", "ap", "manje"]), "m ap manje");
        assert_eq!(detokenize::<&str>(&[]), "");
    }
}
