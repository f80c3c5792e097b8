//! Normalized tokens and the result of a normalization pass.

use serde::Serialize;

use layered_kreyol_grammar::{FormType, PronounForm, PronounTag, TamForm, TamTag};

use crate::{AlignmentDisplay, LexiconEntry, SourceSpan};

/// The unit of normalizer output.
///
/// At most one of the pronoun, TAM and lexicon annotations is populated:
/// classification stops at the first table that recognizes the word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// Surface text as written. For segmented tokens, the sub-form produced
    /// by the segmentation dictionary; the fused surface is in
    /// `original_fused_form`.
    pub original: String,
    /// Canonical written form after spelling and tag resolution
    pub normalized: String,
    pub source_span: SourceSpan,
    pub pronoun_tag: Option<PronounTag>,
    /// Form type of the matched pronoun spelling, set with `pronoun_tag`
    pub pronoun_form: Option<FormType>,
    pub tam_tag: Option<TamTag>,
    /// Whether the matched TAM spelling may fuse, set with `tam_tag`
    pub tam_fusible: Option<bool>,
    pub part_of_speech: Option<String>,
    pub english_gloss: Option<String>,
    pub is_segmented: bool,
    /// The un-split surface string, for segmented tokens
    pub original_fused_form: Option<String>,
    /// Alphabetic and matched by no table or lexicon
    pub is_unknown: bool,
    /// Opens a sentence; no clitic host is looked for before it
    pub sentence_start: bool,
}

impl Token {
    pub fn new(
        original: impl Into<String>,
        normalized: impl Into<String>,
        source_span: SourceSpan,
    ) -> Self {
        Self {
            original: original.into(),
            normalized: normalized.into(),
            source_span,
            pronoun_tag: None,
            pronoun_form: None,
            tam_tag: None,
            tam_fusible: None,
            part_of_speech: None,
            english_gloss: None,
            is_segmented: false,
            original_fused_form: None,
            is_unknown: false,
            sentence_start: false,
        }
    }

    pub(crate) fn with_pronoun(mut self, form: &PronounForm) -> Self {
        self.normalized = form.tag.canonical.clone();
        self.pronoun_tag = Some(form.tag.clone());
        self.pronoun_form = Some(form.form_type);
        self
    }

    pub(crate) fn with_tam(mut self, form: &TamForm) -> Self {
        self.normalized = form.tag.canonical.clone();
        self.tam_tag = Some(form.tag.clone());
        self.tam_fusible = Some(form.is_fused);
        self
    }

    pub(crate) fn with_lexicon_entry(mut self, entry: LexiconEntry) -> Self {
        self.part_of_speech = Some(entry.part_of_speech);
        self.english_gloss = Some(entry.english);
        self
    }

    pub(crate) fn starting_sentence(mut self, sentence_start: bool) -> Self {
        self.sentence_start = sentence_start;
        self
    }

    pub(crate) fn segmented_from(mut self, fused: &str) -> Self {
        self.is_segmented = true;
        self.original_fused_form = Some(fused.to_string());
        self
    }

    pub fn is_pronoun(&self) -> bool {
        self.pronoun_tag.is_some()
    }

    pub fn is_tam_marker(&self) -> bool {
        self.tam_tag.is_some()
    }

    pub fn is_clitic(&self) -> bool {
        self.pronoun_form == Some(FormType::DependentClitic)
    }

    /// Whether the token matched a table or the lexicon.
    pub fn is_known(&self) -> bool {
        self.is_pronoun() || self.is_tam_marker() || self.part_of_speech.is_some()
    }
}

/// Output of one [`Normalizer::normalize`](crate::Normalizer::normalize) call.
///
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizationResult {
    original_text: String,
    tokens: Vec<Token>,
    warnings: Vec<String>,
}

impl NormalizationResult {
    pub(crate) fn new(original_text: String, tokens: Vec<Token>, warnings: Vec<String>) -> Self {
        Self {
            original_text,
            tokens,
            warnings,
        }
    }

    /// The input text, unmodified. Every token span indexes into it.
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Advisory diagnostics, e.g. unlicensed clitics.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Normalized forms joined by single spaces.
    ///
    /// A display projection: original whitespace and punctuation are lost.
    pub fn normalized_text(&self) -> String {
        self.tokens
            .iter()
            .map(|token| token.normalized.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Tokens flagged unknown, in order.
    pub fn unknown_tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|token| token.is_unknown)
    }

    /// Render each token beneath the source text it came from.
    pub fn visualize_alignment(&self) -> String {
        AlignmentDisplay::new(self).to_string()
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}
