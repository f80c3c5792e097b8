use std::fmt::{self, Write};

use unicode_width::UnicodeWidthChar;

use crate::{NormalizationResult, Token};

pub const ALIGNMENT_HEADER: &str = "=== ALIGNMENT VISUALIZATION ===";

/// Renders a normalization result as the source text with each token
/// underlined beneath the span it came from.
//
// Mwen renmen zoranj
// ╰──╯mwen [0..4] PRON_1SG
//      ╰────╯renmen [5..11] UNKNOWN
//
// Segmented tokens share their fused token's underline:
//
// map manje
// ╰─╯m [0..3] PRON_1SG from "map"
// ╰─╯ap [0..3] TAM_PROG from "map"
pub struct AlignmentDisplay<'a> {
    result: &'a NormalizationResult,
}

impl<'a> AlignmentDisplay<'a> {
    pub fn new(result: &'a NormalizationResult) -> Self {
        AlignmentDisplay { result }
    }
}

/// Terminal columns taken by `text` once whitespace is shown as spaces.
fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

fn char_width(c: char) -> usize {
    if c.is_whitespace() {
        1
    } else {
        UnicodeWidthChar::width(c).unwrap_or(0)
    }
}

fn annotations(token: &Token) -> Vec<String> {
    let mut notes = Vec::new();
    if let Some(tag) = &token.pronoun_tag {
        notes.push(tag.to_string());
    }
    if let Some(tag) = &token.tam_tag {
        notes.push(tag.to_string());
    }
    if let Some(pos) = &token.part_of_speech {
        notes.push(pos.clone());
    }
    if let Some(gloss) = &token.english_gloss {
        notes.push(format!("{:?}", gloss));
    }
    if token.is_unknown {
        notes.push("UNKNOWN".to_string());
    }
    if let Some(fused) = &token.original_fused_form {
        notes.push(format!("from {:?}", fused));
    }
    notes
}

impl<'a> fmt::Display for AlignmentDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.result.original_text();

        f.write_str(ALIGNMENT_HEADER)?;
        f.write_char('\n')?;
        for c in text.chars() {
            f.write_char(if c.is_whitespace() { ' ' } else { c })?;
        }

        for token in self.result.tokens() {
            f.write_char('\n')?;

            let span = token.source_span;
            let start_col = text.get(..span.start).map_or(0, display_width);
            let width = span.slice(text).map_or(0, display_width);

            for _ in 0..start_col {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;
            for _ in 1..width.saturating_sub(1) {
                f.write_char('─')?;
            }
            if width > 1 {
                f.write_char('╯')?;
            }

            write!(f, "{} [{}]", token.normalized, span)?;
            for note in annotations(token) {
                write!(f, " {}", note)?;
            }
        }

        for warning in self.result.warnings() {
            write!(f, "\nwarning: {}", warning)?;
        }

        Ok(())
    }
}
