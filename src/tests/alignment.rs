use crate::{LexiconEntry, MemoryLexicon, Normalizer, NullSink, ALIGNMENT_HEADER};

fn normalizer() -> Normalizer {
    let lexicon = MemoryLexicon::new()
        .with_entry("manje", LexiconEntry::new("VERB", "eat"))
        .with_entry("zoranj", LexiconEntry::new("NOUN", "orange"));
    Normalizer::new().with_lexicon(lexicon).with_sink(NullSink)
}

#[test]
fn spans_point_into_original_text() {
    let text = "Moin  t'ap manje zoranj, l’ap dòmi!";
    let result = normalizer().normalize(text);

    assert_eq!(result.original_text(), text);
    for token in result.tokens() {
        let slice = token.source_span.slice(text).unwrap();
        match &token.original_fused_form {
            Some(fused) => assert_eq!(slice, fused.as_str()),
            None => assert_eq!(slice, token.original),
        }
    }
}

#[test]
fn segmented_tokens_share_span() {
    let result = normalizer().normalize("map manje");
    let tokens = result.tokens();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].normalized, "m");
    assert_eq!(tokens[1].normalized, "ap");
    assert_eq!(tokens[0].source_span, tokens[1].source_span);
    assert_eq!(tokens[0].source_span.slice("map manje"), Some("map"));
    assert!(tokens[0].is_segmented && tokens[1].is_segmented);
    assert!(!tokens[2].is_segmented);
    assert_eq!(tokens[2].source_span.range(), 4..9);
}

#[test]
fn spans_are_byte_offsets() {
    let text = "Li wè kreyòl";
    let result = normalizer().normalize(text);
    let last = &result.tokens()[2];

    assert_eq!(last.source_span.range(), 7..14);
    assert_eq!(last.source_span.char_range(text), Some(6..12));
}

#[test]
fn visualization_starts_with_header() {
    let rendered = normalizer().normalize("Bonjou").visualize_alignment();
    assert!(rendered.starts_with(ALIGNMENT_HEADER));
    assert!(rendered.contains("Bonjou"));
}

#[test]
fn visualize_simple_sentence() {
    let result = Normalizer::new()
        .with_sink(NullSink)
        .normalize("Mwen renmen zoranj");

    insta::assert_snapshot!(result.visualize_alignment(), @r###"
    === ALIGNMENT VISUALIZATION ===
    Mwen renmen zoranj
    ╰──╯mwen [0..4] PRON_1SG
         ╰────╯renmen [5..11] UNKNOWN
                ╰────╯zoranj [12..18] UNKNOWN
    "###);
}

#[test]
fn visualize_segmented_form() {
    let result = normalizer().normalize("map manje");

    insta::assert_snapshot!(result.visualize_alignment(), @r###"
    === ALIGNMENT VISUALIZATION ===
    map manje
    ╰─╯m [0..3] PRON_1SG from "map"
    ╰─╯ap [0..3] TAM_PROG from "map"
        ╰───╯manje [4..9] VERB "eat"
    "###);
}

#[test]
fn visualize_multibyte_text() {
    let result = Normalizer::new()
        .with_sink(NullSink)
        .normalize("Li wè kreyòl");

    insta::assert_snapshot!(result.visualize_alignment(), @r###"
    === ALIGNMENT VISUALIZATION ===
    Li wè kreyòl
    ╰╯li [0..2] PRON_3SG
       ╰╯wè [3..6] UNKNOWN
          ╰────╯kreyòl [7..14] UNKNOWN
    "###);
}

#[test]
fn visualize_warnings() {
    let result = Normalizer::new().with_sink(NullSink).normalize("sak w vini");

    insta::assert_snapshot!(result.visualize_alignment(), @r###"
    === ALIGNMENT VISUALIZATION ===
    sak w vini
    ╰─╯sak [0..3] UNKNOWN
        ╰ou [4..5] PRON_2SG
          ╰──╯vini [6..10] UNKNOWN
    warning: clitic 'w' cannot attach to consonant-final 'sak'; write 'ou'
    "###);
}
