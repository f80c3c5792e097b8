use std::fs;
use std::sync::Arc;

use crate::{
    BuiltinTables, FileTables, FormType, LexicalTables, LexiconEntry, MemoryLexicon, Normalizer,
    NormalizerConfig, NullSink, Number, Person, PronounForm, PronounTag, PronounTagger,
    ReviewQueueSink, Segmenter, SpellingTable, TableProvider, TamTagger, SEGMENTATION_FILE,
    SPELLING_FILE,
};

/// Builtin inventory plus the northern `mw` spelling.
struct NorthernTables;

impl TableProvider for NorthernTables {
    fn load(&self) -> Arc<LexicalTables> {
        let builtin = BuiltinTables.load();
        let mut forms: Vec<PronounForm> = ["mwen", "moin", "m", "ou", "w", "li", "l"]
            .iter()
            .filter_map(|surface| builtin.pronouns().form_info(surface).cloned())
            .collect();
        forms.push(PronounForm::new(
            "mw",
            PronounTag::new(Person::First, Number::Singular, "mwen"),
            FormType::IndependentReduced,
        ));

        Arc::new(LexicalTables::new(
            PronounTagger::from_forms(forms),
            TamTagger::builtin(),
            SpellingTable::builtin(),
            Segmenter::builtin(),
        ))
    }
}

/// Builtin inventory plus a spelling fix whose correction is a clitic.
struct DoubledClitic;

impl TableProvider for DoubledClitic {
    fn load(&self) -> Arc<LexicalTables> {
        Arc::new(LexicalTables::new(
            PronounTagger::builtin(),
            TamTagger::builtin(),
            SpellingTable::from_pairs(vec![("ww", "w")]),
            Segmenter::builtin(),
        ))
    }
}

#[test]
fn custom_table_provider() {
    let normalizer = Normalizer::new().with_sink(NullSink).with_tables(&NorthernTables);
    let result = normalizer.normalize("Mw ap vini");

    assert_eq!(result.tokens()[0].normalized, "mwen");
    assert_eq!(result.tokens()[0].pronoun_tag.as_ref().unwrap().to_string(), "PRON_1SG");
    assert!(normalizer.tables().pronouns().classify("nou").is_none());
}

#[test]
fn clitics_reached_through_spelling_fixes_are_checked() {
    let normalizer = Normalizer::new().with_sink(NullSink).with_tables(&DoubledClitic);

    let result = normalizer.normalize("ww");
    assert_eq!(result.tokens()[0].normalized, "ou");
    assert!(result.tokens()[0].is_clitic());
    assert_eq!(result.warnings(), vec!["clitic 'ww' cannot stand alone"]);

    let result = normalizer.normalize("sak ww vini");
    assert_eq!(
        result.warnings(),
        vec!["clitic 'ww' cannot attach to consonant-final 'sak'; write 'ou'"]
    );
}

#[test]
fn spelling_file_corrections_are_lowercased() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(SPELLING_FILE),
        r#"{"fixes": {"lekol": "Lekòl", "pat": "Pa’t"}}"#,
    )
    .unwrap();

    let normalizer = Normalizer::new()
        .with_sink(NullSink)
        .with_tables(&FileTables::new(dir.path()));
    let result = normalizer.normalize("Lekol pat");

    assert_eq!(result.tokens()[0].original, "Lekol");
    assert_eq!(result.tokens()[0].normalized, "lekòl");
    assert_eq!(result.tokens()[1].normalized, "pa't");
}

#[test]
fn lexicon_keys_fold_apostrophes() {
    let lexicon = MemoryLexicon::new().with_entry("pa’t", LexiconEntry::new("ADV", "not (past)"));
    let result = Normalizer::new()
        .with_lexicon(lexicon)
        .with_sink(NullSink)
        .normalize("Li pa't vini, li Pa‘t ale");

    assert_eq!(result.tokens()[1].part_of_speech.as_deref(), Some("ADV"));
    assert_eq!(result.tokens()[4].part_of_speech.as_deref(), Some("ADV"));
}

#[test]
fn tables_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let tables_dir = dir.path().join("tables");
    fs::create_dir(&tables_dir).unwrap();
    fs::write(
        tables_dir.join(SEGMENTATION_FILE),
        r#"{"fused_forms": {"yap": ["y", "ap"]}}"#,
    )
    .unwrap();

    let config_path = dir.path().join("kreyol.toml");
    fs::write(
        &config_path,
        format!(
            "validate_tam_sequences = true\ntables_dir = {:?}\n",
            tables_dir.display().to_string()
        ),
    )
    .unwrap();

    let config = NormalizerConfig::load(&config_path).unwrap();
    let normalizer = Normalizer::from_config(config).with_sink(NullSink);
    assert!(normalizer.config().validate_tam_sequences);

    let result = normalizer.normalize("yap manje");
    assert_eq!(result.tokens()[0].normalized, "yo");
    assert_eq!(result.tokens()[0].original_fused_form.as_deref(), Some("yap"));
    assert!(result.tokens()[1].is_tam_marker());

    // the file replaced the builtin fused forms
    let result = normalizer.normalize("map manje");
    assert_eq!(result.tokens().len(), 2);
    assert!(!result.tokens()[0].is_segmented);
}

#[test]
fn lexicon_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexicon.json");
    fs::write(
        &path,
        r#"[
            {"word": "Zoranj", "pos": "NOUN", "english": "orange"},
            {"word": "bwè", "pos": "VERB", "definition": "to drink", "english": "drink", "is_standard": false}
        ]"#,
    )
    .unwrap();

    let lexicon = MemoryLexicon::load(&path).unwrap();
    let result = Normalizer::new()
        .with_lexicon(lexicon)
        .with_sink(NullSink)
        .normalize("li bwè zoranj");

    assert_eq!(result.tokens()[1].english_gloss.as_deref(), Some("drink"));
    assert_eq!(result.tokens()[2].part_of_speech.as_deref(), Some("NOUN"));
    assert_eq!(result.unknown_tokens().count(), 0);
}

#[test]
fn review_queue_collects_unknown_terms() {
    let dir = tempfile::tempdir().unwrap();
    let queue = dir.path().join("review.tsv");

    let normalizer = Normalizer::new().with_sink(ReviewQueueSink::new(&queue));
    normalizer.normalize("Mwen renmen zoranj");
    normalizer.normalize("li bwè");

    let content = fs::read_to_string(&queue).unwrap();
    let terms: Vec<&str> = content
        .lines()
        .map(|line| line.split('\t').nth(1).unwrap())
        .collect();
    assert_eq!(terms, vec!["renmen", "zoranj", "bwè"]);
    assert!(content.lines().all(|line| line.split('\t').count() == 3));
}
