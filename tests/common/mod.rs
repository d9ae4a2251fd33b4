//! Shared test lexicon.
//!
//! Holds just the stems needed to exercise -ne and -ve disambiguation on the
//! classic examples.

#![allow(dead_code)]

use std::sync::Arc;

use tmesis::prelude::*;
use tmesis::lexicon::{StemKind, WordType};

pub fn lexicon() -> StemDictionary {
    use StemKind::*;
    use WordType::*;

    StemDictionary::from_entries(vec![
        // third declension, ablative in -ne
        StemEntry::new(Noun, Nominative, "ratio", 3),
        StemEntry::new(Noun, Nominative, "iactatio", 3),
        StemEntry::new(Noun, Stem, "ration", 3),
        StemEntry::new(Noun, Stem, "magnitudin", 3),
        StemEntry::new(Noun, Stem, "libidin", 3),
        StemEntry::new(Noun, Stem, "homin", 3),
        StemEntry::new(Noun, Stem, "flumin", 3),
        StemEntry::new(Noun, Stem, "fin", 33),
        StemEntry::new(Persona, Stem, "Platon", 3),
        StemEntry::new(Persona, Stem, "Solon", 3),
        StemEntry::new(Adjective, Stem, "commun", 3),
        // o declension, vocative in -ne
        StemEntry::new(Noun, Stem, "domin", 2).with_nominative("dominus"),
        StemEntry::new(Persona, Stem, "Paulin", 2),
        StemEntry::new(Adjective, Stem, "bon", 1),
        // forms in -ve
        StemEntry::new(Adjective, Stem, "aestiv", 1),
        StemEntry::new(Adjective, Stem, "suav", 3),
        StemEntry::new(Noun, Stem, "serv", 2),
        StemEntry::new(Noun, Stem, "civ", 33),
        StemEntry::new(Verb, Present, "move", 2),
        StemEntry::new(Verb, Present, "viv", 3),
    ])
    .expect("test lexicon is valid")
}

pub fn analyzer() -> ClassicalAnalyzer {
    ClassicalAnalyzer::new(Arc::new(lexicon()))
}

pub fn analyzer_with(options: TokenizerOptions) -> ClassicalAnalyzer {
    ClassicalAnalyzer::with_options(Arc::new(lexicon()), options).expect("options are valid")
}

pub fn texts(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(|token| token.text.clone()).collect()
}

/// Tokenize with default options and return the token texts.
pub fn tokenize(text: &str) -> Vec<String> {
    texts(&analyzer().tokenize(text).expect("tokenization is total"))
}

/// Whitespace-separated expectation, as in `"-que laetus"`.
pub fn words(expected: &str) -> Vec<String> {
    expected.split_whitespace().map(str::to_string).collect()
}
