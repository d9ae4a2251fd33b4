//! Stem lookup used to disambiguate enclitic splits.
//!
//! The tokenizer is not a morphological analyzer. When a split is
//! structurally ambiguous (`honestum-ne` versus the ablative `ratione`), it
//! asks a [`StemLookup`] whether a candidate stem exists and what kind of
//! paradigm it belongs to. Any entry that makes the unsplit word a valid
//! form reverses the split.
//!
//! # Implementations
//!
//! - [`dictionary::StemDictionary`] - in-memory entries, optionally loaded from JSON
//! - [`NoopLookup`] - knows no stems, so every split is kept

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod dictionary;

pub use dictionary::StemDictionary;

/// Part of speech of a stem entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordType {
    Noun,
    /// Proper names
    Persona,
    Adjective,
    Verb,
}

/// Which stem column of a paradigm an entry provides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StemKind {
    /// The nominative singular, e.g. `ratio`
    Nominative,
    /// The oblique stem, e.g. `ration`
    Stem,
    /// The present stem of a verb, e.g. `move`
    Present,
}

/// A question put to the stem lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StemQuery {
    pub word_type: WordType,
    pub stem_kind: StemKind,
    pub stem: String,
    /// Only entries of one of these inflection classes qualify
    pub inflection_classes: Vec<u8>,
}

impl StemQuery {
    pub fn new<S: Into<String>>(
        word_type: WordType,
        stem_kind: StemKind,
        stem: S,
        inflection_classes: &[u8],
    ) -> Self {
        StemQuery {
            word_type,
            stem_kind,
            stem: stem.into(),
            inflection_classes: inflection_classes.to_vec(),
        }
    }
}

impl fmt::Display for StemQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}/{:?} {} {:?}",
            self.word_type, self.stem_kind, self.stem, self.inflection_classes
        )
    }
}

/// A stem known to the lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemEntry {
    pub word_type: WordType,
    pub stem_kind: StemKind,
    pub stem: String,
    pub inflection_class: u8,
    /// Nominative singular, when known
    #[serde(default)]
    pub nominative: Option<String>,
}

impl StemEntry {
    pub fn new<S: Into<String>>(
        word_type: WordType,
        stem_kind: StemKind,
        stem: S,
        inflection_class: u8,
    ) -> Self {
        StemEntry {
            word_type,
            stem_kind,
            stem: stem.into(),
            inflection_class,
            nominative: None,
        }
    }

    pub fn with_nominative<S: Into<String>>(mut self, nominative: S) -> Self {
        self.nominative = Some(nominative.into());
        self
    }

    fn is_nominal(&self) -> bool {
        matches!(
            self.word_type,
            WordType::Noun | WordType::Persona | WordType::Adjective
        )
    }

    /// Third declension: stem + `e` is an ablative singular (`ration-e`).
    pub fn third_decl_with_possible_ne_abl(&self) -> bool {
        self.is_nominal() && matches!(self.inflection_class, 3 | 33)
    }

    /// Second declension in `-us`: stem + `e` is a vocative (`domin-e`, `bon-e`).
    pub fn o_decl_with_possible_ne_voc(&self) -> bool {
        match self.word_type {
            WordType::Noun | WordType::Persona => {
                self.inflection_class == 2
                    && self
                        .nominative
                        .as_deref()
                        .is_none_or(|nominative| nominative.ends_with("us"))
            }
            WordType::Adjective => self.inflection_class == 1,
            WordType::Verb => false,
        }
    }
}

/// Read-only stem lookup shared by concurrent tokenization calls.
pub trait StemLookup: Send + Sync {
    /// All entries answering the query. No entries is a normal answer.
    fn look_up_stem(&self, query: &StemQuery) -> Vec<StemEntry>;
}

/// A lookup that knows no stems.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopLookup;

impl StemLookup for NoopLookup {
    fn look_up_stem(&self, _query: &StemQuery) -> Vec<StemEntry> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_third_declension_ablative() {
        let ratio = StemEntry::new(WordType::Noun, StemKind::Stem, "ration", 3);
        assert!(ratio.third_decl_with_possible_ne_abl());
        assert!(!ratio.o_decl_with_possible_ne_voc());

        let finis = StemEntry::new(WordType::Noun, StemKind::Stem, "fin", 33);
        assert!(finis.third_decl_with_possible_ne_abl());
    }

    #[test]
    fn test_o_declension_vocative() {
        let dominus = StemEntry::new(WordType::Noun, StemKind::Stem, "domin", 2)
            .with_nominative("dominus");
        assert!(dominus.o_decl_with_possible_ne_voc());

        let puer = StemEntry::new(WordType::Noun, StemKind::Stem, "puer", 2)
            .with_nominative("puer");
        assert!(!puer.o_decl_with_possible_ne_voc());

        let bonus = StemEntry::new(WordType::Adjective, StemKind::Stem, "bon", 1);
        assert!(bonus.o_decl_with_possible_ne_voc());
    }

    #[test]
    fn test_verbs_are_neither() {
        let moveo = StemEntry::new(WordType::Verb, StemKind::Present, "move", 2);
        assert!(!moveo.third_decl_with_possible_ne_abl());
        assert!(!moveo.o_decl_with_possible_ne_voc());
    }

    #[test]
    fn test_noop_lookup() {
        let query = StemQuery::new(WordType::Noun, StemKind::Stem, "ration", &[3]);
        assert!(NoopLookup.look_up_stem(&query).is_empty());
    }
}
