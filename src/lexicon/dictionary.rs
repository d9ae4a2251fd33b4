//! In-memory stem dictionary.
//!
//! Entries are indexed by word type, stem kind and stem, so a query is a
//! single hash lookup followed by an inflection class filter.
//!
//! The JSON format is an array of entries:
//!
//! ```json
//! [
//!   { "word_type": "noun", "stem_kind": "stem", "stem": "ration", "inflection_class": 3 },
//!   { "word_type": "noun", "stem_kind": "stem", "stem": "domin", "inflection_class": 2,
//!     "nominative": "dominus" }
//! ]
//! ```

use std::path::Path;
use std::sync::Arc;

use ahash::AHashMap;
use log::debug;

use crate::error::{Result, TmesisError};
use crate::lexicon::{StemEntry, StemKind, StemLookup, StemQuery, WordType};

type StemKey = (WordType, StemKind, String);

/// A stem lookup backed by a hash index over a fixed set of entries.
#[derive(Clone, Debug, Default)]
pub struct StemDictionary {
    index: Arc<AHashMap<StemKey, Vec<StemEntry>>>,
    len: usize,
}

impl StemDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from entries.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = StemEntry>,
    {
        let mut index: AHashMap<StemKey, Vec<StemEntry>> = AHashMap::new();
        let mut len = 0;

        for entry in entries {
            if entry.stem.trim().is_empty() {
                return Err(TmesisError::lexicon(format!(
                    "Entry {:?}/{:?} has an empty stem",
                    entry.word_type, entry.stem_kind
                )));
            }
            index
                .entry((entry.word_type, entry.stem_kind, entry.stem.clone()))
                .or_default()
                .push(entry);
            len += 1;
        }

        Ok(Self {
            index: Arc::new(index),
            len,
        })
    }

    /// Parse a dictionary from a JSON array of entries.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<StemEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Load a dictionary from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TmesisError::lexicon(format!(
                "Failed to read stem dictionary file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let dictionary = Self::from_json_str(&content)?;
        debug!(
            "loaded {} stem entries from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl StemLookup for StemDictionary {
    fn look_up_stem(&self, query: &StemQuery) -> Vec<StemEntry> {
        let key = (query.word_type, query.stem_kind, query.stem.clone());
        self.index
            .get(&key)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|entry| query.inflection_classes.contains(&entry.inflection_class))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}
