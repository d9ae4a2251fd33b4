//! Abbreviation rejoining.
//!
//! The segmenter treats every dot and apostrophe as punctuation. This filter
//! puts back the ones that belong to a word:
//!
//! - abbreviated praenomina and Roman date words: `M .` → `M.`, `Kal .` → `Kal.`
//! - colloquial apostrophe forms: `satin '` → `satin'`
//!
//! # Examples
//!
//! ```
//! use tmesis::analysis::token::WorkingSequence;
//! use tmesis::analysis::token_filter::Filter;
//! use tmesis::analysis::token_filter::abbreviation::AbbreviationJoiner;
//!
//! let joiner = AbbreviationJoiner::new();
//! let sequence = WorkingSequence::from(vec!["Atque", "M", ".", "Cicero", "."]);
//! let joined = joiner.filter(sequence).unwrap();
//! assert_eq!(joined.as_slice(), &["Atque", "M.", "Cicero", "."]);
//! ```

use log::{debug, trace};

use crate::analysis::rules::{is_apostrophe_word, is_dotted_abbreviation};
use crate::analysis::token::WorkingSequence;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Rejoins abbreviation dots and apostrophes split off by the segmenter.
#[derive(Clone, Debug, Default)]
pub struct AbbreviationJoiner;

impl AbbreviationJoiner {
    pub fn new() -> Self {
        AbbreviationJoiner
    }

    fn joins(current: &str, next: &str) -> bool {
        (next == "." && is_dotted_abbreviation(current))
            || (next == "'" && is_apostrophe_word(current))
    }
}

impl Filter for AbbreviationJoiner {
    fn filter(&self, mut sequence: WorkingSequence) -> Result<WorkingSequence> {
        let mut joined = Vec::new();

        for i in 0..sequence.len().saturating_sub(1) {
            if Self::joins(&sequence[i], &sequence[i + 1]) {
                let combined = format!("{}{}", &sequence[i], &sequence[i + 1]);
                trace!("joining abbreviation {combined}");
                if let Some(next) = sequence.get_mut(i + 1) {
                    *next = combined;
                }
                joined.push(i);
            }
        }

        sequence.remove_all(&joined);
        debug!("abbreviation joiner: {} joins", joined.len());

        Ok(sequence)
    }

    fn name(&self) -> &'static str {
        "abbreviation"
    }
}
