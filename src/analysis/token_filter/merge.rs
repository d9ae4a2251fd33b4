//! Idiom merging.
//!
//! Some fixed expressions are written as two words but analysed as one:
//! `quam diu` → `quamdiu`, `non nullis` → `nonnullis`. The first element is
//! compared case-insensitively so a sentence-initial `Quam diu` merges too.

use log::{debug, trace};

use crate::analysis::rules::is_mergeable_pair;
use crate::analysis::token::WorkingSequence;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Fuses fixed two-word idioms into single elements.
#[derive(Clone, Debug, Default)]
pub struct WordMerger;

impl WordMerger {
    pub fn new() -> Self {
        WordMerger
    }
}

impl Filter for WordMerger {
    fn filter(&self, mut sequence: WorkingSequence) -> Result<WorkingSequence> {
        let mut merged: Vec<usize> = Vec::new();

        for i in 0..sequence.len().saturating_sub(1) {
            // an element already absorbed into its predecessor starts no pair
            if merged.last() == Some(&i) {
                continue;
            }
            if is_mergeable_pair(&sequence[i], &sequence[i + 1]) {
                let second = sequence[i + 1].to_string();
                if let Some(first) = sequence.get_mut(i) {
                    first.push_str(&second);
                    trace!("merged {first}");
                }
                merged.push(i + 1);
            }
        }

        sequence.remove_all(&merged);
        debug!("word merger: {} merges", merged.len());

        Ok(sequence)
    }

    fn name(&self) -> &'static str {
        "merge"
    }
}
