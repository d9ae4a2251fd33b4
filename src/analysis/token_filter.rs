//! Filters that rework a working sequence.
//!
//! Each filter receives the sequence produced by the previous stage and
//! returns a new one. Filters may split, join, insert, delete or reorder
//! elements, but always keep left-to-right order equal to reading order.
//!
//! # Available Filters
//!
//! - [`abbreviation::AbbreviationJoiner`] - rejoins abbreviation dots and apostrophes
//! - [`enclitic::EncliticSplitter`] - splits off and repositions `-que`, `-ne`, `-ve`, `-c`
//! - [`merge::WordMerger`] - fuses fixed idioms such as `quam diu`
//! - [`krasis::KrasisSplitter`] - splits Greek elisions and kraseis
//!
//! # Filter Chaining
//!
//! ```text
//! Segmenter → AbbreviationJoiner → EncliticSplitter → WordMerger → TokenClassifier
//! ```
//!
//! # Examples
//!
//! ```
//! use tmesis::analysis::token::WorkingSequence;
//! use tmesis::analysis::token_filter::Filter;
//! use tmesis::analysis::token_filter::merge::WordMerger;
//!
//! let merger = WordMerger::new();
//! let merged = merger.filter(WorkingSequence::from(vec!["quam", "diu"])).unwrap();
//! assert_eq!(merged.as_slice(), &["quamdiu"]);
//! ```

use crate::analysis::token::WorkingSequence;
use crate::error::Result;

/// Trait for filters that transform a working sequence.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Filter: Send + Sync {
    /// Apply this filter to a sequence.
    fn filter(&self, sequence: WorkingSequence) -> Result<WorkingSequence>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod abbreviation;
pub mod enclitic;
pub mod krasis;
pub mod merge;
