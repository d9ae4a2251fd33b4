//! Text analysis for classical Latin and Greek.
//!
//! This module provides the tokenization pipeline: segmentation, the filters
//! that rejoin abbreviations, split enclitics and merge idioms, the final
//! classifier, and vowel quantity alignment for scanned verse.

pub mod analyzer;
pub mod classifier;
pub mod metrical;
pub mod rules;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
