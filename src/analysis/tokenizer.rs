//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of the pipeline: they break raw text into a
//! [`WorkingSequence`] of plain fragments that the filters then rework.
//!
//! # Available Tokenizers
//!
//! - [`segmenter::Segmenter`] - punctuation- and (optionally) markup-aware segmentation
//!
//! # Examples
//!
//! ```
//! use tmesis::analysis::tokenizer::Tokenizer;
//! use tmesis::analysis::tokenizer::segmenter::Segmenter;
//!
//! let tokenizer = Segmenter::new();
//! let sequence = tokenizer.tokenize("Arma cano!?").unwrap();
//! assert_eq!(sequence.as_slice(), &["Arma", "cano", "!", "?"]);
//! ```

use crate::analysis::token::WorkingSequence;
use crate::error::Result;

/// Trait for tokenizers that convert text into a working sequence.
///
/// The trait requires `Send + Sync` so one tokenizer can serve concurrent
/// tokenization calls.
pub trait Tokenizer: Send + Sync {
    /// Split the given text into fragments. Empty text yields an empty sequence.
    fn tokenize(&self, text: &str) -> Result<WorkingSequence>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod segmenter;
