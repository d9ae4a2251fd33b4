//! Analyzers turning raw text into classified tokens.
//!
//! ```text
//! Raw Text → Analyzer → Token Stream
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//!             ↓
//!         Classifier
//! ```
//!
//! - [`PipelineAnalyzer`](pipeline::PipelineAnalyzer) - a tokenizer, a filter
//!   chain and a classifier
//! - [`ClassicalAnalyzer`](classical::ClassicalAnalyzer) - the Latin/Greek
//!   tokenizer, adding option handling, the Greek pre-pass and vowel quantity
//!   alignment around a pipeline
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use tmesis::analysis::analyzer::Analyzer;
//! use tmesis::analysis::analyzer::classical::ClassicalAnalyzer;
//! use tmesis::lexicon::NoopLookup;
//!
//! let analyzer = ClassicalAnalyzer::new(Arc::new(NoopLookup));
//! let tokens: Vec<_> = analyzer.analyze("Arma virumque cano.").unwrap().collect();
//! assert_eq!(tokens[1].text, "-que");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod classical;
pub mod pipeline;

/// Trait for analyzers that convert text into classified tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Enable downcasting to the concrete analyzer type.
    fn as_any(&self) -> &dyn std::any::Any;
}
