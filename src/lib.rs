//! # Tmesis
//!
//! A tokenizer for classical Latin and Greek text.
//!
//! ## Features
//!
//! - Punctuation- and markup-aware segmentation
//! - Rejoining of abbreviated praenomina, Roman date words and apostrophe forms
//! - Splitting of the enclitics `-que`, `-ne`, `-ve` and `-c`, repositioned in
//!   front of their host or their prepositional phrase
//! - `-ne`/`-ve` disambiguation through a pluggable stem lookup
//! - Idiom merging (`quam diu` → `quamdiu`)
//! - Vowel quantities (`gaudĭămquĕ`) kept intact through every split and join
//! - Greek elision and krasis splitting
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use tmesis::prelude::*;
//!
//! let analyzer = ClassicalAnalyzer::new(Arc::new(NoopLookup));
//! let tokens = analyzer.tokenize("Arma virumque cano.").unwrap();
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["Arma", "-que", "virum", "cano", "."]);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod lexicon;

pub mod prelude {
    pub use crate::analysis::analyzer::Analyzer;
    pub use crate::analysis::analyzer::classical::ClassicalAnalyzer;
    pub use crate::analysis::token::{Token, TokenKind};
    pub use crate::config::{OptionOverrides, TokenizerOptions};
    pub use crate::error::{Result, TmesisError};
    pub use crate::lexicon::{NoopLookup, StemDictionary, StemEntry, StemLookup};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
