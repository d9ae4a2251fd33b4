//! The Latin and Greek tokenizer.
//!
//! [`ClassicalAnalyzer`] owns a stem lookup and a set of instance default
//! options. Each call runs:
//!
//! 1. segmentation (markup aware when `xml` is set)
//! 2. for Greek text with `splitting` set: elision and krasis splitting
//! 3. when the text carries vowel quantities: projection onto bare letters
//! 4. abbreviation joining, enclitic splitting (`splitting`), idiom merging
//!    (`merging`)
//! 5. when the text carries vowel quantities: alignment of the annotated
//!    elements to the transformed bare sequence
//! 6. classification (ids when `indexing` is set)
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use tmesis::analysis::analyzer::classical::ClassicalAnalyzer;
//! use tmesis::analysis::token::TokenKind;
//! use tmesis::config::OptionOverrides;
//! use tmesis::lexicon::NoopLookup;
//!
//! let analyzer = ClassicalAnalyzer::new(Arc::new(NoopLookup));
//!
//! let tokens = analyzer.tokenize("Atque M. Cicero.").unwrap();
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["Atque", "M.", "Cicero", "."]);
//! assert_eq!(tokens[1].kind, TokenKind::Filler);
//!
//! let overrides = OptionOverrides {
//!     shifting: Some(false),
//!     ..Default::default()
//! };
//! let tokens = analyzer.tokenize_with("in eoque", &overrides).unwrap();
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["in", "eo", "-que"]);
//! ```

use std::fmt;
use std::sync::Arc;

use log::debug;
use serde_json::Value;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::classifier::TokenClassifier;
use crate::analysis::metrical::{MetricalAligner, has_quantities};
use crate::analysis::token::{Token, TokenStream, WorkingSequence};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::abbreviation::AbbreviationJoiner;
use crate::analysis::token_filter::enclitic::EncliticSplitter;
use crate::analysis::token_filter::krasis::{KrasisSplitter, is_greek};
use crate::analysis::token_filter::merge::WordMerger;
use crate::analysis::tokenizer::segmenter::Segmenter;
use crate::config::{OptionOverrides, TokenizerOptions};
use crate::error::{Result, TmesisError};
use crate::lexicon::StemLookup;

/// Tokenizer for classical Latin and Greek text.
///
/// The lookup is reference counted and every call works on its own
/// sequence; one instance can serve many threads.
#[derive(Clone)]
pub struct ClassicalAnalyzer {
    lookup: Arc<dyn StemLookup>,
    options: TokenizerOptions,
    pipeline: PipelineAnalyzer,
}

impl ClassicalAnalyzer {
    /// Create an analyzer with default options.
    pub fn new(lookup: Arc<dyn StemLookup>) -> Self {
        Self::from_valid_options(lookup, TokenizerOptions::default())
    }

    /// Create an analyzer with the given instance defaults.
    ///
    /// Fails with [`TmesisError::Config`] when a marker contains whitespace.
    pub fn with_options(lookup: Arc<dyn StemLookup>, options: TokenizerOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::from_valid_options(lookup, options))
    }

    fn from_valid_options(lookup: Arc<dyn StemLookup>, options: TokenizerOptions) -> Self {
        let pipeline = Self::build_pipeline(&lookup, &options);
        ClassicalAnalyzer {
            lookup,
            options,
            pipeline,
        }
    }

    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    pub fn lookup(&self) -> &Arc<dyn StemLookup> {
        &self.lookup
    }

    fn build_pipeline(lookup: &Arc<dyn StemLookup>, options: &TokenizerOptions) -> PipelineAnalyzer {
        let segmenter = if options.xml {
            Segmenter::with_xml()
        } else {
            Segmenter::new()
        };

        let mut pipeline = PipelineAnalyzer::new(Arc::new(segmenter))
            .add_filter(Arc::new(AbbreviationJoiner::new()))
            .with_classifier(TokenClassifier::new().with_indexing(options.indexing))
            .with_name("classical");

        if options.splitting {
            pipeline = pipeline.add_filter(Arc::new(
                EncliticSplitter::new(Arc::clone(lookup))
                    .with_marker(options.enclitics_marker.clone())
                    .with_shifting(options.shifting),
            ));
        }
        if options.merging {
            pipeline = pipeline.add_filter(Arc::new(WordMerger::new()));
        }

        pipeline
    }

    /// Tokenize `text` with the instance options.
    pub fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        self.run(text, &self.options, &self.pipeline)
    }

    /// Tokenize `text`, replacing instance options by `overrides` for this
    /// call only.
    pub fn tokenize_with(&self, text: &str, overrides: &OptionOverrides) -> Result<Vec<Token>> {
        if overrides.is_empty() {
            return self.tokenize(text);
        }
        let options = self.options.merged_with(overrides);
        options.validate()?;
        let pipeline = Self::build_pipeline(&self.lookup, &options);
        self.run(text, &options, &pipeline)
    }

    /// Tokenize `text` and append the tokens to `sink` as well.
    pub fn tokenize_into<E>(&self, text: &str, sink: &mut E) -> Result<Vec<Token>>
    where
        E: Extend<Token>,
    {
        let tokens = self.tokenize(text)?;
        sink.extend(tokens.iter().cloned());
        Ok(tokens)
    }

    /// Tokenize a dynamically typed value, which must be a string.
    pub fn tokenize_value(&self, value: &Value, overrides: &OptionOverrides) -> Result<Vec<Token>> {
        match value {
            Value::String(text) => self.tokenize_with(text, overrides),
            other => Err(TmesisError::invalid_argument(format!(
                "The argument passed must be a String, got {}",
                json_type_name(other)
            ))),
        }
    }

    fn run(
        &self,
        text: &str,
        options: &TokenizerOptions,
        pipeline: &PipelineAnalyzer,
    ) -> Result<Vec<Token>> {
        let mut sequence = pipeline.tokenizer().tokenize(text)?;

        if options.splitting && is_greek(text) {
            sequence = KrasisSplitter::new()
                .with_marker(options.krasis_marker.clone())
                .filter(sequence)?;
        }

        if !has_quantities(text) {
            let sequence = pipeline.run_filters(sequence)?;
            return Ok(pipeline.classifier().classify(sequence));
        }

        debug!("text carries vowel quantities, aligning");
        let aligner = MetricalAligner::new(sequence, options.enclitics_marker.clone());
        let transformed = pipeline.run_filters(aligner.bare().clone())?;
        let aligned = aligner.align(&transformed);

        Self::classify_aligned(pipeline.classifier(), transformed, aligned)
    }

    /// Classify by the bare form and keep the annotated text.
    fn classify_aligned(
        classifier: &TokenClassifier,
        transformed: WorkingSequence,
        aligned: WorkingSequence,
    ) -> Result<Vec<Token>> {
        if transformed.len() != aligned.len() {
            return Err(TmesisError::analysis(format!(
                "metrical alignment left {} annotated elements for {} bare ones: {:?} / {:?}",
                aligned.len(),
                transformed.len(),
                aligned.as_slice(),
                transformed.as_slice()
            )));
        }

        Ok(classifier
            .classify(transformed)
            .into_iter()
            .zip(aligned)
            .map(|(token, text)| Token { text, ..token })
            .collect())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Analyzer for ClassicalAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(self.tokenize(text)?.into_iter()))
    }

    fn name(&self) -> &'static str {
        "classical"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl fmt::Debug for ClassicalAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassicalAnalyzer")
            .field("options", &self.options)
            .field("pipeline", &self.pipeline)
            .finish()
    }
}
