//! Pipeline analyzer that combines a tokenizer, filters and a classifier.
//!
//! # Architecture
//!
//! The PipelineAnalyzer applies processing in this order:
//! 1. Tokenizer: splits text into a working sequence
//! 2. Filters: applied sequentially in the order they were added
//! 3. Classifier: assigns kinds and ids
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use tmesis::analysis::analyzer::Analyzer;
//! use tmesis::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use tmesis::analysis::token_filter::abbreviation::AbbreviationJoiner;
//! use tmesis::analysis::token_filter::merge::WordMerger;
//! use tmesis::analysis::tokenizer::segmenter::Segmenter;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(Segmenter::new()))
//!     .add_filter(Arc::new(AbbreviationJoiner::new()))
//!     .add_filter(Arc::new(WordMerger::new()))
//!     .with_name("no_enclitics");
//!
//! let tokens: Vec<_> = analyzer.analyze("M. Cicero quam diu").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "M.");
//! assert_eq!(tokens[2].text, "quamdiu");
//! ```

use std::sync::Arc;

use log::debug;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::classifier::TokenClassifier;
use crate::analysis::token::{Token, TokenStream, WorkingSequence};
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    classifier: TokenClassifier,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
            classifier: TokenClassifier::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Replace the classifier.
    pub fn with_classifier(mut self, classifier: TokenClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    pub fn classifier(&self) -> &TokenClassifier {
        &self.classifier
    }

    /// Apply the filter chain to an already tokenized sequence.
    pub fn run_filters(&self, mut sequence: WorkingSequence) -> Result<WorkingSequence> {
        for filter in &self.filters {
            sequence = filter.filter(sequence)?;
            debug!("{} -> {} elements", filter.name(), sequence.len());
        }
        Ok(sequence)
    }

    /// Tokenize and filter `text` without classifying it.
    pub fn run(&self, text: &str) -> Result<WorkingSequence> {
        let sequence = self.tokenizer.tokenize(text)?;
        self.run_filters(sequence)
    }

    /// Tokenize, filter and classify `text`.
    pub fn tokens(&self, text: &str) -> Result<Vec<Token>> {
        Ok(self.classifier.classify(self.run(text)?))
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(self.tokens(text)?.into_iter()))
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .field("classifier", &self.classifier)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::TokenKind;
    use crate::analysis::token_filter::abbreviation::AbbreviationJoiner;
    use crate::analysis::token_filter::enclitic::EncliticSplitter;
    use crate::analysis::token_filter::merge::WordMerger;
    use crate::analysis::tokenizer::segmenter::Segmenter;
    use crate::lexicon::NoopLookup;

    fn full_pipeline() -> PipelineAnalyzer {
        PipelineAnalyzer::new(Arc::new(Segmenter::new()))
            .add_filter(Arc::new(AbbreviationJoiner::new()))
            .add_filter(Arc::new(EncliticSplitter::new(Arc::new(NoopLookup))))
            .add_filter(Arc::new(WordMerger::new()))
    }

    #[test]
    fn test_pipeline_analyzer() {
        let tokens: Vec<Token> = full_pipeline()
            .analyze("Atque M. Cicero laetusque.")
            .unwrap()
            .collect();

        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Atque", "M.", "Cicero", "-que", "laetus", "."]);
        assert_eq!(tokens[1].kind, TokenKind::Filler);
        assert_eq!(tokens[5].kind, TokenKind::Punctuation);
        assert_eq!(tokens[5].id, Some(6));
    }

    #[test]
    fn test_tokenizer_only() {
        let analyzer = PipelineAnalyzer::new(Arc::new(Segmenter::new()));
        let sequence = analyzer.run("M. Cicero").unwrap();
        assert_eq!(sequence.as_slice(), &["M", ".", "Cicero"]);
    }

    #[test]
    fn test_without_indexing() {
        let analyzer =
            full_pipeline().with_classifier(TokenClassifier::new().with_indexing(false));
        let tokens = analyzer.tokens("arma virumque").unwrap();
        assert!(tokens.iter().all(|t| t.id.is_none()));
    }

    #[test]
    fn test_empty_input() {
        assert!(full_pipeline().tokens("").unwrap().is_empty());
        assert!(full_pipeline().tokens("   ").unwrap().is_empty());
    }

    #[test]
    fn test_debug_lists_filters() {
        let debug = format!("{:?}", full_pipeline().with_name("latin"));
        assert!(debug.contains("latin"));
        assert!(debug.contains("enclitic"));
        assert!(debug.contains("merge"));
    }

    #[test]
    fn test_analyzer_name() {
        assert_eq!(full_pipeline().name(), "pipeline");
    }
}
