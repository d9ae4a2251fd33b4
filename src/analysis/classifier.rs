//! Final classification of the working sequence.
//!
//! Every surviving element is matched against the shapes below, in this
//! order, and the first match decides its kind:
//!
//! 1. markup tag → [`TokenKind::XmlTag`]
//! 2. abbreviated praenomen or Roman date word with its dot → [`TokenKind::Filler`]
//! 3. punctuation run or escaped entity → [`TokenKind::Punctuation`]
//! 4. anything else → [`TokenKind::Word`]
//!
//! Ids count from 1 and skip markup tags, which never receive one.
//!
//! # Examples
//!
//! ```
//! use tmesis::analysis::classifier::TokenClassifier;
//! use tmesis::analysis::token::TokenKind;
//!
//! let tokens = TokenClassifier::new().classify(["<grc>", "Cano", ".", "</grc>"]);
//! let ids: Vec<_> = tokens.iter().map(|t| t.id).collect();
//! assert_eq!(ids, vec![None, Some(1), Some(2), None]);
//! assert_eq!(tokens[2].kind, TokenKind::Punctuation);
//! ```

use log::debug;

use crate::analysis::rules::{XML_TAG, is_abbreviated_name, is_punctuation, is_roman_date_word};
use crate::analysis::token::{Token, TokenKind};

/// Assigns a kind and a sequential id to each element.
#[derive(Clone, Debug)]
pub struct TokenClassifier {
    indexing: bool,
}

impl Default for TokenClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenClassifier {
    /// Create a classifier that assigns ids.
    pub fn new() -> Self {
        TokenClassifier { indexing: true }
    }

    pub fn with_indexing(mut self, indexing: bool) -> Self {
        self.indexing = indexing;
        self
    }

    /// The kind of a single element.
    pub fn kind_of(element: &str) -> TokenKind {
        if XML_TAG.is_match(element) {
            TokenKind::XmlTag
        } else if is_abbreviated_name(element) || is_roman_date_word(element) {
            TokenKind::Filler
        } else if is_punctuation(element) {
            TokenKind::Punctuation
        } else {
            TokenKind::Word
        }
    }

    /// Classify a whole sequence. The id counter restarts on every call.
    pub fn classify<I, S>(&self, elements: I) -> Vec<Token>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next_id = 0;

        let tokens: Vec<Token> = elements
            .into_iter()
            .map(|element| {
                let text = element.into();
                let kind = Self::kind_of(&text);
                let id = if self.indexing && kind != TokenKind::XmlTag {
                    next_id += 1;
                    Some(next_id)
                } else {
                    None
                };
                Token::new(text, kind, id)
            })
            .collect();

        debug!("classified {} tokens", tokens.len());
        tokens
    }
}
