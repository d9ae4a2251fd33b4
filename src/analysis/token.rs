//! Token types and the working sequence shared by all pipeline stages.
//!
//! Two data structures flow through the analysis pipeline:
//!
//! - [`WorkingSequence`] - the sentence as an ordered list of plain text
//!   fragments while it is being segmented, split and merged
//! - [`Token`] - the classified result handed back to the caller, carrying a
//!   [`TokenKind`] and an optional sequential id
//!
//! # Examples
//!
//! ```
//! use tmesis::analysis::token::{Token, TokenKind};
//!
//! let token = Token::new("Cicero", TokenKind::Word, Some(3));
//! assert_eq!(token.text, "Cicero");
//! assert!(token.is_word());
//! assert_eq!(token.to_string(), "Cicero");
//! ```

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

/// The final classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Ordinary words, including split-off enclitics
    Word,
    /// Punctuation marks and escaped markup entities
    Punctuation,
    /// Abbreviated praenomina and Roman date words carrying their dot
    Filler,
    /// Markup tags passed through untouched
    XmlTag,
}

impl TokenKind {
    /// Short name used in logs and human readable output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Word => "word",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Filler => "filler",
            TokenKind::XmlTag => "xml_tag",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified token.
///
/// Ids are assigned sequentially per tokenization call, starting at 1. Markup
/// tags never receive an id, and no token does when indexing is disabled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The surface text of the token
    pub text: String,

    /// What kind of unit this token is
    pub kind: TokenKind,

    /// Sequential id, if indexing is enabled and the token is not a tag
    pub id: Option<usize>,
}

impl Token {
    /// Create a new token.
    pub fn new<S: Into<String>>(text: S, kind: TokenKind, id: Option<usize>) -> Self {
        Token {
            text: text.into(),
            kind,
            id,
        }
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    pub fn is_punctuation(&self) -> bool {
        self.kind == TokenKind::Punctuation
    }

    pub fn is_filler(&self) -> bool {
        self.kind == TokenKind::Filler
    }

    pub fn is_xml_tag(&self) -> bool {
        self.kind == TokenKind::XmlTag
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A stream of classified tokens, as returned by analyzers.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// The sentence at an intermediate pipeline stage.
///
/// Left-to-right order of the elements always equals surface reading order.
/// Stages that delete while scanning never mutate during the scan: they
/// collect the positions first and hand them to [`WorkingSequence::remove_all`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingSequence {
    elements: Vec<String>,
}

impl WorkingSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        WorkingSequence {
            elements: Vec::new(),
        }
    }

    /// Create a sequence from anything yielding string-like items.
    pub fn from_elements<I, S>(elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WorkingSequence {
            elements: elements.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.elements.get(index).map(String::as_str)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut String> {
        self.elements.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(String::as_str)
    }

    pub fn insert<S: Into<String>>(&mut self, index: usize, element: S) {
        self.elements.insert(index, element.into());
    }

    pub fn remove(&mut self, index: usize) -> String {
        self.elements.remove(index)
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.elements.swap(a, b);
    }

    /// Delete the elements at the given positions.
    ///
    /// `indices` are positions as observed during a single forward scan over
    /// the unmodified sequence and must be ascending. Each deletion shifts
    /// every later element one to the left, so the n-th deletion happens at
    /// `index - n`.
    pub fn remove_all(&mut self, indices: &[usize]) {
        for (deleted, &index) in indices.iter().enumerate() {
            self.elements.remove(index - deleted);
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.elements
    }

    pub fn into_vec(self) -> Vec<String> {
        self.elements
    }
}

impl Index<usize> for WorkingSequence {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.elements[index]
    }
}

impl From<Vec<String>> for WorkingSequence {
    fn from(elements: Vec<String>) -> Self {
        WorkingSequence { elements }
    }
}

impl From<Vec<&str>> for WorkingSequence {
    fn from(elements: Vec<&str>) -> Self {
        WorkingSequence::from_elements(elements)
    }
}

impl IntoIterator for WorkingSequence {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
