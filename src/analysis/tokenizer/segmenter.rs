//! Punctuation- and markup-aware segmentation.
//!
//! The segmenter separates punctuation from words and splits on whitespace.
//! Runs of one repeated punctuation character stay together (`--`, `...`),
//! runs of different characters do not (`?!` becomes `?` and `!`). Escaped
//! entities such as `&quot;` are atomic.
//!
//! With markup handling enabled, `<...>` spans are atomic as well. A tag whose
//! attribute values contain spaces is torn apart by the whitespace split and
//! is put back together in a post-pass.

use log::trace;

use super::Tokenizer;
use crate::analysis::rules::{ESCAPED_ENTITY_PREFIX, XML_TAG_PREFIX, is_punctuation_char};
use crate::analysis::token::WorkingSequence;
use crate::error::Result;

/// Splits raw text into words, punctuation and (optionally) markup tags.
#[derive(Clone, Debug, Default)]
pub struct Segmenter {
    xml: bool,
}

impl Segmenter {
    /// Create a segmenter that treats `<` and `>` as punctuation.
    pub fn new() -> Self {
        Segmenter { xml: false }
    }

    /// Create a segmenter that keeps markup tags intact.
    pub fn with_xml() -> Self {
        Segmenter { xml: true }
    }

    pub fn xml(&self) -> bool {
        self.xml
    }

    /// Length in bytes of the atomic unit starting at the head of `rest`, if
    /// `rest` starts with one.
    fn atomic_unit_len(&self, rest: &str) -> Option<usize> {
        let first = rest.chars().next()?;

        if self.xml && first == '<' {
            if let Some(tag) = XML_TAG_PREFIX.find(rest) {
                return Some(tag.end());
            }
        }
        if first == '&' {
            if let Some(entity) = ESCAPED_ENTITY_PREFIX.find(rest) {
                return Some(entity.end());
            }
        }
        if is_punctuation_char(first) {
            let run = rest
                .chars()
                .take_while(|&c| c == first)
                .map(char::len_utf8)
                .sum();
            return Some(run);
        }

        None
    }

    /// Surround every atomic unit with spaces.
    fn space_out(&self, text: &str) -> String {
        let mut spaced = String::with_capacity(text.len() + text.len() / 2);
        let mut rest = text;

        while let Some(c) = rest.chars().next() {
            match self.atomic_unit_len(rest) {
                Some(len) => {
                    spaced.push(' ');
                    spaced.push_str(&rest[..len]);
                    spaced.push(' ');
                    rest = &rest[len..];
                }
                None => {
                    spaced.push(c);
                    rest = &rest[c.len_utf8()..];
                }
            }
        }

        spaced
    }
}

fn is_open_tag(element: &str) -> bool {
    element.starts_with('<') && !element.ends_with('>')
}

/// Join tags that the whitespace split tore apart, e.g. `<foreign` and
/// `lang="grc">`. A fragment that never finds its closing `>` is left alone.
fn reassemble_tags(elements: Vec<String>) -> Vec<String> {
    let mut reassembled = Vec::with_capacity(elements.len());
    let mut i = 0;

    while i < elements.len() {
        if is_open_tag(&elements[i]) {
            let closing = elements[i + 1..]
                .iter()
                .position(|element| element.ends_with('>'))
                .map(|offset| i + 1 + offset);

            if let Some(end) = closing {
                let tag = elements[i..=end].join(" ");
                trace!("reassembled tag {tag}");
                reassembled.push(tag);
                i = end + 1;
                continue;
            }
        }
        reassembled.push(elements[i].clone());
        i += 1;
    }

    reassembled
}

impl Tokenizer for Segmenter {
    fn tokenize(&self, text: &str) -> Result<WorkingSequence> {
        let elements: Vec<String> = self
            .space_out(text)
            .split_whitespace()
            .map(str::to_owned)
            .collect();

        let elements = if self.xml {
            reassemble_tags(elements)
        } else {
            elements
        };

        Ok(WorkingSequence::from(elements))
    }

    fn name(&self) -> &'static str {
        "segmenter"
    }
}
