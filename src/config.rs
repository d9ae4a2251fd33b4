//! Tokenizer options.
//!
//! An analyzer is created with a [`TokenizerOptions`] value that acts as its
//! instance default. A single call may override any subset of it through
//! [`OptionOverrides`], without touching the analyzer itself.
//!
//! # Examples
//!
//! ```
//! use tmesis::config::{OptionOverrides, TokenizerOptions};
//!
//! let options = TokenizerOptions::default();
//! assert!(options.shifting);
//! assert!(!options.xml);
//! assert_eq!(options.enclitics_marker, "-");
//!
//! let overrides = OptionOverrides {
//!     shifting: Some(false),
//!     ..Default::default()
//! };
//! let effective = options.merged_with(&overrides);
//! assert!(!effective.shifting);
//! assert!(effective.merging);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TmesisError};

/// Options controlling which pipeline stages run and how they behave.
///
/// Absent keys in a serialized form keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerOptions {
    /// Place split-off enclitics in front of their host, and in front of a
    /// preceding `in`/`ad`/`ob`.
    pub shifting: bool,
    /// Fuse fixed idioms such as `quam diu`.
    pub merging: bool,
    /// Split enclitics (and, for Greek, elisions and kraseis).
    pub splitting: bool,
    /// Assign sequential ids.
    pub indexing: bool,
    /// Treat `<...>` spans as atomic markup tags.
    pub xml: bool,
    /// Prefix of split-off enclitic tokens.
    pub enclitics_marker: String,
    /// Suffix of the consonant split off a Greek krasis.
    pub krasis_marker: String,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            shifting: true,
            merging: true,
            splitting: true,
            indexing: true,
            xml: false,
            enclitics_marker: "-".to_string(),
            krasis_marker: "-".to_string(),
        }
    }
}

impl TokenizerOptions {
    pub fn with_shifting(mut self, shifting: bool) -> Self {
        self.shifting = shifting;
        self
    }

    pub fn with_merging(mut self, merging: bool) -> Self {
        self.merging = merging;
        self
    }

    pub fn with_splitting(mut self, splitting: bool) -> Self {
        self.splitting = splitting;
        self
    }

    pub fn with_indexing(mut self, indexing: bool) -> Self {
        self.indexing = indexing;
        self
    }

    pub fn with_xml(mut self, xml: bool) -> Self {
        self.xml = xml;
        self
    }

    pub fn with_enclitics_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.enclitics_marker = marker.into();
        self
    }

    pub fn with_krasis_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.krasis_marker = marker.into();
        self
    }

    /// Check that the markers can survive as single tokens.
    pub fn validate(&self) -> Result<()> {
        for (name, marker) in [
            ("enclitics_marker", &self.enclitics_marker),
            ("krasis_marker", &self.krasis_marker),
        ] {
            if marker.chars().any(char::is_whitespace) {
                return Err(TmesisError::invalid_config(format!(
                    "{name} must not contain whitespace: {marker:?}"
                )));
            }
        }
        Ok(())
    }

    /// Load options from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TmesisError::invalid_config(format!(
                "Failed to read options file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let options: TokenizerOptions = serde_json::from_str(&content)?;
        options.validate()?;
        Ok(options)
    }

    /// The options in effect for a call carrying `overrides`.
    pub fn merged_with(&self, overrides: &OptionOverrides) -> TokenizerOptions {
        TokenizerOptions {
            shifting: overrides.shifting.unwrap_or(self.shifting),
            merging: overrides.merging.unwrap_or(self.merging),
            splitting: overrides.splitting.unwrap_or(self.splitting),
            indexing: overrides.indexing.unwrap_or(self.indexing),
            xml: overrides.xml.unwrap_or(self.xml),
            enclitics_marker: overrides
                .enclitics_marker
                .clone()
                .unwrap_or_else(|| self.enclitics_marker.clone()),
            krasis_marker: overrides
                .krasis_marker
                .clone()
                .unwrap_or_else(|| self.krasis_marker.clone()),
        }
    }
}

/// Per-call replacements for individual options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionOverrides {
    pub shifting: Option<bool>,
    pub merging: Option<bool>,
    pub splitting: Option<bool>,
    pub indexing: Option<bool>,
    pub xml: Option<bool>,
    pub enclitics_marker: Option<String>,
    pub krasis_marker: Option<String>,
}

impl OptionOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
