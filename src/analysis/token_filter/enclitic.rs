//! Enclitic splitting and repositioning.
//!
//! Latin attaches the particles `-que`, `-ne` and `-ve` (and the `-c` of
//! `nec`) to the end of a host word, although they logically scope over what
//! precedes or follows. This filter detaches them as marked tokens:
//!
//! ```text
//! laetusque   →  -que laetus      (shifting enabled)
//! laetusque   →  laetus -que      (shifting disabled)
//! in eoque    →  -que in eo       (-que scopes over the prepositional phrase)
//! nec         →  -c ne
//! ```
//!
//! The filter works in four ordered passes:
//!
//! 1. brute-force split of every word ending in a suffix that is not on the
//!    category's exclusion list, plus the dedicated `nec` rule
//! 2. moving `-que` in front of a preceding preposition (shifting only)
//! 3. `-ne` disambiguation: a split is reversed when the stem lookup knows the
//!    unsplit word as a third-declension ablative or an o-declension vocative
//! 4. `-ve` disambiguation: a split is reversed when the stem lookup knows any
//!    matching adjective, noun or verb stem
//!
//! Insertions and deletions are computed during a forward scan and applied
//! afterwards with index compensation.

use std::fmt;
use std::sync::Arc;

use log::{debug, trace};

use crate::analysis::rules::{EncliticCategory, is_que_shifting_preposition};
use crate::analysis::token::WorkingSequence;
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::lexicon::{StemKind, StemLookup, StemQuery, WordType};

/// Detects, splits, repositions and validates bound particles.
#[derive(Clone)]
pub struct EncliticSplitter {
    lookup: Arc<dyn StemLookup>,
    marker: String,
    shifting: bool,
}

impl EncliticSplitter {
    /// Create a splitter with the `-` marker and shifting enabled.
    pub fn new(lookup: Arc<dyn StemLookup>) -> Self {
        EncliticSplitter {
            lookup,
            marker: "-".to_string(),
            shifting: true,
        }
    }

    /// Set the glyph prefixed to split-off particles.
    pub fn with_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.marker = marker.into();
        self
    }

    /// Enable or disable moving particles in front of their host.
    pub fn with_shifting(mut self, shifting: bool) -> Self {
        self.shifting = shifting;
        self
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn shifting(&self) -> bool {
        self.shifting
    }

    /// Offset of an inserted marker relative to its host: in front of it when
    /// shifting, right after it otherwise.
    fn shift_range(&self) -> usize {
        if self.shifting { 0 } else { 1 }
    }

    /// Position of the host word of the marker at `index`.
    fn host_index(&self, index: usize) -> Option<usize> {
        if self.shifting {
            Some(index + 1)
        } else {
            index.checked_sub(1)
        }
    }

    fn split_category(&self, sequence: &mut WorkingSequence, category: EncliticCategory) {
        let mut insertions = Vec::new();

        for i in 0..sequence.len() {
            let word = &sequence[i];
            if category.is_excluded(word) {
                continue;
            }
            let Some(host_len) = category.host_of(word).map(str::len) else {
                continue;
            };

            if let Some(element) = sequence.get_mut(i) {
                trace!("splitting {element} at {host_len}");
                element.truncate(host_len);
            }
            insertions.push(i + insertions.len() + self.shift_range());
        }

        let marked = category.marked(&self.marker);
        for index in insertions {
            sequence.insert(index, marked.clone());
        }
    }

    fn split_nec(&self, sequence: &mut WorkingSequence) {
        let mut insertions = Vec::new();

        for i in 0..sequence.len() {
            if &sequence[i] == "nec" {
                if let Some(element) = sequence.get_mut(i) {
                    element.truncate(2);
                }
                insertions.push(i + insertions.len() + self.shift_range());
            }
        }

        let marked = EncliticCategory::C.marked(&self.marker);
        for index in insertions {
            sequence.insert(index, marked.clone());
        }
    }

    fn is_marked(&self, element: &str, category: EncliticCategory) -> bool {
        EncliticCategory::from_marked(element, &self.marker) == Some(category)
    }

    /// Move every `-que` that directly follows a preposition in front of it.
    fn shift_que_before_prepositions(&self, sequence: &mut WorkingSequence) {
        let to_shift: Vec<usize> = (1..sequence.len())
            .filter(|&i| {
                self.is_marked(&sequence[i], EncliticCategory::Que)
                    && is_que_shifting_preposition(&sequence[i - 1])
            })
            .collect();

        for i in to_shift {
            trace!("moving -que in front of {}", &sequence[i - 1]);
            sequence.swap(i - 1, i);
        }
    }

    fn query(word_type: WordType, stem_kind: StemKind, stem: &str, classes: &[u8]) -> StemQuery {
        // proper names keep their capital
        let stem = match word_type {
            WordType::Persona => stem.to_string(),
            _ => stem.to_lowercase(),
        };
        StemQuery::new(word_type, stem_kind, stem, classes)
    }

    fn ne_candidates(host: &str) -> Vec<StemQuery> {
        let n_stem = format!("{host}n");
        let mut queries = Vec::with_capacity(6);

        // actio-ne, ratio-ne
        if host.ends_with("io") {
            queries.push(Self::query(WordType::Noun, StemKind::Nominative, host, &[3]));
        }
        // Plato-ne, Cicero-ne
        if host.ends_with('o') {
            queries.push(Self::query(WordType::Persona, StemKind::Stem, &n_stem, &[3]));
        }
        // homi-ne, fortitudi-ne, fi-ne
        if host.ends_with(['e', 'i']) {
            queries.push(Self::query(WordType::Noun, StemKind::Stem, &n_stem, &[3, 33]));
        }
        queries.push(Self::query(WordType::Noun, StemKind::Stem, &n_stem, &[2]));
        queries.push(Self::query(WordType::Adjective, StemKind::Stem, &n_stem, &[1, 3]));
        queries.push(Self::query(WordType::Persona, StemKind::Stem, &n_stem, &[2]));

        queries
    }

    fn ve_candidates(host: &str) -> Vec<StemQuery> {
        let v_stem = format!("{host}v");
        let ve_stem = format!("{host}ve");

        vec![
            Self::query(WordType::Adjective, StemKind::Stem, &v_stem, &[1]),
            Self::query(WordType::Adjective, StemKind::Stem, &v_stem, &[3]),
            Self::query(WordType::Noun, StemKind::Stem, &v_stem, &[2, 33, 5]),
            Self::query(WordType::Verb, StemKind::Present, &ve_stem, &[2]),
            Self::query(WordType::Verb, StemKind::Present, &v_stem, &[3, 5]),
        ]
    }

    /// Whether `host` + `ne` is itself a valid form.
    fn is_ne_form(&self, host: &str) -> bool {
        Self::ne_candidates(host).iter().any(|query| {
            self.lookup.look_up_stem(query).iter().any(|entry| {
                entry.third_decl_with_possible_ne_abl() || entry.o_decl_with_possible_ne_voc()
            })
        })
    }

    /// Whether `host` + `ve` is itself a valid form.
    fn is_ve_form(&self, host: &str) -> bool {
        Self::ve_candidates(host)
            .iter()
            .any(|query| !self.lookup.look_up_stem(query).is_empty())
    }

    /// Reverse every split of `category` whose host `is_form` accepts.
    fn correct_splits<F>(&self, sequence: &mut WorkingSequence, category: EncliticCategory, is_form: F)
    where
        F: Fn(&str) -> bool,
    {
        let corrections: Vec<usize> = (0..sequence.len())
            .filter(|&i| self.is_marked(&sequence[i], category))
            .filter(|&i| {
                self.host_index(i)
                    .and_then(|host| sequence.get(host))
                    .is_some_and(|host| is_form(host))
            })
            .collect();

        self.reverse_splittings(sequence, &corrections, category);
    }

    /// Delete the markers at `indices` and reattach their suffix to the host.
    fn reverse_splittings(
        &self,
        sequence: &mut WorkingSequence,
        indices: &[usize],
        category: EncliticCategory,
    ) {
        for (deleted, &index) in indices.iter().enumerate() {
            let index = index - deleted;
            sequence.remove(index);

            // with shifting the host moved into the marker's place
            let host = if self.shifting { Some(index) } else { index.checked_sub(1) };
            if let Some(host) = host.and_then(|host| sequence.get_mut(host)) {
                host.push_str(category.suffix());
                trace!("restored {host}");
            }
        }
    }
}

impl Filter for EncliticSplitter {
    fn filter(&self, mut sequence: WorkingSequence) -> Result<WorkingSequence> {
        let before = sequence.len();

        for category in EncliticCategory::BRUTE_FORCE {
            self.split_category(&mut sequence, category);
        }
        self.split_nec(&mut sequence);

        if self.shifting {
            self.shift_que_before_prepositions(&mut sequence);
        }

        self.correct_splits(&mut sequence, EncliticCategory::Ne, |host| self.is_ne_form(host));
        self.correct_splits(&mut sequence, EncliticCategory::Ve, |host| self.is_ve_form(host));

        debug!(
            "enclitic splitter: {} particles split off",
            sequence.len() - before
        );

        Ok(sequence)
    }

    fn name(&self) -> &'static str {
        "enclitic"
    }
}

impl fmt::Debug for EncliticSplitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncliticSplitter")
            .field("marker", &self.marker)
            .field("shifting", &self.shifting)
            .finish()
    }
}
