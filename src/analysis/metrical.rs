//! Vowel-quantity aware tokenization.
//!
//! Scanned verse marks long and short vowels with a macron or a breve
//! (`gaudĭămquĕ`). The splitting and merging stages only understand bare
//! letters, so annotated input is handled in three steps:
//!
//! 1. the annotated sequence is projected onto bare letters with
//!    [`strip_quantities`]
//! 2. the ordinary pipeline transforms the bare projection
//! 3. [`MetricalAligner`] walks the annotated and the transformed bare
//!    sequence side by side and replays every split and join onto the
//!    annotated elements, keeping their marks
//!
//! Afterwards stripping the annotated result yields the transformed bare
//! sequence, element for element.
//!
//! # Examples
//!
//! ```
//! use tmesis::analysis::metrical::{MetricalAligner, strip_quantities};
//! use tmesis::analysis::token::WorkingSequence;
//!
//! let annotated = WorkingSequence::from(vec!["gaudĭămquĕ"]);
//! let aligner = MetricalAligner::new(annotated, "-");
//! assert_eq!(aligner.bare().as_slice(), &["gaudiamque"]);
//!
//! let transformed = WorkingSequence::from(vec!["-que", "gaudiam"]);
//! let aligned = aligner.align(&transformed);
//! assert_eq!(aligned.as_slice(), &["-quĕ", "gaudĭăm"]);
//! assert_eq!(strip_quantities(&aligned[0]), "-que");
//! ```

use log::{debug, trace};
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::rules::EncliticCategory;
use crate::analysis::token::WorkingSequence;

const COMBINING_MACRON: char = '\u{0304}';
const COMBINING_BREVE: char = '\u{0306}';

fn is_quantity_mark(c: char) -> bool {
    c == COMBINING_MACRON || c == COMBINING_BREVE
}

/// Whether `text` carries any vowel quantity marks.
pub fn has_quantities(text: &str) -> bool {
    text.nfd().any(is_quantity_mark)
}

/// Remove vowel quantity marks, keeping the base letters and any other
/// diacritics (`ḗ` → `é`).
pub fn strip_quantities(text: &str) -> String {
    text.nfd()
        .filter(|&c| !is_quantity_mark(c))
        .nfc()
        .collect()
}

/// What remains of `stripped` after peeling the suffixes of `run` off it,
/// outermost (last) particle first.
fn peel<'a>(stripped: &'a str, run: &[EncliticCategory]) -> Option<&'a str> {
    run.iter()
        .rev()
        .try_fold(stripped, |head, category| head.strip_suffix(category.suffix()))
}

/// Split `annotated` where its stripped form is `stripped_head_len` bytes
/// long. Quantity marks stay with the letter they belong to.
fn split_annotated(annotated: &str, stripped_head_len: usize) -> Option<(String, String)> {
    let mut consumed = 0;
    for (offset, grapheme) in annotated.grapheme_indices(true) {
        if consumed == stripped_head_len {
            return Some((annotated[..offset].to_string(), annotated[offset..].to_string()));
        }
        consumed += strip_quantities(grapheme).len();
    }
    None
}

/// Replays structural edits made on a bare projection onto the annotated
/// sequence.
#[derive(Clone, Debug)]
pub struct MetricalAligner {
    annotated: WorkingSequence,
    bare: WorkingSequence,
    marker: String,
}

impl MetricalAligner {
    /// Create an aligner for `annotated`, projecting it onto bare letters.
    pub fn new<S: Into<String>>(annotated: WorkingSequence, marker: S) -> Self {
        let bare = WorkingSequence::from_elements(annotated.iter().map(strip_quantities));
        MetricalAligner {
            annotated,
            bare,
            marker: marker.into(),
        }
    }

    /// The bare projection to run through the pipeline.
    pub fn bare(&self) -> &WorkingSequence {
        &self.bare
    }

    fn category_of(&self, element: &str) -> Option<EncliticCategory> {
        EncliticCategory::from_marked(element, &self.marker)
    }

    /// Split the enclitic off the annotated element at `index`, leaving the
    /// host in place. Returns the marked annotated enclitic.
    fn slice_enclitic(
        &self,
        metric: &mut WorkingSequence,
        index: usize,
        category: EncliticCategory,
    ) -> Option<String> {
        let stripped = strip_quantities(metric.get(index)?);
        let head_len = stripped.strip_suffix(category.suffix())?.len();
        if head_len == 0 {
            return None;
        }
        let (head, tail) = split_annotated(metric.get(index)?, head_len)?;
        trace!("sliced {tail} off {head}");
        *metric.get_mut(index)? = head;
        Some(format!("{}{tail}", self.marker))
    }

    /// Align the annotated sequence to `transformed`, the bare projection
    /// after it went through the pipeline.
    ///
    /// Both cursors only move forward and every step advances the bare
    /// cursor, so the walk ends after at most `transformed.len()` steps.
    pub fn align(mut self, transformed: &WorkingSequence) -> WorkingSequence {
        let mut metric = std::mem::take(&mut self.annotated);
        let mut m = 0;
        let mut b = 0;

        while b < transformed.len() && m < metric.len() {
            let bare = &transformed[b];
            let stripped = strip_quantities(&metric[m]);

            if stripped == bare {
                m += 1;
                b += 1;
                continue;
            }

            if let Some(category) = self.category_of(bare) {
                // shifted: the particle hangs on this element or, after a
                // shift in front of a preposition, on the next one
                let host = if stripped.ends_with(category.suffix()) { m } else { m + 1 };
                if let Some(enclitic) = self.slice_enclitic(&mut metric, host, category) {
                    trace!("inserting shifted {enclitic} at {m}");
                    metric.insert(m, enclitic);
                    m += 1;
                }
                b += 1;
                continue;
            }

            // unshifted: the particles follow their host, innermost first
            let run: Vec<EncliticCategory> = transformed
                .iter()
                .skip(b + 1)
                .map_while(|next| self.category_of(next))
                .collect();
            let attached = (1..=run.len())
                .rev()
                .find(|&n| peel(&stripped, &run[..n]) == Some(bare));
            if let Some(n) = attached {
                let mut enclitics = Vec::with_capacity(n);
                for &category in run[..n].iter().rev() {
                    if let Some(enclitic) = self.slice_enclitic(&mut metric, m, category) {
                        enclitics.push(enclitic);
                    }
                }
                for (offset, enclitic) in enclitics.into_iter().rev().enumerate() {
                    trace!("inserting {enclitic} at {}", m + 1 + offset);
                    metric.insert(m + 1 + offset, enclitic);
                }
                m += 1;
                b += 1;
                continue;
            }

            let joined = metric
                .get(m + 1)
                .is_some_and(|next| format!("{stripped}{}", strip_quantities(next)) == bare);
            if joined {
                // abbreviation dot or merged idiom
                let next = metric.remove(m + 1);
                if let Some(current) = metric.get_mut(m) {
                    current.push_str(&next);
                    trace!("joined {current}");
                }
            }

            m += 1;
            b += 1;
        }

        debug!(
            "metrical aligner: {} annotated elements aligned to {}",
            metric.len(),
            transformed.len()
        );

        metric
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn align(annotated: &[&str], transformed: &[&str]) -> Vec<String> {
        let aligner = MetricalAligner::new(WorkingSequence::from(annotated.to_vec()), "-");
        aligner
            .align(&WorkingSequence::from(transformed.to_vec()))
            .into_vec()
    }

    #[test]
    fn test_has_quantities() {
        assert!(has_quantities("gaudĭămquĕ"));
        assert!(has_quantities("pecūniam"));
        assert!(has_quantities("ro\u{0304}sa"));
        assert!(!has_quantities("M. Cicero pecuniam dabit."));
        assert!(!has_quantities("ἀρχαιολογίαν"));
    }

    #[test]
    fn test_strip_quantities() {
        assert_eq!(strip_quantities("gaudĭămquĕ"), "gaudiamque");
        assert_eq!(strip_quantities("Ōceanus"), "Oceanus");
        assert_eq!(strip_quantities("ro\u{0304}sa\u{0306}"), "rosa");
    }

    #[test]
    fn test_macron_combined_with_other_marks() {
        assert!(has_quantities("ḗ"));
        assert!(has_quantities("ṓ"));
        assert!(has_quantities("ǣ"));
        assert_eq!(strip_quantities("ḗ"), "é");
        assert_eq!(strip_quantities("ṓ"), "ó");
        assert_eq!(strip_quantities("ǣ"), "æ");
        assert_eq!(strip_quantities("rḗque"), "réque");
    }

    #[test]
    fn test_other_diacritics_are_not_quantities() {
        assert!(!has_quantities("poëta"));
        assert_eq!(strip_quantities("poëtă"), "poëta");
    }

    #[test]
    fn test_bare_projection() {
        let annotated = WorkingSequence::from(vec!["M", ".", "pecūniam"]);
        let aligner = MetricalAligner::new(annotated, "-");
        assert_eq!(aligner.bare().as_slice(), &["M", ".", "pecuniam"]);
    }

    #[test]
    fn test_unchanged_sequence() {
        assert_eq!(
            align(&["pecūniam", "dabit"], &["pecuniam", "dabit"]),
            vec!["pecūniam", "dabit"]
        );
    }

    #[test]
    fn test_shifted_enclitic() {
        assert_eq!(
            align(
                &["pecūniam", "gaudĭămquĕ", "incolīs"],
                &["pecuniam", "-que", "gaudiam", "incolis"]
            ),
            vec!["pecūniam", "-quĕ", "gaudĭăm", "incolīs"]
        );
    }

    #[test]
    fn test_unshifted_enclitic() {
        assert_eq!(
            align(
                &["pecūniam", "gaudĭămquĕ", "incolīs"],
                &["pecuniam", "gaudiam", "-que", "incolis"]
            ),
            vec!["pecūniam", "gaudĭăm", "-quĕ", "incolīs"]
        );
    }

    #[test]
    fn test_enclitic_shifted_before_preposition() {
        assert_eq!(
            align(&["in", "eōquĕ"], &["-que", "in", "eo"]),
            vec!["-quĕ", "in", "eō"]
        );
    }

    #[test]
    fn test_combining_marks_stay_with_their_letter() {
        let word = "gaudi\u{0306}a\u{0306}mque\u{0306}";
        assert_eq!(
            align(&[word], &["-que", "gaudiam"]),
            vec!["-que\u{0306}", "gaudi\u{0306}a\u{0306}m"]
        );
    }

    #[test]
    fn test_abbreviation_join() {
        assert_eq!(
            align(&["M", ".", "Cicerō"], &["M.", "Cicero"]),
            vec!["M.", "Cicerō"]
        );
    }

    #[test]
    fn test_merge_join() {
        assert_eq!(
            align(&["Quăm", "diū", "cano"], &["Quamdiu", "cano"]),
            vec!["Quămdiū", "cano"]
        );
    }

    #[test]
    fn test_nec() {
        assert_eq!(align(&["nĕc"], &["-c", "ne"]), vec!["-c", "nĕ"]);
        assert_eq!(align(&["nĕc"], &["ne", "-c"]), vec!["nĕ", "-c"]);
    }

    #[test]
    fn test_stacked_unshifted_enclitics() {
        assert_eq!(
            align(&["vĭrūmnĕquĕ", "cănō"], &["virum", "-ne", "-que", "cano"]),
            vec!["vĭrūm", "-nĕ", "-quĕ", "cănō"]
        );
        assert_eq!(
            align(&["Ārmăvĕquĕ"], &["Arma", "-ve", "-que"]),
            vec!["Ārmă", "-vĕ", "-quĕ"]
        );
    }

    #[test]
    fn test_marked_run_of_the_next_word_is_left_alone() {
        // -que belongs to the shifted host after it
        assert_eq!(
            align(&["vĭrūmnĕ", "gaudĭămquĕ"], &["virum", "-ne", "-que", "gaudiam"]),
            vec!["vĭrūm", "-nĕ", "-quĕ", "gaudĭăm"]
        );
    }

    #[test]
    fn test_custom_marker() {
        let aligner = MetricalAligner::new(WorkingSequence::from(vec!["virūmque"]), "--");
        let aligned = aligner.align(&WorkingSequence::from(vec!["--que", "virum"]));
        assert_eq!(aligned.as_slice(), &["--que", "virūm"]);
    }

    #[test]
    fn test_stripped_output_equals_transformed() {
        let annotated = ["M", ".", "Cicero", "pecūniam", "gaudĭămquĕ", "in", "eōquĕ", "quăm", "diū", "."];
        let transformed = [
            "M.", "Cicero", "pecuniam", "-que", "gaudiam", "-que", "in", "eo", "quamdiu", ".",
        ];
        let aligned = align(&annotated, &transformed);
        let stripped: Vec<String> = aligned.iter().map(|e| strip_quantities(e)).collect();
        assert_eq!(stripped, transformed);
    }

    #[test]
    fn test_annotated_sequence_shorter_than_bare_terminates() {
        let aligned = align(&["gaudĭăm"], &["gaudiam", "extra", "elements"]);
        assert_eq!(aligned, vec!["gaudĭăm"]);
    }
}
