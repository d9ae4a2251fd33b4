//! Greek elision and krasis splitting.
//!
//! Greek fuses words in two ways the segmenter cannot see:
//!
//! - elision: a final vowel is dropped and marked with an apostrophe, and the
//!   next word may follow without a space (`δ᾽ἴστε` → `δ᾽`, `ἴστε`)
//! - krasis: two words contract into one, the second keeping its breathing
//!   (`κἄπειτα` from καί + ἔπειτα → `κ-`, `ἄπειτα`)
//!
//! The split-off consonant of a krasis carries a marker glyph. Both splits
//! turn one element into two, so the sequence is rebuilt rather than edited
//! in place.

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::analysis::token::WorkingSequence;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

const PLAIN_VOWELS: &str = "αειηουω";
const VOWELS_WITH_ACUTE: &str = "\u{3AC}\u{3AD}\u{3AE}\u{3AF}\u{3CC}\u{3CD}\u{3CE}\u{1F71}\u{1F73}\u{1F75}\u{1F77}\u{1F79}\u{1F7B}\u{1F7D}";
const VOWELS_WITH_GRAVE: &str = "ὰὲὴὶὸὺὼ";
const VOWELS_WITH_CIRCUMFLEX: &str = "ᾶῆῖῦῶ";
const VOWELS_WITH_IOTA: &str = "ᾲᾳᾴᾷῂῃῄῇῲῳῴῷ";
const CONSONANTS: &str = "βγδζθκλμνξπρῥῤσςτφχψ";

const SPIRITUS_LENIS: &str = "ἀἐἠἰὀὐὠἂἒἲἢὂὒὢἄἔἴἤὄὔὤἆἶἦὖὦ";
const SPIRITUS_ASPER: &str = "ἁἑἡἱὁὑὡἃἣἓἳὃὓὣἅἥἕἵὅὕὥἇἷἧὗὧ";
const SPIRITUS_WITH_IOTA: &str = "ᾀᾁᾂᾃᾄᾅᾆᾇᾐᾑᾒᾓᾔᾕᾖᾗᾠᾡᾢᾣᾤᾥᾦᾧ";

/// Apostrophes marking an elided vowel.
const ELISION_MARKS: &[char] = &['\u{1FBD}', '\u{2019}', '\u{02BC}'];

lazy_static! {
    static ref KRASIS: Regex = {
        let vowels = format!(
            "{PLAIN_VOWELS}{VOWELS_WITH_ACUTE}{VOWELS_WITH_GRAVE}{VOWELS_WITH_CIRCUMFLEX}{VOWELS_WITH_IOTA}"
        );
        let pattern = format!(
            "^([{CONSONANTS}])([{PLAIN_VOWELS}]?[{SPIRITUS_LENIS}{SPIRITUS_ASPER}{SPIRITUS_WITH_IOTA}][{CONSONANTS}{vowels}]*)$"
        );
        Regex::new(&pattern).expect("krasis pattern is valid")
    };
}

/// Whether `text` contains Greek letters.
pub fn is_greek(text: &str) -> bool {
    text.chars()
        .any(|c| matches!(c, '\u{0370}'..='\u{03FF}' | '\u{1F00}'..='\u{1FFF}'))
}

/// Splits Greek elisions and kraseis.
#[derive(Clone, Debug)]
pub struct KrasisSplitter {
    marker: String,
}

impl Default for KrasisSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl KrasisSplitter {
    /// Create a splitter that marks split-off consonants with `-`.
    pub fn new() -> Self {
        KrasisSplitter {
            marker: "-".to_string(),
        }
    }

    pub fn with_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.marker = marker.into();
        self
    }

    /// `δ᾽ἴστε` → `δ᾽`, `ἴστε`.
    fn split_elision(element: String) -> Vec<String> {
        let split_at = element
            .char_indices()
            .find(|&(_, c)| ELISION_MARKS.contains(&c))
            .map(|(i, c)| i + c.len_utf8())
            .filter(|&end| end < element.len());

        match split_at {
            Some(end) if is_greek(&element[..end]) => {
                trace!("splitting elision {element}");
                vec![element[..end].to_string(), element[end..].to_string()]
            }
            _ => vec![element],
        }
    }

    fn split_krasis(&self, element: String) -> Vec<String> {
        match KRASIS.captures(&element) {
            Some(caps) => {
                trace!("splitting krasis {element}");
                vec![format!("{}{}", &caps[1], self.marker), caps[2].to_string()]
            }
            None => vec![element],
        }
    }
}

impl Filter for KrasisSplitter {
    fn filter(&self, sequence: WorkingSequence) -> Result<WorkingSequence> {
        let before = sequence.len();

        let split: Vec<String> = sequence
            .into_iter()
            .flat_map(Self::split_elision)
            .flat_map(|element| self.split_krasis(element))
            .collect();

        debug!("krasis splitter: {} splits", split.len() - before);

        Ok(WorkingSequence::from(split))
    }

    fn name(&self) -> &'static str {
        "krasis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<String> {
        let sequence = WorkingSequence::from_elements(text.split_whitespace());
        KrasisSplitter::new().filter(sequence).unwrap().into_vec()
    }

    #[test]
    fn test_is_greek() {
        assert!(is_greek("καὶ"));
        assert!(is_greek("ἀρχαιολογίαν"));
        assert!(!is_greek("arma virumque"));
    }

    #[test]
    fn test_krasis() {
        assert_eq!(split("κἄπειτα"), vec!["κ-", "ἄπειτα"]);
    }

    #[test]
    fn test_diphthong_krasis() {
        assert_eq!(split("τοὔνομα"), vec!["τ-", "οὔνομα"]);
    }

    #[test]
    fn test_two_kraseis() {
        assert_eq!(
            split("κἄπειτα τῆς κἄπειτα"),
            vec!["κ-", "ἄπειτα", "τῆς", "κ-", "ἄπειτα"]
        );
    }

    #[test]
    fn test_ordinary_words_stay() {
        let text = "καὶ διὰ τῆς περὶ τὴν ἀρχαιολογίαν συγγραφῆς";
        assert_eq!(split(text).len(), 7);
    }

    #[test]
    fn test_elision() {
        assert_eq!(split("εὖ δ᾽ἴστε"), vec!["εὖ", "δ᾽", "ἴστε"]);
        assert_eq!(split("εὖ δ᾽ ἴστε"), vec!["εὖ", "δ᾽", "ἴστε"]);
    }

    #[test]
    fn test_custom_marker() {
        let sequence = WorkingSequence::from(vec!["κἄπειτα"]);
        let split = KrasisSplitter::new().with_marker("").filter(sequence).unwrap();
        assert_eq!(split.as_slice(), &["κ", "ἄπειτα"]);
    }

    #[test]
    fn test_latin_is_untouched() {
        assert_eq!(split("tun’ero"), vec!["tun’ero"]);
    }
}
