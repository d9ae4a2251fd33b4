//! Static rule tables used by the pipeline stages.
//!
//! Everything in here is process-wide, immutable and compiled once on first
//! use. The tables are shared freely between concurrent tokenization calls.

use ahash::AHashSet;
use lazy_static::lazy_static;
use regex::Regex;

/// Abbreviated Roman praenomina, written without their dot.
pub const PRAENOMINA: &[&str] = &[
    "A", "Ap", "App", "C", "Cn", "D", "K", "L", "M", "Mam", "N", "Oct", "Opet", "P", "Post",
    "Pro", "Q", "S", "Ser", "Sert", "Sex", "Sp", "St", "T", "Ti", "Tib", "V", "Vol", "Vop",
];

/// Words of Roman date expressions such as `a. d. V Kal. Apr.`.
pub const DATE_WORDS: &[&str] = &[
    "a", "d", "pr", "Kal", "Non", "Id", "Ian", "Feb", "Mart", "Apr", "Mai", "Iun", "Iul",
    "Quint", "Sext", "Aug", "Sept", "Oct", "Nov", "Dec",
];

/// Colloquial forms abbreviated with an apostrophe, e.g. `satin'` for `satisne`.
pub const APOSTROPHE_WORDS: &[&str] = &[
    "po", "min", "vin", "tun", "scin", "potin", "satin", "viden", "audin", "ain", "nostin",
    "egon", "iussin",
];

/// Escaped markup entities that are kept as single punctuation tokens.
pub const ESCAPED_ENTITIES: &[&str] = &["&amp;", "&quot;", "&apos;", "&lt;", "&gt;"];

/// Characters that form punctuation tokens. Runs of the same character
/// collapse into one token, runs of different characters do not.
pub const PUNCTUATION_CHARS: &[char] = &[
    '.', '?', ',', '!', ';', '-', ':', '"', '\'', '”', '&', '(', ')', '[', ']', '†', '<', '>',
];

/// Words that scope a following `-que` over the whole prepositional phrase.
pub const QUE_SHIFTING_PREPOSITIONS: &[&str] = &["in", "ad", "ob"];

lazy_static! {
    static ref PRAENOMEN_SET: AHashSet<&'static str> = PRAENOMINA.iter().copied().collect();
    static ref DATE_WORD_SET: AHashSet<&'static str> = DATE_WORDS.iter().copied().collect();
    static ref APOSTROPHE_WORD_SET: AHashSet<&'static str> =
        APOSTROPHE_WORDS.iter().copied().collect();

    /// Words ending in `que` that do not carry the enclitic.
    static ref WORDS_ENDING_WITH_QUE: Regex = Regex::new(
        r"(?i)^((un.{1,3})?[qc]u[aei].*que|qu[ao]que|itaque|atque|ut[er].*que|.*cumque|pler(.{1,2}|[oa]rum)que|denique|undique|usque)$"
    )
    .expect("que exclusion pattern is valid");

    static ref WORDS_ENDING_WITH_NE: Regex =
        Regex::new(r"(?i)^(omne|sine|bene|paene|iuvene)$").expect("ne exclusion pattern is valid");

    static ref WORDS_ENDING_WITH_VE: Regex =
        Regex::new(r"(?i)^(sive|neve)$").expect("ve exclusion pattern is valid");

    /// Markup tags, with or without attributes.
    pub static ref XML_TAG: Regex = Regex::new(r"^</?.+>$").expect("xml tag pattern is valid");

    /// The prefix form of [`XML_TAG`] used while segmenting.
    pub static ref XML_TAG_PREFIX: Regex =
        Regex::new(r"^</?.+?>").expect("xml tag prefix pattern is valid");

    pub static ref ESCAPED_ENTITY_PREFIX: Regex =
        Regex::new(r"^&(?:amp|quot|apos|lt|gt);").expect("entity pattern is valid");

    /// Negated quantifiers merged onto a preceding `non`.
    static ref NULL_FORMS: Regex = Regex::new(r"null.{1,4}$").expect("null pattern is valid");

    /// Fixed idioms written as two words but tokenized as one.
    pub static ref MERGE_RULES: Vec<MergeRule> = vec![
        MergeRule::new("quam", MergeMatcher::Literal("diu")),
        MergeRule::new("non", MergeMatcher::Pattern(&NULL_FORMS)),
    ];
}

/// A bound particle category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EncliticCategory {
    Que,
    Ne,
    Ve,
    C,
}

impl EncliticCategory {
    /// All categories, in the order their suffixes are tested.
    pub const ALL: [EncliticCategory; 4] = [
        EncliticCategory::Que,
        EncliticCategory::Ne,
        EncliticCategory::Ve,
        EncliticCategory::C,
    ];

    /// The categories split by brute force. `c` is only split off `nec`.
    pub const BRUTE_FORCE: [EncliticCategory; 3] = [
        EncliticCategory::Que,
        EncliticCategory::Ne,
        EncliticCategory::Ve,
    ];

    pub fn suffix(&self) -> &'static str {
        match self {
            EncliticCategory::Que => "que",
            EncliticCategory::Ne => "ne",
            EncliticCategory::Ve => "ve",
            EncliticCategory::C => "c",
        }
    }

    /// Whether `word` is on the closed list of words that merely end in this
    /// category's letters.
    pub fn is_excluded(&self, word: &str) -> bool {
        match self {
            EncliticCategory::Que => WORDS_ENDING_WITH_QUE.is_match(word),
            EncliticCategory::Ne => WORDS_ENDING_WITH_NE.is_match(word),
            EncliticCategory::Ve => WORDS_ENDING_WITH_VE.is_match(word),
            EncliticCategory::C => false,
        }
    }

    /// The host part of `word` if it ends in this category's suffix preceded
    /// by at least one word character.
    pub fn host_of<'a>(&self, word: &'a str) -> Option<&'a str> {
        let host = word.strip_suffix(self.suffix())?;
        let last = host.chars().last()?;
        (last.is_alphanumeric() || last == '_').then_some(host)
    }

    /// The marked token form, e.g. `-que`.
    pub fn marked(&self, marker: &str) -> String {
        format!("{marker}{}", self.suffix())
    }

    /// The category whose marked form is `token`, if any.
    pub fn from_marked(token: &str, marker: &str) -> Option<EncliticCategory> {
        let suffix = token.strip_prefix(marker)?;
        EncliticCategory::ALL
            .into_iter()
            .find(|category| category.suffix() == suffix)
    }
}

/// Matches the second element of an idiom pair.
#[derive(Debug)]
pub enum MergeMatcher {
    Literal(&'static str),
    Pattern(&'static Regex),
}

impl MergeMatcher {
    fn matches(&self, element: &str) -> bool {
        match self {
            MergeMatcher::Literal(literal) => *literal == element,
            MergeMatcher::Pattern(pattern) => pattern.is_match(element),
        }
    }
}

/// A two-element idiom fused into a single token.
#[derive(Debug)]
pub struct MergeRule {
    /// Compared against the lower-cased first element
    pub first: &'static str,
    pub second: MergeMatcher,
}

impl MergeRule {
    fn new(first: &'static str, second: MergeMatcher) -> Self {
        MergeRule { first, second }
    }

    pub fn matches(&self, first: &str, second: &str) -> bool {
        first.to_lowercase() == self.first && self.second.matches(second)
    }
}

/// Whether some idiom rule fuses `first` and `second`.
pub fn is_mergeable_pair(first: &str, second: &str) -> bool {
    MERGE_RULES.iter().any(|rule| rule.matches(first, second))
}

/// Whether `word` is rejoined with a following dot.
pub fn is_dotted_abbreviation(word: &str) -> bool {
    PRAENOMEN_SET.contains(word) || DATE_WORD_SET.contains(word)
}

/// Whether `word` is rejoined with a following apostrophe.
pub fn is_apostrophe_word(word: &str) -> bool {
    APOSTROPHE_WORD_SET.contains(word)
}

/// An abbreviated praenomen with its dot, e.g. `Sex.`.
pub fn is_abbreviated_name(token: &str) -> bool {
    token
        .strip_suffix('.')
        .is_some_and(|name| PRAENOMEN_SET.contains(name))
}

/// A Roman date word with its dot, e.g. `Kal.`.
pub fn is_roman_date_word(token: &str) -> bool {
    token
        .strip_suffix('.')
        .is_some_and(|word| DATE_WORD_SET.contains(word))
}

pub fn is_punctuation_char(c: char) -> bool {
    PUNCTUATION_CHARS.contains(&c)
}

/// Whether `token` consists only of punctuation: one escaped entity, or a
/// run of one repeated punctuation character.
pub fn is_punctuation(token: &str) -> bool {
    if ESCAPED_ENTITIES.contains(&token) {
        return true;
    }
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if is_punctuation_char(first) => chars.all(|c| c == first),
        _ => false,
    }
}

pub fn is_que_shifting_preposition(word: &str) -> bool {
    QUE_SHIFTING_PREPOSITIONS
        .iter()
        .any(|preposition| preposition.eq_ignore_ascii_case(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_requires_a_word_character() {
        assert_eq!(EncliticCategory::Que.host_of("laetusque"), Some("laetus"));
        assert_eq!(EncliticCategory::Ne.host_of("ne"), None);
        assert_eq!(EncliticCategory::Ne.host_of("-ne"), None);
        assert_eq!(EncliticCategory::Ve.host_of("Arma"), None);
        assert_eq!(EncliticCategory::Que.host_of("réque"), Some("ré"));
        assert_eq!(EncliticCategory::Que.host_of("aëraque"), Some("aëra"));
    }

    #[test]
    fn test_que_exclusions() {
        for word in [
            "atque", "Atque", "itaque", "quoque", "quaque", "quemque", "cuiusque", "uterque",
            "utriusque", "utcumque", "quantumcumque", "plerumque", "plerosque", "plerarumque",
            "denique", "undique", "usque",
        ] {
            assert!(EncliticCategory::Que.is_excluded(word), "{word}");
        }
        assert!(!EncliticCategory::Que.is_excluded("neque"));
        assert!(!EncliticCategory::Que.is_excluded("laetusque"));
    }

    #[test]
    fn test_marked_round_trip() {
        assert_eq!(EncliticCategory::Que.marked("-"), "-que");
        assert_eq!(
            EncliticCategory::from_marked("--ve", "--"),
            Some(EncliticCategory::Ve)
        );
        assert_eq!(EncliticCategory::from_marked("que", ""), Some(EncliticCategory::Que));
        assert_eq!(EncliticCategory::from_marked("-qu", "-"), None);
    }

    #[test]
    fn test_punctuation_shapes() {
        assert!(is_punctuation("..."));
        assert!(is_punctuation("--"));
        assert!(is_punctuation("&quot;"));
        assert!(is_punctuation("†"));
        assert!(!is_punctuation("?!"));
        assert!(!is_punctuation("a."));
        assert!(!is_punctuation(""));
    }

    #[test]
    fn test_abbreviation_tables() {
        assert!(is_dotted_abbreviation("Sex"));
        assert!(is_dotted_abbreviation("Kal"));
        assert!(!is_dotted_abbreviation("Cicero"));
        assert!(is_abbreviated_name("Ti."));
        assert!(!is_abbreviated_name("Ti"));
        assert!(is_roman_date_word("Ian."));
        assert!(is_apostrophe_word("satin"));
    }

    #[test]
    fn test_merge_rules() {
        assert!(is_mergeable_pair("quam", "diu"));
        assert!(is_mergeable_pair("Quam", "diu"));
        assert!(!is_mergeable_pair("quam", "Diu"));
        assert!(is_mergeable_pair("non", "nullis"));
        assert!(!is_mergeable_pair("erat", "diu"));
    }

    #[test]
    fn test_merge_triggers_never_carry_an_enclitic() {
        for rule in MERGE_RULES.iter() {
            for category in EncliticCategory::BRUTE_FORCE {
                assert!(category.host_of(rule.first).is_none());
                if let MergeMatcher::Literal(second) = rule.second {
                    assert!(category.host_of(second).is_none());
                }
            }
        }
    }
}
