//! Lexical category assignment
//!
//! Words are bucketed into one of eight coarse semantic categories by an
//! ordered table of patterns. Patterns are case-insensitive and unanchored,
//! so they match anywhere inside a word; the first matching rule wins.

use regex::RegexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Number of semantic categories (and of category centers)
pub const CATEGORY_COUNT: usize = 8;

/// Coarse semantic category of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticCategory {
    People,
    Animals,
    Actions,
    Descriptors,
    Spatial,
    Social,
    Food,
    Other,
}

impl SemanticCategory {
    /// Index of this category's center (0..8)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SemanticCategory::People => "people",
            SemanticCategory::Animals => "animals",
            SemanticCategory::Actions => "actions",
            SemanticCategory::Descriptors => "descriptors",
            SemanticCategory::Spatial => "spatial",
            SemanticCategory::Social => "social",
            SemanticCategory::Food => "food",
            SemanticCategory::Other => "other",
        }
    }
}

impl fmt::Display for SemanticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered (pattern, category) rules. Anything unmatched is `Other`.
const CATEGORY_RULES: &[(&str, SemanticCategory)] = &[
    (
        r"(?i)(mom|dad|grand|aunt|uncle|he|she|they|you|I)",
        SemanticCategory::People,
    ),
    (
        r"(?i)(dog|cat|puppy|kitten|cow|horse|sheep|goat|pig|bear|wolf|fox|deer|lion|tiger|elephant|giraffe|zebra|duck|chicken|fish|frog|turtle)",
        SemanticCategory::Animals,
    ),
    (
        r"(?i)(go|come|run|walk|jump|climb|play|sleep|eat|drink|open|close|push|pull|throw|catch|give|help|make|build|draw|read)",
        SemanticCategory::Actions,
    ),
    (
        r"(?i)(big|small|tiny|huge|hot|cold|red|blue|green|happy|sad|yummy|yucky|soft|hard)",
        SemanticCategory::Descriptors,
    ),
    (
        r"(?i)(in|on|under|over|up|down|out|inside|outside|near|far)",
        SemanticCategory::Spatial,
    ),
    (
        r"(?i)(the|and|or|yes|no|please|thank|hello|hi|bye|okay|ok)",
        SemanticCategory::Social,
    ),
    (
        r"(?i)(milk|water|juice|apple|banana|bread|cheese|cookie|pizza|sandwich|cup|spoon|bowl)",
        SemanticCategory::Food,
    ),
];

fn rule_set() -> &'static RegexSet {
    static RULES: OnceLock<RegexSet> = OnceLock::new();
    RULES.get_or_init(|| {
        RegexSet::new(CATEGORY_RULES.iter().map(|(pattern, _)| *pattern))
            .expect("category patterns are valid regexes")
    })
}

/// Assign a word to its semantic category (first matching rule wins)
pub fn categorize(label: &str) -> SemanticCategory {
    rule_set()
        .matches(label)
        .iter()
        .next()
        .map(|rule| CATEGORY_RULES[rule].1)
        .unwrap_or(SemanticCategory::Other)
}
