//! The fixed catalog of weighted extraction patterns.
//!
//! Each pattern is a case-insensitive regex describing one shape of band
//! name, paired with a relative selection weight. The regexes are matched
//! against the raw mixed-case corpus; match text is returned with its
//! original casing and normalized later by the styler.

use rand::Rng;
use regex::Regex;

use super::weighted::weighted_choice;

/// Identifies one of the fixed extraction pattern kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternId {
    SingleWord,
    TwoWords,
    ThePlural,
    TheWord,
    ThreeWords,
    WordOfWord,
}

impl PatternId {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternId::SingleWord => "single_word",
            PatternId::TwoWords => "two_words",
            PatternId::ThePlural => "the_plural",
            PatternId::TheWord => "the_word",
            PatternId::ThreeWords => "three_words",
            PatternId::WordOfWord => "word_of_word",
        }
    }

    /// The regex source for this pattern kind.
    fn regex_str(&self) -> &'static str {
        match self {
            PatternId::SingleWord => r"(?i)\b[a-z]{4,12}\b",
            PatternId::TwoWords => r"(?i)\b[a-z]+\s+[a-z]+\b",
            PatternId::ThePlural => r"(?i)\bthe\s+[a-z]+s\b",
            PatternId::TheWord => r"(?i)\bthe\s+[a-z]+\b",
            PatternId::ThreeWords => r"(?i)\b[a-z]+\s+[a-z]+\s+[a-z]+\b",
            PatternId::WordOfWord => r"(?i)\b[a-z]+\s+of\s+[a-z]+\b",
        }
    }
}

/// A compiled pattern entry: regex + relative selection weight.
#[derive(Debug, Clone)]
pub struct PatternSpec {
    pub id: PatternId,
    regex: Regex,
    weight: f64,
}

impl PatternSpec {
    /// Compile the spec for a pattern kind with the given weight.
    ///
    /// The regex sources are fixed and known-good; a compile failure here is
    /// a programming error, so this panics rather than returning a Result.
    pub fn new(id: PatternId, weight: f64) -> Self {
        let regex = Regex::new(id.regex_str())
            .unwrap_or_else(|e| panic!("Failed to compile regex for {}: {}", id.as_str(), e));
        PatternSpec { id, regex, weight }
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// The ordered, immutable pattern catalog.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    specs: Vec<PatternSpec>,
}

impl PatternCatalog {
    /// Build a catalog from an arbitrary spec list (test fixtures force a
    /// single pattern this way).
    pub fn new(specs: Vec<PatternSpec>) -> Self {
        PatternCatalog { specs }
    }

    /// The standard six-pattern catalog. Weights sum to 100 but are
    /// normalized at selection time, so the sum carries no meaning.
    pub fn standard() -> Self {
        PatternCatalog::new(vec![
            PatternSpec::new(PatternId::SingleWord, 45.0),
            PatternSpec::new(PatternId::TwoWords, 25.0),
            PatternSpec::new(PatternId::ThePlural, 15.0),
            PatternSpec::new(PatternId::TheWord, 8.0),
            PatternSpec::new(PatternId::ThreeWords, 5.0),
            PatternSpec::new(PatternId::WordOfWord, 2.0),
        ])
    }

    /// Draw one pattern with probability proportional to its weight.
    ///
    /// Returns `None` only for an empty or zero-weight catalog.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&PatternSpec> {
        let pairs: Vec<(&PatternSpec, f64)> =
            self.specs.iter().map(|spec| (spec, spec.weight)).collect();
        weighted_choice(&pairs, rng).copied()
    }

    pub fn specs(&self) -> &[PatternSpec] {
        &self.specs
    }
}
