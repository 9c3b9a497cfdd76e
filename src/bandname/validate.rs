//! Quality validation of extracted candidates.
//!
//! A candidate passes only if every rule holds; there is no partial credit.
//! Rejection is an ordinary loop-continue outcome for the orchestrator.

const MIN_LENGTH: usize = 3;
const MAX_LENGTH: usize = 50;
const MIN_WORDS: usize = 1;
const MAX_WORDS: usize = 4;

/// A multi-word candidate needs at least one word this long, otherwise it
/// reads as filler ("boring") and is rejected.
const SUBSTANTIAL_WORD_LENGTH: usize = 4;

/// Function words that make weak band names on their own. Checked
/// case-insensitively; the list itself is all lower-case.
const STOPLIST: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "of", "in", "on", "at", "to", "for", "with", "from",
    "by", "as", "is", "are", "was", "were", "be", "been", "it", "its", "he", "she", "him", "her",
    "his", "they", "them", "their", "we", "us", "our", "you", "your", "i", "my", "me", "that",
    "this", "these", "those", "not", "no", "so", "if", "then", "there", "here", "when", "where",
    "who", "what", "which", "up", "down", "out", "into", "over", "under", "all", "any", "some",
];

/// Check whether a word is on the common-word stoplist (case-insensitive).
pub fn is_stopword(word: &str) -> bool {
    let lower = word.to_lowercase();
    STOPLIST.contains(&lower.as_str())
}

/// Accept or reject a raw candidate. Rules, in order, all of which must pass:
/// 1. trimmed length within [3, 50];
/// 2. word count within [1, 4];
/// 3. not every word is a stoplist word;
/// 4. for multi-word candidates, the first and last word must not be
///    stoplisted, unless that word is literally "the";
/// 5. multi-word candidates need at least one word of length >= 4.
pub fn is_valid(candidate: &str) -> bool {
    let trimmed = candidate.trim();
    if trimmed.len() < MIN_LENGTH || trimmed.len() > MAX_LENGTH {
        return false;
    }

    let words: Vec<&str> = trimmed.split_whitespace().collect();
    if words.len() < MIN_WORDS || words.len() > MAX_WORDS {
        return false;
    }

    if words.iter().all(|word| is_stopword(word)) {
        return false;
    }

    if words.len() >= 2 {
        let edge_allowed =
            |word: &str| !is_stopword(word) || word.eq_ignore_ascii_case("the");
        if !edge_allowed(words[0]) || !edge_allowed(words[words.len() - 1]) {
            return false;
        }

        if !words
            .iter()
            .any(|word| word.len() >= SUBSTANTIAL_WORD_LENGTH)
        {
            return false;
        }
    }

    true
}
