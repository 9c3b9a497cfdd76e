//! Candidate extraction: one pattern, one linear scan, one uniform draw.

use rand::Rng;
use rand::seq::IndexedRandom;

use super::corpus::Corpus;
use super::patterns::PatternSpec;
use super::types::Candidate;

/// Find all non-overlapping matches of the pattern in the corpus and pick
/// one uniformly at random.
///
/// Returns `None` when the pattern has no match, an ordinary loop-continue
/// outcome for the orchestrator rather than an error. The match text keeps
/// its original corpus casing.
pub fn extract<R: Rng + ?Sized>(
    corpus: &Corpus,
    spec: &PatternSpec,
    rng: &mut R,
) -> Option<Candidate> {
    let matches: Vec<&str> = spec
        .regex()
        .find_iter(corpus.text())
        .map(|m| m.as_str())
        .collect();

    matches.choose(rng).map(|text| Candidate {
        text: (*text).to_string(),
        pattern: spec.id,
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::super::patterns::PatternId;
    use super::*;

    #[test]
    fn test_no_match_returns_none() {
        let corpus = Corpus::from_text("ab cd");
        let spec = PatternSpec::new(PatternId::SingleWord, 1.0);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(extract(&corpus, &spec, &mut rng), None);
    }

    #[test]
    fn test_single_match_is_returned() {
        let corpus = Corpus::from_text("the cat sat on the mat the rugs are red");
        let spec = PatternSpec::new(PatternId::ThePlural, 1.0);
        let mut rng = StdRng::seed_from_u64(1);
        let candidate = extract(&corpus, &spec, &mut rng).unwrap();
        assert_eq!(candidate.text, "the rugs");
        assert_eq!(candidate.pattern, PatternId::ThePlural);
    }

    #[test]
    fn test_match_keeps_original_casing() {
        let corpus = Corpus::from_text("and then The Liffeys ran on");
        let spec = PatternSpec::new(PatternId::ThePlural, 1.0);
        let mut rng = StdRng::seed_from_u64(1);
        let candidate = extract(&corpus, &spec, &mut rng).unwrap();
        assert_eq!(candidate.text, "The Liffeys");
    }

    #[test]
    fn test_draw_is_among_matches() {
        let corpus = Corpus::from_text("alpha bravo charlie delta echo");
        let spec = PatternSpec::new(PatternId::SingleWord, 1.0);
        let mut rng = StdRng::seed_from_u64(9);
        let words = ["alpha", "bravo", "charlie", "delta", "echo"];
        for _ in 0..50 {
            let candidate = extract(&corpus, &spec, &mut rng).unwrap();
            assert!(words.contains(&candidate.text.as_str()));
        }
    }

    #[test]
    fn test_all_matches_reachable() {
        let corpus = Corpus::from_text("alpha bravo charlie");
        let spec = PatternSpec::new(PatternId::SingleWord, 1.0);
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(extract(&corpus, &spec, &mut rng).unwrap().text);
        }
        assert_eq!(seen.len(), 3, "seen: {seen:?}");
    }
}
