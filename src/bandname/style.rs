//! Capitalization styling of accepted candidates.
//!
//! Styling first strips punctuation and collapses whitespace (extraction
//! regexes can match across newlines), then applies one weighted-random
//! capitalization transform. Title case dominates; the three rare styles
//! share the remaining ~1% with none at exactly zero.

use rand::Rng;

use super::weighted::weighted_choice;

/// Characters replaced by spaces before casing. Same set the original
/// corpus texts require: ASCII punctuation plus guillemets and em-dash.
const PUNCTUATION: &str = "\"#$%&'()*+,-/:;<=>@[\\]^_`{|}~.?!«»—";

/// One of the fixed capitalization transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapStyle {
    TitleCase,
    UpperCase,
    LowerCase,
    CamelCase,
}

/// Relative style weights. Title case at 99%, the rest sharing the final
/// percent (camel takes the remainder so no style sits at zero).
const STYLE_WEIGHTS: [(CapStyle, f64); 4] = [
    (CapStyle::TitleCase, 99.0),
    (CapStyle::UpperCase, 0.1),
    (CapStyle::LowerCase, 0.1),
    (CapStyle::CamelCase, 0.8),
];

/// Draw one style with probability proportional to its weight.
pub fn choose_style<R: Rng + ?Sized>(rng: &mut R) -> CapStyle {
    weighted_choice(&STYLE_WEIGHTS, rng)
        .copied()
        .unwrap_or(CapStyle::TitleCase)
}

/// Apply a weighted-random style to a candidate, producing the final name.
pub fn style_name<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    apply(choose_style(rng), text)
}

/// Apply one specific style to a candidate.
pub fn apply(style: CapStyle, text: &str) -> String {
    let cleaned = strip_punctuation(text);
    let words: Vec<&str> = cleaned.split_whitespace().collect();
    match style {
        CapStyle::TitleCase => words
            .iter()
            .map(|word| capitalize(word))
            .collect::<Vec<_>>()
            .join(" "),
        CapStyle::UpperCase => words.join(" ").to_uppercase(),
        CapStyle::LowerCase => words.join(" ").to_lowercase(),
        CapStyle::CamelCase => words.iter().map(|word| capitalize(word)).collect(),
    }
}

/// Replace punctuation characters with spaces; the caller collapses the
/// resulting whitespace via `split_whitespace`.
fn strip_punctuation(text: &str) -> String {
    text.chars()
        .map(|c| if PUNCTUATION.contains(c) { ' ' } else { c })
        .collect()
}

/// Upper-case the first letter, lower-case the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    // ── transforms ──────────────────────────────────────────────────

    #[test]
    fn test_title_case() {
        assert_eq!(apply(CapStyle::TitleCase, "the rugs"), "The Rugs");
        assert_eq!(apply(CapStyle::TitleCase, "RIVERRUN"), "Riverrun");
        assert_eq!(apply(CapStyle::TitleCase, "hOuSe of leaves"), "House Of Leaves");
    }

    #[test]
    fn test_upper_case() {
        assert_eq!(apply(CapStyle::UpperCase, "the rugs"), "THE RUGS");
    }

    #[test]
    fn test_lower_case() {
        assert_eq!(apply(CapStyle::LowerCase, "The Rugs"), "the rugs");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(apply(CapStyle::CamelCase, "the rugs"), "TheRugs");
        assert_eq!(apply(CapStyle::CamelCase, "house of leaves"), "HouseOfLeaves");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(apply(CapStyle::TitleCase, "the\nrugs"), "The Rugs");
        assert_eq!(apply(CapStyle::TitleCase, "the   rugs"), "The Rugs");
    }

    #[test]
    fn test_punctuation_stripped() {
        assert_eq!(apply(CapStyle::TitleCase, "rugs, the"), "Rugs The");
        assert_eq!(apply(CapStyle::TitleCase, "riverrun."), "Riverrun");
    }

    // ── style distribution ──────────────────────────────────────────

    #[test]
    fn test_title_case_dominates() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts: HashMap<CapStyle, usize> = HashMap::new();
        let draws = 20_000;
        for _ in 0..draws {
            *counts.entry(choose_style(&mut rng)).or_default() += 1;
        }

        let title = *counts.get(&CapStyle::TitleCase).unwrap_or(&0) as f64 / draws as f64;
        assert!(title > 0.97, "title_case fraction was {title}");
        for style in [CapStyle::UpperCase, CapStyle::LowerCase, CapStyle::CamelCase] {
            assert!(
                *counts.get(&style).unwrap_or(&0) > 0,
                "{style:?} never drawn in {draws} draws"
            );
        }
    }
}
