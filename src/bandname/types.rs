//! Core types shared across the generation pipeline.

use serde::Serialize;

use super::patterns::PatternId;

/// A raw substring extracted from the corpus, before validation and styling.
///
/// Transient: lives only within one generation attempt. The text keeps the
/// original corpus casing; the styler normalizes it later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The extracted text, exactly as it appears in the corpus.
    pub text: String,
    /// The pattern that produced this candidate.
    pub pattern: PatternId,
}

/// The outcome of one successful generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    /// The styled band name.
    pub name: String,
    /// Whether the name collides (case-insensitively) with a known band.
    pub is_duplicate: bool,
}
