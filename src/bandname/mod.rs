//! Band name generation pipeline.
//!
//! Produces names by mining a literary corpus with a five-stage pipeline:
//! 1. Weighted pattern selection from the fixed catalog
//! 2. Regex extraction of a random matching substring
//! 3. Quality validation (length, word count, stoplist rules)
//! 4. Weighted-random capitalization styling
//! 5. Duplicate lookup against the known-band registry
//!
//! Stages 1–3 repeat up to [`MAX_ATTEMPTS`] times; the first accepted
//! candidate is styled and returned.

mod corpus;
mod extract;
mod generator;
mod patterns;
mod registry;
mod style;
mod types;
mod validate;
mod weighted;

pub use corpus::Corpus;
pub use generator::{Generator, MAX_ATTEMPTS};
pub use patterns::{PatternCatalog, PatternId, PatternSpec};
pub use registry::KnownBandSet;
pub use style::{CapStyle, apply as apply_style, choose_style, style_name};
pub use types::{Candidate, GenerationResult};
pub use validate::{is_stopword, is_valid};
pub use weighted::weighted_choice;
