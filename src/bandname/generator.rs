//! Generation orchestrator.
//!
//! Ties the pipeline together: select a pattern, extract a candidate,
//! validate it, style the first acceptable one, and flag duplicates. Each
//! attempt walks an explicit Selecting → Extracting → Validating state
//! machine; pattern misses and validation rejects end the attempt and the
//! retry loop continues up to the fixed cap. Exhausting the cap is surfaced
//! as an error, never papered over with a fallback name.

use rand::Rng;

use super::corpus::Corpus;
use super::extract::extract;
use super::patterns::{PatternCatalog, PatternSpec};
use super::registry::KnownBandSet;
use super::style::style_name;
use super::types::{Candidate, GenerationResult};
use super::validate::is_valid;
use crate::error::{BandsmithError, Result};

/// Upper bound on extraction attempts per `generate` call. Also the
/// worst-case work bound: at most this many regex scans per request.
pub const MAX_ATTEMPTS: u32 = 10;

/// States of one extraction attempt.
enum Attempt<'a> {
    Selecting,
    Extracting(&'a PatternSpec),
    Validating(Candidate),
}

/// The immutable generation context: corpus, pattern catalog, and known-band
/// set, built once by the hosting process. All methods take `&self`; the
/// context is safe for unsynchronized concurrent use.
#[derive(Debug, Clone)]
pub struct Generator {
    corpus: Corpus,
    catalog: PatternCatalog,
    known_bands: KnownBandSet,
}

impl Generator {
    /// Build a generator with the standard pattern catalog.
    pub fn new(corpus: Corpus, known_bands: KnownBandSet) -> Generator {
        Generator::with_catalog(corpus, PatternCatalog::standard(), known_bands)
    }

    /// Build a generator with a custom catalog (tests force single-pattern
    /// catalogs this way).
    pub fn with_catalog(
        corpus: Corpus,
        catalog: PatternCatalog,
        known_bands: KnownBandSet,
    ) -> Generator {
        Generator {
            corpus,
            catalog,
            known_bands,
        }
    }

    /// Produce one styled band name plus its duplicate flag.
    ///
    /// Returns `Exhausted` after `MAX_ATTEMPTS` attempts without an
    /// acceptable candidate; the caller decides whether to retry or surface
    /// the failure.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GenerationResult> {
        for _ in 0..MAX_ATTEMPTS {
            let Some(candidate) = self.attempt(rng) else {
                continue;
            };
            let name = style_name(&candidate.text, rng);
            let is_duplicate = self.known_bands.contains(&name);
            return Ok(GenerationResult { name, is_duplicate });
        }
        Err(BandsmithError::Exhausted {
            attempts: MAX_ATTEMPTS,
        })
    }

    /// Case-insensitive duplicate check, exposed independently so callers
    /// can re-check previously generated or shared names.
    pub fn is_duplicate(&self, name: &str) -> bool {
        self.known_bands.contains(name)
    }

    /// Run one attempt through the state machine. `None` means the attempt
    /// ended without an accepted candidate (pattern miss or validation
    /// reject); the caller loop-continues.
    fn attempt<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Candidate> {
        let mut state = Attempt::Selecting;
        loop {
            state = match state {
                Attempt::Selecting => Attempt::Extracting(self.catalog.choose(rng)?),
                Attempt::Extracting(spec) => {
                    Attempt::Validating(extract(&self.corpus, spec, rng)?)
                }
                Attempt::Validating(candidate) => {
                    return is_valid(&candidate.text).then_some(candidate);
                }
            };
        }
    }
}
