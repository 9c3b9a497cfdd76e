//! Weighted random choice over (item, weight) pairs.
//!
//! A pure utility: the caller injects the random source, so tests can pass
//! a seeded rng and get deterministic draws. Weights need not sum to any
//! particular total; they are normalized by the sampler.

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

/// Pick one item with probability proportional to its weight.
///
/// Returns `None` when the pairs are empty or the weights are unusable
/// (all zero, or any negative). Zero-weight items are never selected.
pub fn weighted_choice<'a, T, R: Rng + ?Sized>(
    pairs: &'a [(T, f64)],
    rng: &mut R,
) -> Option<&'a T> {
    let index = WeightedIndex::new(pairs.iter().map(|(_, weight)| *weight)).ok()?;
    Some(&pairs[index.sample(rng)].0)
}
