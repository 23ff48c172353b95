//! Explicit seeded shuffle for randomized presentation.
//!
//! Randomization is never hidden inside a sort comparator (a comparator that
//! consults a random source breaks sort stability and reproducibility).
//! Callers that want a rotating selection - daily picks, product of the day -
//! shuffle with an explicit seed *before* sorting, so the same seed always
//! yields the same order.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::types::Product;

/// Shuffle products deterministically from a seed.
pub fn seeded_shuffle(products: &mut [Product], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    products.shuffle(&mut rng);
}
