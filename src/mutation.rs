//! Stochastic perturbation of offspring weights.

use crate::sampling::uniform_float;
use crate::{Population, Weight};
use rand::Rng;

/// Applies mutation to a crop of offspring.
///
/// Each child is considered independently: with probability `odds` its
/// weight is replaced by `round(weight × m)` for a multiplier `m` drawn
/// uniformly from `[lo_mult, hi_mult)`, rounded to the nearest whole gram.
/// Untouched children pass through with their exact original value — no
/// rounding on the unmutated path.
///
/// The output has the same length and order as the input. `odds` must lie
/// in `[0, 1]` and the multiplier bounds must satisfy
/// `lo_mult ≤ hi_mult`, both positive; the runner validates these before
/// the loop starts.
pub fn mutate<R: Rng + ?Sized>(
    children: &[Weight],
    odds: f64,
    lo_mult: f64,
    hi_mult: f64,
    rng: &mut R,
) -> Population {
    debug_assert!((0.0..=1.0).contains(&odds), "mutation odds {odds} outside [0, 1]");
    debug_assert!(lo_mult <= hi_mult, "inverted multiplier range [{lo_mult}, {hi_mult}]");

    children
        .iter()
        .map(|&w| {
            if rng.random_bool(odds) {
                (w * uniform_float(lo_mult, hi_mult, rng)).round()
            } else {
                w
            }
        })
        .collect()
}
