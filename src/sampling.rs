//! Random-sampling primitives.
//!
//! Every stage of the simulation draws through these helpers. All of them
//! take an explicit `&mut impl Rng` so callers control seeding and
//! reproducibility; none touches a global generator.

use crate::error::SimError;
use crate::Weight;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Triangular};

/// Builds a triangular distribution on `[min, max]` peaked at `mode`.
///
/// Parameter errors (inverted bounds, mode outside the range) map to
/// [`SimError::InvalidConfiguration`].
pub fn triangular_dist(min: f64, max: f64, mode: f64) -> Result<Triangular<f64>, SimError> {
    Triangular::new(min, max, mode)
        .map_err(|e| SimError::InvalidConfiguration(format!("triangular distribution: {e}")))
}

/// One draw from the triangular distribution on `[min, max]` peaked at
/// `mode`.
///
/// The result always lies in `[min, max]`.
pub fn triangular<R: Rng + ?Sized>(
    min: f64,
    max: f64,
    mode: f64,
    rng: &mut R,
) -> Result<f64, SimError> {
    Ok(triangular_dist(min, max, mode)?.sample(rng))
}

/// Inclusive uniform integer draw over `[⌈low⌉, ⌊high⌋]`, returned as a
/// [`Weight`].
///
/// Equal bounds return that bound. Callers must guarantee the rounded
/// range is non-empty (`⌈low⌉ ≤ ⌊high⌋`); the breeding stage normalizes
/// its pair bounds before drawing.
///
/// ```
/// use rand::SeedableRng;
/// use ratsim::sampling::uniform_int;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let w = uniform_int(1.0, 10.0, &mut rng);
/// assert!((1.0..=10.0).contains(&w));
/// assert_eq!(w, w.trunc());
/// assert_eq!(uniform_int(1.0, 1.0, &mut rng), 1.0);
/// ```
pub fn uniform_int<R: Rng + ?Sized>(low: f64, high: f64, rng: &mut R) -> Weight {
    let lo = low.ceil() as i64;
    let hi = high.floor() as i64;
    debug_assert!(lo <= hi, "uniform_int called with empty range [{low}, {high}]");
    if lo == hi {
        return lo as Weight;
    }
    rng.random_range(lo..=hi) as Weight
}

/// Uniform draw in `[low, high)`; equal bounds return `low` exactly.
pub fn uniform_float<R: Rng + ?Sized>(low: f64, high: f64, rng: &mut R) -> f64 {
    if low == high {
        return low;
    }
    rng.random_range(low..high)
}

/// Returns a pseudo-random permutation of `values` (Fisher-Yates).
///
/// The caller's slice is left untouched.
pub fn shuffled<R: Rng + ?Sized>(values: &[Weight], rng: &mut R) -> Vec<Weight> {
    let mut out = values.to_vec();
    out.shuffle(rng);
    out
}
