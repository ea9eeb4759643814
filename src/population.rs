//! Population initialization and fitness scoring.

use crate::error::SimError;
use crate::sampling::triangular_dist;
use crate::{Population, Weight};
use rand::Rng;
use rand_distr::Distribution;

/// Builds the starting generation: `count` independent draws from the
/// triangular distribution on `[min, max]` peaked at `mode`.
///
/// Side-effect-free apart from consuming the generator. A `count` of 0
/// yields a degenerate empty population, which [`fitness`] rejects
/// downstream.
pub fn populate<R: Rng + ?Sized>(
    count: usize,
    min: f64,
    max: f64,
    mode: f64,
    rng: &mut R,
) -> Result<Population, SimError> {
    let dist = triangular_dist(min, max, mode)?;
    Ok((0..count).map(|_| dist.sample(rng)).collect())
}

/// Arithmetic mean of `values`.
///
/// Returns NaN for an empty slice; [`fitness`] guards against that before
/// dividing.
pub fn mean(values: &[Weight]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Scores a population against the goal: `mean(population) / goal`.
///
/// A value ≥ 1 means the mean has met or exceeded the goal — the success
/// condition for the generation loop.
///
/// # Errors
///
/// - [`SimError::InvalidConfiguration`] if `goal` is non-positive or
///   non-finite, or if the ratio comes out NaN (weights poisoned by
///   misconfigured distribution bounds). NaN must not reach the loop's
///   `fitness >= 1` check, where it would never terminate the run.
/// - [`SimError::EmptyPopulation`] if `population` is empty.
pub fn fitness(population: &[Weight], goal: f64) -> Result<f64, SimError> {
    if !goal.is_finite() || goal <= 0.0 {
        return Err(SimError::InvalidConfiguration(
            "goal must be positive and finite".to_string(),
        ));
    }
    if population.is_empty() {
        return Err(SimError::EmptyPopulation);
    }
    let ratio = mean(population) / goal;
    if ratio.is_nan() {
        return Err(SimError::InvalidConfiguration(
            "fitness is NaN; population contains non-finite weights".to_string(),
        ));
    }
    Ok(ratio)
}
