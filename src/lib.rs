//! Generational genetic-algorithm simulation of selective breeding.
//!
//! Models artificial selection on a single trait (body weight, in grams):
//! a population is seeded from a triangular distribution, then repeatedly
//! selected, bred, and mutated until its mean weight reaches a target goal
//! or a generation cap is hit.
//!
//! # Pipeline
//!
//! - [`populate`]: seed generation 0 from a triangular distribution
//! - [`fitness`]: score a population as `mean / goal` (≥ 1 means success)
//! - [`select`]: rank by weight and retain the heaviest of each sex pool
//! - [`breed`]: pair the retained adults and produce litters
//! - [`mutate`]: stochastically perturb offspring weights
//! - [`SimRunner`]: the loop tying the stages together, producing a
//!   [`SimResult`]
//!
//! # Key Types
//!
//! - [`SimConfig`]: simulation parameters (goal, distribution bounds,
//!   mutation odds, litter size, generation cap, seed)
//! - [`SimResult`]: terminal snapshot with the mean-weight history
//! - [`SimError`]: configuration and empty-population failures
//!
//! # Randomness
//!
//! Every sampling-dependent function takes an explicit `&mut impl Rng`, so
//! runs are reproducible with a seeded generator. [`SimRunner::run`] builds
//! its own generator from [`SimConfig::seed`].
//!
//! ```
//! use ratsim::{SimConfig, SimRunner};
//!
//! let config = SimConfig::default().with_seed(7);
//! let result = SimRunner::run(&config).unwrap();
//! assert!(result.generations <= config.generation_limit);
//! ```

mod breeding;
mod config;
mod error;
mod mutation;
mod population;
mod runner;
pub mod sampling;
mod selection;

pub use breeding::breed;
pub use config::SimConfig;
pub use error::SimError;
pub use mutation::mutate;
pub use population::{fitness, mean, populate};
pub use runner::{SimResult, SimRunner};
pub use selection::select;

/// An individual's body weight in grams.
///
/// Non-negative in practice but never clamped.
pub type Weight = f64;

/// An ordered collection of weights.
///
/// Order carries no meaning; only membership and count matter.
pub type Population = Vec<Weight>;
