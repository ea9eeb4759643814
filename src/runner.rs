//! The generation loop.
//!
//! [`SimRunner`] orchestrates the full simulation:
//! initialization → evaluation → (selection → breeding → mutation →
//! replacement → re-evaluation) until the goal is met or the generation
//! cap is reached.

use crate::breeding::breed;
use crate::config::SimConfig;
use crate::error::SimError;
use crate::mutation::mutate;
use crate::population::{fitness, mean, populate};
use crate::selection::select;
use crate::Population;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Terminal snapshot of a simulation run.
///
/// Built once, at loop termination; read-only for all callers.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimResult {
    /// Generation 0, exactly as drawn from the triangular distribution.
    pub initial_population: Population,

    /// Fitness of generation 0.
    pub initial_fitness: f64,

    /// The even-normalized number of adults retained each generation.
    pub retained: usize,

    /// Floored mean weight (grams) of every evaluated population.
    ///
    /// Seeded with generation 0's mean, then one entry per completed
    /// generation, so its length is always `generations + 1`.
    pub avg_weight_history: Vec<i64>,

    /// Number of completed generations.
    pub generations: usize,

    /// Elapsed breeding years: `⌊generations / litters_per_year⌋`.
    pub years: usize,
}

/// Executes the generational breeding loop.
///
/// # Usage
///
/// ```
/// use ratsim::{SimConfig, SimRunner};
///
/// let config = SimConfig::default().with_seed(42);
/// let result = SimRunner::run(&config).unwrap();
/// assert_eq!(result.avg_weight_history.len(), result.generations + 1);
/// ```
pub struct SimRunner;

impl SimRunner {
    /// Runs the simulation, building a generator from [`SimConfig::seed`].
    pub fn run(config: &SimConfig) -> Result<SimResult, SimError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::run_with_rng(config, &mut rng)
    }

    /// Runs the simulation with a caller-supplied generator.
    pub fn run_with_rng<R: Rng + ?Sized>(
        config: &SimConfig,
        rng: &mut R,
    ) -> Result<SimResult, SimError> {
        Self::run_with_observer(config, rng, |_, _| {})
    }

    /// Runs the simulation, invoking `observer` once per completed
    /// generation with `(generation index, fitness)`.
    ///
    /// The observer is a reporting hook only — it cannot influence the
    /// run. Any sub-component error (invalid configuration, empty
    /// population) aborts the run and propagates unmodified; no partial
    /// result is produced.
    pub fn run_with_observer<R, F>(
        config: &SimConfig,
        rng: &mut R,
        mut observer: F,
    ) -> Result<SimResult, SimError>
    where
        R: Rng + ?Sized,
        F: FnMut(usize, f64),
    {
        config.validate()?;
        let retained = config.retained();

        let initial_population = populate(
            retained,
            config.init_min,
            config.init_max,
            config.init_mode,
            rng,
        )?;
        let initial_fitness = fitness(&initial_population, config.goal)?;

        let mut population = initial_population.clone();
        let mut avg_weight_history = vec![mean(&population).floor() as i64];
        let mut generations = 0usize;
        let mut fit = initial_fitness;

        while fit < 1.0 && generations < config.generation_limit {
            let (males, females) = select(&population, retained);
            let children = breed(&males, &females, config.litter_size, rng);
            let children = mutate(
                &children,
                config.mutate_odds,
                config.mutate_min,
                config.mutate_max,
                rng,
            );

            // Offspring are additive: retained adults stay in the herd.
            let mut next: Population = males;
            next.extend(females);
            next.extend(children);
            population = next;

            avg_weight_history.push(mean(&population).floor() as i64);
            generations += 1;
            fit = fitness(&population, config.goal)?;

            tracing::debug!(
                generation = generations,
                fitness = fit,
                mean_weight = mean(&population),
                size = population.len(),
                "generation complete"
            );
            observer(generations, fit);
        }

        tracing::info!(
            generations,
            fitness = fit,
            goal_reached = (fit >= 1.0),
            "simulation terminated"
        );

        Ok(SimResult {
            initial_population,
            initial_fitness,
            retained,
            avg_weight_history,
            generations,
            years: generations / config.litters_per_year,
        })
    }
}
