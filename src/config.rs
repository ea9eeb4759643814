//! Simulation configuration.
//!
//! [`SimConfig`] holds all parameters that control a breeding run.

use crate::error::SimError;

/// Configuration for a selective-breeding run.
///
/// Immutable once built: the runner never mutates a caller's config. The
/// one derived quantity — the even-normalized retention count — is exposed
/// through [`retained`](SimConfig::retained) rather than written back.
///
/// # Defaults
///
/// The default is the standard documented run: 20 breeding adults, a
/// 50 kg goal, initial weights drawn from a triangular distribution on
/// [200, 600] grams peaked at 300.
///
/// ```
/// use ratsim::SimConfig;
///
/// let config = SimConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.generation_limit, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use ratsim::SimConfig;
///
/// let config = SimConfig::default()
///     .with_goal(10_000.0)
///     .with_litter_size(6)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of adults retained as breeding stock each generation.
    ///
    /// Must be at least 2. Odd values are normalized up to the next even
    /// number at run start so the sex pools split evenly; see
    /// [`retained`](SimConfig::retained).
    pub population_size: usize,

    /// Target mean weight in grams. Fitness is `mean / goal`.
    pub goal: f64,

    /// Lower bound of the generation-0 triangular distribution, grams.
    pub init_min: f64,

    /// Upper bound of the generation-0 triangular distribution, grams.
    pub init_max: f64,

    /// Peak of the generation-0 triangular distribution, grams.
    ///
    /// Must lie within `[init_min, init_max]`.
    pub init_mode: f64,

    /// Per-offspring mutation probability (0.0–1.0).
    pub mutate_odds: f64,

    /// Lower bound of the mutation multiplier.
    pub mutate_min: f64,

    /// Upper bound of the mutation multiplier.
    ///
    /// A mutated weight becomes `round(weight × m)` for a uniform draw
    /// `m ∈ [mutate_min, mutate_max)`.
    pub mutate_max: f64,

    /// Offspring produced per breeding pair per generation.
    pub litter_size: usize,

    /// Generations per year, used to derive the year count in the result.
    pub litters_per_year: usize,

    /// Hard cap on generations before the run stops regardless of fitness.
    pub generation_limit: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            goal: 50_000.0,
            init_min: 200.0,
            init_max: 600.0,
            init_mode: 300.0,
            mutate_odds: 0.01,
            mutate_min: 0.5,
            mutate_max: 1.2,
            litter_size: 8,
            litters_per_year: 10,
            generation_limit: 500,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Sets the breeding population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the target mean weight in grams.
    pub fn with_goal(mut self, goal: f64) -> Self {
        self.goal = goal;
        self
    }

    /// Sets the triangular-distribution parameters for generation 0.
    pub fn with_init_distribution(mut self, min: f64, max: f64, mode: f64) -> Self {
        self.init_min = min;
        self.init_max = max;
        self.init_mode = mode;
        self
    }

    /// Sets the per-offspring mutation probability.
    pub fn with_mutate_odds(mut self, odds: f64) -> Self {
        self.mutate_odds = odds.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation multiplier bounds.
    pub fn with_mutate_range(mut self, min: f64, max: f64) -> Self {
        self.mutate_min = min;
        self.mutate_max = max;
        self
    }

    /// Sets the litter size.
    pub fn with_litter_size(mut self, n: usize) -> Self {
        self.litter_size = n;
        self
    }

    /// Sets the litters-per-year conversion factor.
    pub fn with_litters_per_year(mut self, n: usize) -> Self {
        self.litters_per_year = n;
        self
    }

    /// Sets the hard cap on generations.
    pub fn with_generation_limit(mut self, n: usize) -> Self {
        self.generation_limit = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The effective retention count: `population_size` normalized up to
    /// the next even number.
    ///
    /// Derived, never written back, so the caller's config stays intact.
    ///
    /// ```
    /// use ratsim::SimConfig;
    ///
    /// assert_eq!(SimConfig::default().with_population_size(21).retained(), 22);
    /// assert_eq!(SimConfig::default().with_population_size(20).retained(), 20);
    /// ```
    pub fn retained(&self) -> usize {
        if self.population_size % 2 == 1 {
            self.population_size + 1
        } else {
            self.population_size
        }
    }

    /// Validates the configuration.
    ///
    /// Returns [`SimError::InvalidConfiguration`] describing the first
    /// violated constraint. Called by the runner before any simulation
    /// work begins.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.population_size < 2 {
            return Err(invalid("population_size must be at least 2"));
        }
        if !self.goal.is_finite() || self.goal <= 0.0 {
            return Err(invalid("goal must be positive and finite"));
        }
        if !(self.init_min.is_finite() && self.init_max.is_finite() && self.init_mode.is_finite())
        {
            return Err(invalid("initial distribution bounds must be finite"));
        }
        if self.init_min <= 0.0 {
            return Err(invalid("initial distribution bounds must be positive"));
        }
        if self.init_min > self.init_max {
            return Err(invalid("init_min must not exceed init_max"));
        }
        if self.init_mode < self.init_min || self.init_mode > self.init_max {
            return Err(invalid("init_mode must lie within [init_min, init_max]"));
        }
        if !(0.0..=1.0).contains(&self.mutate_odds) {
            return Err(invalid("mutate_odds must lie within [0, 1]"));
        }
        if self.mutate_min <= 0.0 {
            return Err(invalid("mutation multiplier bounds must be positive"));
        }
        if self.mutate_min > self.mutate_max {
            return Err(invalid("mutate_min must not exceed mutate_max"));
        }
        if self.litter_size < 1 {
            return Err(invalid("litter_size must be at least 1"));
        }
        if self.litters_per_year < 1 {
            return Err(invalid("litters_per_year must be at least 1"));
        }
        if self.generation_limit < 1 {
            return Err(invalid("generation_limit must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> SimError {
    SimError::InvalidConfiguration(msg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.population_size, 20);
        assert!((config.goal - 50_000.0).abs() < 1e-10);
        assert!((config.init_min - 200.0).abs() < 1e-10);
        assert!((config.init_max - 600.0).abs() < 1e-10);
        assert!((config.init_mode - 300.0).abs() < 1e-10);
        assert!((config.mutate_odds - 0.01).abs() < 1e-10);
        assert!((config.mutate_min - 0.5).abs() < 1e-10);
        assert!((config.mutate_max - 1.2).abs() < 1e-10);
        assert_eq!(config.litter_size, 8);
        assert_eq!(config.litters_per_year, 10);
        assert_eq!(config.generation_limit, 500);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_default_validates() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SimConfig::default()
            .with_population_size(40)
            .with_goal(10_000.0)
            .with_init_distribution(100.0, 500.0, 250.0)
            .with_mutate_odds(0.05)
            .with_mutate_range(0.8, 1.1)
            .with_litter_size(4)
            .with_litters_per_year(12)
            .with_generation_limit(200)
            .with_seed(42);

        assert_eq!(config.population_size, 40);
        assert!((config.goal - 10_000.0).abs() < 1e-10);
        assert!((config.init_mode - 250.0).abs() < 1e-10);
        assert!((config.mutate_odds - 0.05).abs() < 1e-10);
        assert_eq!(config.litter_size, 4);
        assert_eq!(config.litters_per_year, 12);
        assert_eq!(config.generation_limit, 200);
        assert_eq!(config.seed, Some(42));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_retained_normalizes_odd_to_even() {
        assert_eq!(SimConfig::default().with_population_size(21).retained(), 22);
        assert_eq!(SimConfig::default().with_population_size(20).retained(), 20);
        assert_eq!(SimConfig::default().with_population_size(3).retained(), 4);
    }

    #[test]
    fn test_retained_does_not_mutate_config() {
        let config = SimConfig::default().with_population_size(21);
        let _ = config.retained();
        assert_eq!(config.population_size, 21);
    }

    #[test]
    fn test_clamp_mutate_odds() {
        let config = SimConfig::default().with_mutate_odds(1.5);
        assert!((config.mutate_odds - 1.0).abs() < 1e-10);
        let config = SimConfig::default().with_mutate_odds(-0.5);
        assert!(config.mutate_odds.abs() < 1e-10);
    }

    // ---- Validation failures ----

    #[test]
    fn test_validate_population_too_small() {
        let config = SimConfig::default().with_population_size(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_nonpositive_goal() {
        assert!(SimConfig::default().with_goal(0.0).validate().is_err());
        assert!(SimConfig::default().with_goal(-1.0).validate().is_err());
        assert!(SimConfig::default().with_goal(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_validate_inverted_init_bounds() {
        let config = SimConfig::default().with_init_distribution(600.0, 200.0, 300.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_mode_outside_bounds() {
        let config = SimConfig::default().with_init_distribution(200.0, 600.0, 700.0);
        assert!(config.validate().is_err());
        let config = SimConfig::default().with_init_distribution(200.0, 600.0, 100.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_nonpositive_init_min() {
        let config = SimConfig::default().with_init_distribution(0.0, 600.0, 300.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_inverted_mutate_range() {
        let config = SimConfig::default().with_mutate_range(1.2, 0.5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_nonpositive_mutate_min() {
        let config = SimConfig::default().with_mutate_range(0.0, 1.2);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_litter_size() {
        let config = SimConfig::default().with_litter_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_litters_per_year() {
        let config = SimConfig::default().with_litters_per_year(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_generation_limit() {
        let config = SimConfig::default().with_generation_limit(0);
        assert!(config.validate().is_err());
    }
}
