//! Error taxonomy for the simulation.

/// Errors that can abort a simulation run.
///
/// Both variants are fatal: the run produces no partial result and the
/// error propagates to the caller unmodified.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    /// A parameter violates its documented constraint.
    ///
    /// Raised by [`SimConfig::validate`](crate::SimConfig::validate) before
    /// any simulation work begins, or at runtime when misconfigured
    /// distribution bounds surface as a non-finite fitness value.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A mean or fitness was requested on a zero-length population.
    ///
    /// Cannot occur with a validated configuration, but checked
    /// defensively wherever a mean is taken.
    #[error("population is empty; mean weight is undefined")]
    EmptyPopulation,
}
