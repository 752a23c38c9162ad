//! Framework - the seam to the external evolutionary optimizer.
//!
//! The optimizer owns the population. For every generation it hands the
//! engine a slice of individuals; the engine builds each one's policy,
//! simulates, and writes one fitness value back into the individual.

use crate::error::Result;
use crate::policy::Policy;
use crate::types::GenomeId;

/// One member of the optimizer's population.
pub trait Individual {
    /// The phenotype built from this individual.
    type Policy: Policy;

    /// Identifier assigned by the optimizer.
    fn id(&self) -> GenomeId;

    /// Build the policy used for this generation's episode.
    fn build_policy(&self) -> Result<Self::Policy>;

    /// Fitness slot owned by the optimizer; written once per generation.
    fn set_fitness(&mut self, fitness: f64);

    /// Last fitness written, if any.
    fn fitness(&self) -> Option<f64>;
}
