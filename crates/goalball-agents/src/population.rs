//! Population members backed by serialized policies.
//!
//! `Candidate` is the minimal stand-in for an optimizer's genome: an id,
//! a policy description and a fitness slot. It lets the engine be driven
//! from a population file without an external optimizer.

use crate::network::{Activation, FeedForwardNetwork};
use crate::scripted::{ConstantPolicy, SeekPolicy};
use crate::serialize::SerializedPolicy;
use goalball_core::error::Result;
use goalball_core::framework::Individual;
use goalball_core::types::GenomeId;
use serde::{Deserialize, Serialize};

/// One population member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: GenomeId,
    pub policy: SerializedPolicy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitness: Option<f64>,
}

impl Candidate {
    pub fn new(id: u64, policy: impl Into<SerializedPolicy>) -> Self {
        Self {
            id: GenomeId(id),
            policy: policy.into(),
            fitness: None,
        }
    }
}

impl Individual for Candidate {
    type Policy = SerializedPolicy;

    fn id(&self) -> GenomeId {
        self.id
    }

    fn build_policy(&self) -> Result<SerializedPolicy> {
        self.policy.instantiate()
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }

    fn fitness(&self) -> Option<f64> {
        self.fitness
    }
}

/// A small mixed population for trying the engine out.
///
/// Contains an idle ball, a ball running straight at the goal (and so
/// through the hazard), a waypoint seeker that detours around the hazard,
/// and a direct-wired network that chases the goal.
pub fn sample_population() -> Vec<Candidate> {
    vec![
        Candidate::new(1, ConstantPolicy::idle()),
        Candidate::new(2, ConstantPolicy::moving(1.0, 1.0)),
        Candidate::new(3, SeekPolicy::new(vec![(0.875, 0.5), (0.875, 0.875)])),
        Candidate::new(4, SeekPolicy::new(vec![(0.5, 0.875), (0.875, 0.875)])),
        Candidate::new(
            5,
            FeedForwardNetwork::direct(
                [[-4.0, 0.0, 4.0, 0.0], [0.0, -4.0, 0.0, 4.0]],
                [0.0, 0.0],
                Activation::Sigmoid,
            ),
        ),
    ]
}
