//! Policy - the opaque decision function supplied by the optimizer.
//!
//! The engine does not care how a policy is represented or evolved. It
//! hands over a 4-element observation and expects a 2-element action back,
//! each component conventionally in `[0, 1]`.

use crate::error::{GoalballError, Result};
use crate::types::{ACTION_SIZE, OBSERVATION_SIZE};

/// Observation handed to a policy every tick:
/// `(x / width, y / height, goal.x / width, goal.y / height)`.
pub type Observation = [f64; OBSERVATION_SIZE];

/// Maps an observation to an action vector.
pub trait Policy {
    /// Evaluate the policy on one observation.
    fn activate(&mut self, observation: &[f64]) -> Vec<f64>;
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn activate(&mut self, observation: &[f64]) -> Vec<f64> {
        (**self).activate(observation)
    }
}

impl<P: Policy + ?Sized> Policy for &mut P {
    fn activate(&mut self, observation: &[f64]) -> Vec<f64> {
        (**self).activate(observation)
    }
}

/// Adapts a closure over an observation into a policy.
pub struct FnPolicy<F>(pub F);

impl<F> Policy for FnPolicy<F>
where
    F: FnMut(&[f64]) -> Vec<f64>,
{
    fn activate(&mut self, observation: &[f64]) -> Vec<f64> {
        (self.0)(observation)
    }
}

/// A validated policy output, mapped to a bidirectional move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Action {
    /// Raw outputs as returned by the policy.
    pub raw: [f64; ACTION_SIZE],
}

impl Action {
    /// Validate raw policy outputs for the agent at `agent` index.
    ///
    /// Fails fast on a wrong-length vector or non-finite components; the
    /// values themselves are not range-checked.
    pub fn from_outputs(agent: usize, outputs: &[f64]) -> Result<Self> {
        if outputs.len() != ACTION_SIZE {
            return Err(GoalballError::invalid_action(
                agent,
                format!("expected {} outputs, got {}", ACTION_SIZE, outputs.len()),
            ));
        }
        if let Some(bad) = outputs.iter().find(|v| !v.is_finite()) {
            return Err(GoalballError::invalid_action(
                agent,
                format!("non-finite output {}", bad),
            ));
        }
        Ok(Self {
            raw: [outputs[0], outputs[1]],
        })
    }

    /// Bidirectional move `action * 2 - 1` per axis.
    pub fn movement(&self) -> (f64, f64) {
        (self.raw[0] * 2.0 - 1.0, self.raw[1] * 2.0 - 1.0)
    }
}
