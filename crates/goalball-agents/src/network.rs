//! Feed-forward network - the phenotype an evolved genome is turned into.
//!
//! Nodes are evaluated in the stored order. Each node sums its weighted
//! incoming links, applies `bias + response * sum`, then its activation.
//! Input keys are negative (`-1..=-4`), outputs are `0` and `1`; hidden
//! nodes use any other key. A node may only read inputs or nodes listed
//! before it.

use goalball_core::error::{GoalballError, Result};
use goalball_core::policy::Policy;
use goalball_core::types::{ACTION_SIZE, OBSERVATION_SIZE};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Node activation function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    /// Steepened logistic, `1 / (1 + e^(-5z))` with `5z` clamped to ±60.
    Sigmoid,
    Tanh,
    Relu,
    Identity,
    /// Identity clamped to `[-1, 1]`.
    Clamped,
}

impl Activation {
    pub fn apply(&self, z: f64) -> f64 {
        match self {
            Activation::Sigmoid => {
                let z = (5.0 * z).clamp(-60.0, 60.0);
                1.0 / (1.0 + (-z).exp())
            }
            Activation::Tanh => (2.5 * z).clamp(-60.0, 60.0).tanh(),
            Activation::Relu => z.max(0.0),
            Activation::Identity => z,
            Activation::Clamped => z.clamp(-1.0, 1.0),
        }
    }
}

/// A weighted connection into a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub from: i64,
    pub weight: f64,
}

/// Evaluation record for one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeEval {
    pub node: i64,
    pub activation: Activation,
    #[serde(default)]
    pub bias: f64,
    #[serde(default = "default_response")]
    pub response: f64,
    #[serde(default)]
    pub links: Vec<Link>,
}

fn default_response() -> f64 {
    1.0
}

/// A feed-forward network over the 4-element observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedForwardNetwork {
    inputs: Vec<i64>,
    outputs: Vec<i64>,
    nodes: Vec<NodeEval>,
}

impl FeedForwardNetwork {
    /// Input keys in observation order.
    pub fn input_keys() -> Vec<i64> {
        (1..=OBSERVATION_SIZE as i64).map(|k| -k).collect()
    }

    /// Output keys in action order.
    pub fn output_keys() -> Vec<i64> {
        (0..ACTION_SIZE as i64).collect()
    }

    /// Build and validate a network with the standard input/output keys.
    pub fn new(nodes: Vec<NodeEval>) -> Result<Self> {
        let net = Self {
            inputs: Self::input_keys(),
            outputs: Self::output_keys(),
            nodes,
        };
        net.validate()?;
        Ok(net)
    }

    /// Single-layer network: every output reads every input directly.
    ///
    /// `weights[o][i]` connects input `i` to output `o`.
    pub fn direct(
        weights: [[f64; OBSERVATION_SIZE]; ACTION_SIZE],
        biases: [f64; ACTION_SIZE],
        activation: Activation,
    ) -> Self {
        let inputs = Self::input_keys();
        let nodes = Self::output_keys()
            .into_iter()
            .zip(weights.iter().zip(biases))
            .map(|(node, (row, bias))| NodeEval {
                node,
                activation,
                bias,
                response: 1.0,
                links: inputs
                    .iter()
                    .zip(row)
                    .map(|(&from, &weight)| Link { from, weight })
                    .collect(),
            })
            .collect();
        Self {
            inputs,
            outputs: Self::output_keys(),
            nodes,
        }
    }

    /// Check the evaluation order and numeric parameters.
    pub fn validate(&self) -> Result<()> {
        if self.inputs.len() != OBSERVATION_SIZE {
            return Err(GoalballError::malformed_policy(format!(
                "expected {} inputs, found {}",
                OBSERVATION_SIZE,
                self.inputs.len()
            )));
        }
        if self.outputs.len() != ACTION_SIZE {
            return Err(GoalballError::malformed_policy(format!(
                "expected {} outputs, found {}",
                ACTION_SIZE,
                self.outputs.len()
            )));
        }

        let mut known: HashSet<i64> = self.inputs.iter().copied().collect();
        for node in &self.nodes {
            if self.inputs.contains(&node.node) {
                return Err(GoalballError::malformed_policy(format!(
                    "node {} shadows an input",
                    node.node
                )));
            }
            if !node.bias.is_finite() || !node.response.is_finite() {
                return Err(GoalballError::malformed_policy(format!(
                    "node {} has non-finite parameters",
                    node.node
                )));
            }
            for link in &node.links {
                if !known.contains(&link.from) {
                    return Err(GoalballError::malformed_policy(format!(
                        "node {} reads {} before it is evaluated",
                        node.node, link.from
                    )));
                }
                if !link.weight.is_finite() {
                    return Err(GoalballError::malformed_policy(format!(
                        "link {} -> {} has a non-finite weight",
                        link.from, node.node
                    )));
                }
            }
            if !known.insert(node.node) {
                return Err(GoalballError::malformed_policy(format!(
                    "node {} is evaluated twice",
                    node.node
                )));
            }
        }
        Ok(())
    }

    /// Number of evaluated (hidden + output) nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of links across all nodes.
    pub fn link_count(&self) -> usize {
        self.nodes.iter().map(|n| n.links.len()).sum()
    }

    /// Evaluate on one input vector.
    ///
    /// A wrong-length input yields an empty output, which the simulator
    /// rejects as an invalid action. Outputs that no node computes read 0.
    pub fn evaluate(&self, inputs: &[f64]) -> Vec<f64> {
        if inputs.len() != self.inputs.len() {
            return Vec::new();
        }

        let mut values: HashMap<i64, f64> = self
            .inputs
            .iter()
            .copied()
            .zip(inputs.iter().copied())
            .collect();

        for node in &self.nodes {
            let sum: f64 = node
                .links
                .iter()
                .map(|l| values.get(&l.from).copied().unwrap_or(0.0) * l.weight)
                .sum();
            let value = node.activation.apply(node.bias + node.response * sum);
            values.insert(node.node, value);
        }

        self.outputs
            .iter()
            .map(|k| values.get(k).copied().unwrap_or(0.0))
            .collect()
    }
}

impl Policy for FeedForwardNetwork {
    fn activate(&mut self, observation: &[f64]) -> Vec<f64> {
        self.evaluate(observation)
    }
}
