//! Policy serialization for persistence and population files.
//!
//! Each reference policy type has a variant in `SerializedPolicy`, which is
//! itself a `Policy` so a loaded policy can be replayed directly.

use crate::network::FeedForwardNetwork;
use crate::scripted::{ConstantPolicy, SeekPolicy};
use goalball_core::error::Result;
use goalball_core::policy::Policy;
use serde::{Deserialize, Serialize};

/// Enumeration of all policy types for display and dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyKind {
    FeedForward,
    Constant,
    Seek,
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyKind::FeedForward => write!(f, "feed_forward"),
            PolicyKind::Constant => write!(f, "constant"),
            PolicyKind::Seek => write!(f, "seek"),
        }
    }
}

/// Union of all serializable policies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SerializedPolicy {
    FeedForward(FeedForwardNetwork),
    Constant(ConstantPolicy),
    Seek(SeekPolicy),
}

impl SerializedPolicy {
    pub fn kind(&self) -> PolicyKind {
        match self {
            SerializedPolicy::FeedForward(_) => PolicyKind::FeedForward,
            SerializedPolicy::Constant(_) => PolicyKind::Constant,
            SerializedPolicy::Seek(_) => PolicyKind::Seek,
        }
    }

    /// A fresh, validated copy ready for an episode.
    ///
    /// Networks are re-validated (files may be hand-edited) and stateful
    /// scripted policies restart from the beginning.
    pub fn instantiate(&self) -> Result<SerializedPolicy> {
        let mut fresh = self.clone();
        match &mut fresh {
            SerializedPolicy::FeedForward(net) => net.validate()?,
            SerializedPolicy::Seek(seek) => seek.reset(),
            SerializedPolicy::Constant(_) => {}
        }
        Ok(fresh)
    }
}

impl Policy for SerializedPolicy {
    fn activate(&mut self, observation: &[f64]) -> Vec<f64> {
        match self {
            SerializedPolicy::FeedForward(p) => p.activate(observation),
            SerializedPolicy::Constant(p) => p.activate(observation),
            SerializedPolicy::Seek(p) => p.activate(observation),
        }
    }
}

impl From<FeedForwardNetwork> for SerializedPolicy {
    fn from(p: FeedForwardNetwork) -> Self {
        SerializedPolicy::FeedForward(p)
    }
}

impl From<ConstantPolicy> for SerializedPolicy {
    fn from(p: ConstantPolicy) -> Self {
        SerializedPolicy::Constant(p)
    }
}

impl From<SeekPolicy> for SerializedPolicy {
    fn from(p: SeekPolicy) -> Self {
        SerializedPolicy::Seek(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Activation;

    #[test]
    fn policy_kind_display() {
        assert_eq!(PolicyKind::FeedForward.to_string(), "feed_forward");
        assert_eq!(PolicyKind::Constant.to_string(), "constant");
        assert_eq!(PolicyKind::Seek.to_string(), "seek");
    }

    #[test]
    fn tagged_json_restores_network() {
        let net = FeedForwardNetwork::direct(
            [[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0]],
            [0.1, -0.1],
            Activation::Tanh,
        );
        let policy = SerializedPolicy::from(net);

        let json = serde_json::to_string(&policy).unwrap();
        assert!(json.contains("\"kind\":\"feed_forward\""));
        let restored: SerializedPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, policy);
    }

    #[test]
    fn instantiate_resets_seek_progress() {
        let mut seek = SeekPolicy::new(vec![(0.5, 0.5), (0.9, 0.9)]);
        seek.activate(&[0.5, 0.5, 0.0, 0.0]);
        assert_eq!(seek.current(), 1);

        let fresh = SerializedPolicy::from(seek).instantiate().unwrap();
        match fresh {
            SerializedPolicy::Seek(s) => assert_eq!(s.current(), 0),
            other => panic!("unexpected policy {:?}", other.kind()),
        }
    }

    #[test]
    fn constant_dispatch() {
        let mut p = SerializedPolicy::from(ConstantPolicy::new(vec![0.2, 0.8]));
        assert_eq!(p.activate(&[0.0; 4]), vec![0.2, 0.8]);
        assert_eq!(p.kind(), PolicyKind::Constant);
    }
}
