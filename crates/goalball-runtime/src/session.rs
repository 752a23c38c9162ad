//! Policy persistence - save the winner, load it back for replay.
//!
//! A saved policy is a JSON envelope: metadata about where it came from
//! plus the serialized policy itself.

use goalball_agents::serialize::SerializedPolicy;
use goalball_core::error::{GoalballError, PersistenceError, Result};
use goalball_core::types::{GenomeId, RunId};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Envelope format version written by this build.
pub const FORMAT_VERSION: u32 = 1;

/// Metadata stored alongside a saved policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyMetadata {
    pub run_id: RunId,
    pub format_version: u32,
    /// Generation the policy was taken from.
    pub generation: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genome: Option<GenomeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitness: Option<f64>,
}

impl PolicyMetadata {
    pub fn new(run_id: RunId, generation: u64) -> Self {
        Self {
            run_id,
            format_version: FORMAT_VERSION,
            generation,
            genome: None,
            fitness: None,
        }
    }

    pub fn with_genome(mut self, genome: GenomeId, fitness: Option<f64>) -> Self {
        self.genome = Some(genome);
        self.fitness = fitness;
        self
    }
}

/// On-disk form of a saved policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPolicy {
    pub metadata: PolicyMetadata,
    pub policy: SerializedPolicy,
}

/// Write `policy` to `path` as pretty-printed JSON.
///
/// Parent directories are created as needed.
pub fn save_policy(path: &Path, policy: &SerializedPolicy, metadata: PolicyMetadata) -> Result<()> {
    let saved = SavedPolicy {
        metadata,
        policy: policy.clone(),
    };
    let json = serde_json::to_string_pretty(&saved)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            PersistenceError::SaveFailed(format!("{}: {}", parent.display(), e))
        })?;
    }
    std::fs::write(path, json)
        .map_err(|e| PersistenceError::SaveFailed(format!("{}: {}", path.display(), e)))?;

    tracing::debug!(path = %path.display(), kind = %policy.kind(), "Policy saved");
    Ok(())
}

/// Read a saved policy from `path`.
///
/// The policy is validated before it is returned, so a hand-edited file
/// with a broken network fails here rather than mid-replay.
pub fn load_policy(path: &Path) -> Result<SavedPolicy> {
    let json = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            GoalballError::from(PersistenceError::NotFound(path.display().to_string()))
        }
        _ => GoalballError::from(e),
    })?;

    let value: serde_json::Value = serde_json::from_str(&json)
        .map_err(|e| GoalballError::load_failed(format!("{}: {}", path.display(), e)))?;

    // Check the version before the shape, so future formats fail clearly.
    let found = value
        .get("metadata")
        .and_then(|m| m.get("format_version"))
        .and_then(|v| v.as_u64());
    match found {
        Some(v) if v == FORMAT_VERSION as u64 => {}
        Some(v) => {
            return Err(PersistenceError::VersionMismatch {
                expected: FORMAT_VERSION,
                found: u32::try_from(v).unwrap_or(u32::MAX),
            }
            .into())
        }
        None => {
            return Err(GoalballError::load_failed(format!(
                "{}: missing metadata.format_version",
                path.display()
            )))
        }
    }

    let saved: SavedPolicy = serde_json::from_value(value)
        .map_err(|e| GoalballError::load_failed(format!("{}: {}", path.display(), e)))?;
    saved.policy.instantiate()?;
    Ok(saved)
}
