//! Error types for goalball operations.
//!
//! Every failure is either a hard error surfaced through these types or a
//! clean early termination (zone hit, timeout, quit signal) that is not an
//! error at all.

use thiserror::Error;

/// Result type for goalball operations.
pub type Result<T> = std::result::Result<T, GoalballError>;

/// Errors that can occur while simulating or persisting policies.
#[derive(Debug, Clone, Error)]
pub enum GoalballError {
    /// Policy-related errors.
    #[error("Policy error: {0}")]
    Policy(#[from] PolicyError),
    /// Configuration errors.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// Persisted policy errors.
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
    /// I/O errors (wrapped).
    #[error("I/O error: {0}")]
    Io(String),
    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for GoalballError {
    fn from(e: std::io::Error) -> Self {
        GoalballError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for GoalballError {
    fn from(e: serde_json::Error) -> Self {
        GoalballError::Serialization(e.to_string())
    }
}

/// Policy-related errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolicyError {
    /// The policy returned something that is not a 2-D finite action.
    #[error("Invalid action from agent {agent}: {reason}")]
    InvalidAction { agent: usize, reason: String },
    /// The policy could not be built from its description.
    #[error("Malformed policy: {0}")]
    Malformed(String),
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Invalid value.
    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
    /// Out of range.
    #[error("{field} out of range: {value} (must be {min}-{max})")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
    /// The generation budget is used up.
    #[error("Generation budget exhausted after {0} generations")]
    GenerationsExhausted(u64),
}

/// Errors loading or saving a persisted policy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PersistenceError {
    /// Policy file not found.
    #[error("Policy file not found: {0}")]
    NotFound(String),
    /// Policy file could not be decoded.
    #[error("Policy file corrupt: {0}")]
    Corrupt(String),
    /// Version mismatch.
    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
    /// Save failed.
    #[error("Save failed: {0}")]
    SaveFailed(String),
}

// Convenience constructors
impl GoalballError {
    pub fn invalid_action(agent: usize, reason: impl Into<String>) -> Self {
        GoalballError::Policy(PolicyError::InvalidAction {
            agent,
            reason: reason.into(),
        })
    }

    pub fn malformed_policy(reason: impl Into<String>) -> Self {
        GoalballError::Policy(PolicyError::Malformed(reason.into()))
    }

    pub fn invalid_config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        GoalballError::Config(ConfigError::InvalidValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }

    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, value: f64) -> Self {
        GoalballError::Config(ConfigError::OutOfRange {
            field: field.into(),
            min,
            max,
            value,
        })
    }

    pub fn load_failed(reason: impl Into<String>) -> Self {
        GoalballError::Persistence(PersistenceError::Corrupt(reason.into()))
    }

    /// Whether this is an invalid-action failure from a policy.
    pub fn is_invalid_action(&self) -> bool {
        matches!(self, GoalballError::Policy(PolicyError::InvalidAction { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_action_display_names_agent() {
        let e = GoalballError::invalid_action(3, "expected 2 outputs, got 1");
        assert_eq!(
            e.to_string(),
            "Policy error: Invalid action from agent 3: expected 2 outputs, got 1"
        );
        assert!(e.is_invalid_action());
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e: GoalballError = io.into();
        assert!(matches!(e, GoalballError::Io(_)));
    }

    #[test]
    fn out_of_range_display() {
        let e = GoalballError::out_of_range("agent_radius", 0.0, 100.0, 150.0);
        assert_eq!(
            e.to_string(),
            "Config error: agent_radius out of range: 150 (must be 0-100)"
        );
    }
}
