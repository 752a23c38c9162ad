//! Goalball Core Prelude - convenient imports for common usage.
//!
//! ```rust
//! use goalball_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{
    Arena, GenomeId, Outcome, Position, RunId, Terminal, Tick, Zone, ZoneKind,
    ACTION_SIZE, OBSERVATION_SIZE,
};

pub use crate::geometry::{contains, distance};

pub use crate::policy::{Action, FnPolicy, Observation, Policy};

pub use crate::agent::{best_index, AgentState};

pub use crate::framework::Individual;

pub use crate::render::{FrameView, NullSink, RenderSink};

pub use crate::interrupt::{NeverQuit, QuitSignal};

// Re-export error types
pub use crate::error::{ConfigError, GoalballError, PersistenceError, PolicyError, Result};
