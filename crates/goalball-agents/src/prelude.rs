//! Goalball Agents Prelude - convenient imports for common usage.
//!
//! ```rust
//! use goalball_agents::prelude::*;
//! ```

// Re-export policy types
pub use crate::network::{Activation, FeedForwardNetwork, Link, NodeEval};
pub use crate::scripted::{ConstantPolicy, SeekPolicy};
pub use crate::serialize::{PolicyKind, SerializedPolicy};
pub use crate::population::{sample_population, Candidate};

// Re-export from core
pub use goalball_core::prelude::*;
