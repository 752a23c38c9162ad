//! Goalball Runtime Prelude - convenient imports for common usage.
//!
//! ```rust
//! use goalball_runtime::prelude::*;
//! ```

// Re-export configuration
pub use crate::config::{Boundary, Displacement, EpisodeConfig, RewardConfig};

// Re-export simulation
pub use crate::kinematics::{Kinematics, Step};
pub use crate::episode::{run_episode, EpisodeHooks, EpisodeReport, Simulator};
pub use crate::replay::{run_demo, DemoReport, Replay};
pub use crate::generation::GenerationDriver;

// Re-export reporting
pub use crate::metrics::{BestEver, GenerationSummary, History};
pub use crate::recorder::{Frame, FrameRecorder};

// Re-export persistence
pub use crate::session::{load_policy, save_policy, PolicyMetadata, SavedPolicy, FORMAT_VERSION};

// Re-export from agents
pub use goalball_agents::prelude::*;
