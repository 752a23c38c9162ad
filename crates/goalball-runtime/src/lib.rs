//! # Goalball Runtime
//!
//! Episode simulation, replay and generation-level driving.
//!
//! The runtime owns the arena rules. Policies come in from an optimizer
//! (or from `goalball-agents`), go through one episode, and come back out
//! as one fitness value each. The same movement code replays a saved
//! policy for demonstration.
//!
//! ## Quick Start
//!
//! ```rust
//! use goalball_runtime::prelude::*;
//!
//! let mut policies = vec![ConstantPolicy::idle(), ConstantPolicy::moving(1.0, 1.0)];
//! let fitness = run_episode(
//!     &mut policies,
//!     Zone::default_goal(),
//!     Zone::default_hazard(),
//!     200,
//! )
//! .unwrap();
//!
//! // The diagonal runner hits the lava.
//! assert!(fitness[1] < fitness[0]);
//! ```

pub mod config;
pub mod kinematics;
pub mod reward;
pub mod episode;
pub mod replay;
pub mod generation;
pub mod metrics;
pub mod recorder;
pub mod session;
pub mod prelude;
