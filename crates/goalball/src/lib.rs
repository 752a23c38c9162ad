//! # Goalball
//!
//! A goal/hazard ball arena for evaluating evolved policies.
//!
//! Every generation a population of balls starts at the centre of an
//! 800×800 arena. Each ball is steered by its own policy, which sees its
//! normalized position and the goal's, and answers with a 2-D move. Balls
//! are rewarded for closing in on the goal, punished for lingering near
//! or falling into the lava, and paid a bonus for reaching the goal early.
//! The resulting fitness is written back to the optimizer's population.
//!
//! ## Quick Start
//!
//! ```rust
//! use goalball::prelude::*;
//!
//! let mut driver = GenerationDriver::new(EpisodeConfig::default().with_seed(1)).unwrap();
//! let mut population = sample_population();
//!
//! let summary = driver.evaluate(&mut population).unwrap();
//! assert_eq!(driver.generation(), 1);
//! assert_eq!(summary.goal_count, 2);
//!
//! // Replay the winner.
//! let best = population
//!     .iter()
//!     .find(|c| Some(c.id) == summary.best_id)
//!     .unwrap();
//! let mut policy = best.policy.instantiate().unwrap();
//! let demo = run_demo(&mut policy, Zone::default_goal(), Zone::default_hazard(), 200).unwrap();
//! assert_eq!(demo.outcome, Outcome::GoalReached);
//! ```
//!
//! ## Architecture
//!
//! - [`goalball_core`] - Shared types, geometry and collaborator traits
//! - [`goalball_agents`] - Reference policies and population members
//! - [`goalball_runtime`] - Simulator, replay, generation driver, persistence
//!
//! ## Rewards
//!
//! | Event | Fitness change | Terminal |
//! |-------|----------------|----------|
//! | Every active tick | `+1 / (dist_goal + 1)` | no |
//! | Within twice the lava radius | `-50 / (dist_lava + 1)` | no |
//! | Touching the lava | `-200` | yes |
//! | Touching the goal at tick `t` | `+500 + (max_steps - t)` | yes |
//!
//! Lava is checked before the goal, so a ball touching both is lost.

// Re-export all subcrates
pub use goalball_core as core;
pub use goalball_runtime as runtime;
pub use goalball_agents as agents;

/// Prelude module for convenient imports.
///
/// ```rust
/// use goalball::prelude::*;
/// ```
pub mod prelude {
    pub use goalball_runtime::prelude::*;
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
