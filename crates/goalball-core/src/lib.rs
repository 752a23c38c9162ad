//! # Goalball Core
//!
//! Core types and collaborator traits for the goalball arena.
//!
//! A population of balls starts in the middle of a square arena that holds
//! a goal zone and a hazard ("lava") zone. Each ball is steered by an
//! opaque policy supplied by an external optimizer. This crate defines the
//! pieces every other crate shares:
//!
//! - **Geometry** - distance and zone containment
//! - **Policy** - observation in, action out
//! - **Agent state** - position, scored flag, accumulated fitness
//! - **Individual** - the optimizer's population member and fitness slot
//! - **Render sink** - read-only observer of sampled frames
//! - **Quit signal** - cooperative cancellation
//!
//! ## Quick Start
//!
//! ```rust
//! use goalball_core::prelude::*;
//!
//! let goal = Zone::default_goal();
//! let start = Arena::default().center();
//!
//! assert!(!contains(&goal, &start, 10.0));
//! assert_eq!(start, Position::new(400.0, 400.0));
//! ```

pub mod types;
pub mod geometry;
pub mod policy;
pub mod agent;
pub mod framework;
pub mod render;
pub mod interrupt;
pub mod error;
pub mod prelude;
