//! # Goalball Agents
//!
//! Reference policies for the goalball arena.
//!
//! The engine treats policies as black boxes; these implementations exist
//! so the arena can be exercised and replayed without an external
//! optimizer:
//!
//! - **FeedForwardNetwork** - node-evaluation network, the usual phenotype
//!   of an evolved genome
//! - **ConstantPolicy** - same output every tick
//! - **SeekPolicy** - axis-by-axis waypoint follower
//! - **Candidate** - population member with a fitness slot

pub mod network;
pub mod scripted;
pub mod serialize;
pub mod population;
pub mod prelude;
