//! Agent state - one ball inside one episode.
//!
//! An agent is created at episode start, mutated every tick until it
//! scores or the episode ends, and then discarded. The next episode builds
//! fresh agents for the next generation's policies.

use crate::types::*;
use serde::{Deserialize, Serialize};

/// Per-agent mutable simulation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentState {
    pub position: Position,
    /// Set once the agent reached the goal or entered the hazard.
    pub scored: bool,
    /// Fitness accumulated so far this episode.
    pub fitness: f64,
    /// The terminal event that froze this agent, if any.
    pub terminal: Option<Terminal>,
}

impl AgentState {
    /// A fresh agent at `start` with zero fitness.
    pub fn new(start: Position) -> Self {
        Self {
            position: start,
            scored: false,
            fitness: 0.0,
            terminal: None,
        }
    }

    /// Whether the agent still receives updates.
    pub fn is_active(&self) -> bool {
        !self.scored
    }

    /// Freeze the agent after a terminal event.
    pub fn freeze(&mut self, zone: ZoneKind, tick: Tick) {
        self.scored = true;
        self.terminal = Some(Terminal { zone, tick });
    }

    pub fn reached_goal(&self) -> bool {
        matches!(self.terminal, Some(Terminal { zone: ZoneKind::Goal, .. }))
    }

    pub fn hit_hazard(&self) -> bool {
        matches!(self.terminal, Some(Terminal { zone: ZoneKind::Hazard, .. }))
    }
}

/// Index of the agent with the highest fitness (first one on ties).
pub fn best_index(fitness: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &f) in fitness.iter().enumerate() {
        match best {
            Some((_, b)) if f <= b => {}
            _ => best = Some((i, f)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_agent_is_active() {
        let a = AgentState::new(Position::new(400.0, 400.0));
        assert!(a.is_active());
        assert_eq!(a.fitness, 0.0);
        assert!(a.terminal.is_none());
    }

    #[test]
    fn freeze_records_terminal() {
        let mut a = AgentState::new(Position::new(0.0, 0.0));
        a.freeze(ZoneKind::Hazard, 12);
        assert!(!a.is_active());
        assert!(a.hit_hazard());
        assert!(!a.reached_goal());
        assert_eq!(a.terminal.map(|t| t.tick), Some(12));
    }

    #[test]
    fn best_index_prefers_first_maximum() {
        assert_eq!(best_index(&[1.0, 3.0, 3.0, -2.0]), Some(1));
        assert_eq!(best_index(&[-5.0, -7.0]), Some(0));
        assert_eq!(best_index(&[]), None);
    }
}
