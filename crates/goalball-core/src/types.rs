//! Shared types used across the arena, the policies and the runtime.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Monotonic tick index inside an episode (0-based).
pub type Tick = u64;

/// Number of values in an observation vector.
pub const OBSERVATION_SIZE: usize = 4;

/// Number of values a policy must return.
pub const ACTION_SIZE: usize = 2;

/// Identifier the external framework assigns to an individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GenomeId(pub u64);

impl std::fmt::Display for GenomeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "genome-{}", self.0)
    }
}

/// Unique identifier for a training run or a saved artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A position in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Rectangular arena `[0, width) × [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

impl Arena {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Centre of the arena, where agents start by default.
    ///
    /// Integer-halved like a screen centre, so an 800×800 arena starts
    /// agents at exactly (400, 400).
    pub fn center(&self) -> Position {
        Position::new((self.width / 2.0).floor(), (self.height / 2.0).floor())
    }

    /// Normalize a point into `[0, 1]` arena coordinates.
    pub fn normalize(&self, p: &Position) -> (f64, f64) {
        (p.x / self.width, p.y / self.height)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(800.0, 800.0)
    }
}

/// A circular zone (goal or hazard).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub center: Position,
    pub radius: f64,
}

impl Zone {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            center: Position::new(x, y),
            radius,
        }
    }

    /// Default goal zone.
    pub fn default_goal() -> Self {
        Self::new(700.0, 700.0, 20.0)
    }

    /// Default hazard ("lava") zone.
    pub fn default_hazard() -> Self {
        Self::new(600.0, 600.0, 20.0)
    }
}

/// Which zone an agent touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    Goal,
    Hazard,
}

/// A terminal event: freezes the agent for the rest of the episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terminal {
    pub zone: ZoneKind,
    pub tick: Tick,
}

/// How a single-agent run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    GoalReached,
    HazardHit,
    Timeout,
    /// The quit signal was raised before the run finished.
    Interrupted,
}

impl From<ZoneKind> for Outcome {
    fn from(zone: ZoneKind) -> Self {
        match zone {
            ZoneKind::Goal => Outcome::GoalReached,
            ZoneKind::Hazard => Outcome::HazardHit,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::GoalReached => write!(f, "goal reached"),
            Outcome::HazardHit => write!(f, "hazard hit"),
            Outcome::Timeout => write!(f, "timeout"),
            Outcome::Interrupted => write!(f, "interrupted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_is_euclidean() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_relative_eq!(a.distance_to(&b), 5.0);
        assert_relative_eq!(b.distance_to(&a), 5.0);
    }

    #[test]
    fn arena_center_matches_screen_center() {
        assert_eq!(Arena::default().center(), Position::new(400.0, 400.0));
        assert_eq!(Arena::new(801.0, 600.0).center(), Position::new(400.0, 300.0));
    }

    #[test]
    fn normalize_maps_into_unit_square() {
        let arena = Arena::default();
        let (x, y) = arena.normalize(&Position::new(700.0, 200.0));
        assert_relative_eq!(x, 0.875);
        assert_relative_eq!(y, 0.25);
    }

    #[test]
    fn outcome_from_zone() {
        assert_eq!(Outcome::from(ZoneKind::Goal), Outcome::GoalReached);
        assert_eq!(Outcome::from(ZoneKind::Hazard), Outcome::HazardHit);
        assert_eq!(Outcome::Timeout.to_string(), "timeout");
    }

    #[test]
    fn genome_id_display() {
        assert_eq!(GenomeId(7).to_string(), "genome-7");
    }
}
