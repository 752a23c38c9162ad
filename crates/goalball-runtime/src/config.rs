//! Episode configuration.
//!
//! Every tunable of the arena lives here: geometry, movement model,
//! boundary handling and the reward schedule. Defaults reproduce the
//! classic 800×800 arena with the goal at (700, 700) and the lava at
//! (600, 600).

use goalball_core::error::{GoalballError, Result};
use goalball_core::types::{Arena, Position, Tick, Zone};
use serde::{Deserialize, Serialize};

/// How a continuous move is turned into a displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Displacement {
    /// Round `move * step_scale` to the nearest whole unit.
    #[default]
    Round,
    /// Truncate toward zero.
    Truncate,
    /// Keep the exact value.
    Continuous,
}

impl Displacement {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Displacement::Round => value.round(),
            Displacement::Truncate => value.trunc(),
            Displacement::Continuous => value,
        }
    }
}

/// What happens to a coordinate that leaves `[radius, dimension - radius]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    /// Pull back inside by a random amount in `(0, 1]`.
    #[default]
    Jitter,
    /// Pull back inside by a fixed amount.
    Inset(f64),
}

/// Reward schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    /// One-time bonus for reaching the goal (default: 500).
    pub goal_bonus: f64,
    /// Add `max_steps - tick` on reaching the goal (default: true).
    pub speed_bonus: bool,
    /// One-time penalty for entering the hazard (default: 200).
    pub hazard_penalty: f64,
    /// Numerator of the per-tick near-hazard penalty (default: 50).
    pub near_hazard_penalty: f64,
    /// Near-hazard band, as a multiple of the hazard radius (default: 2.0).
    pub near_hazard_band: f64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            goal_bonus: 500.0,
            speed_bonus: true,
            hazard_penalty: 200.0,
            near_hazard_penalty: 50.0,
            near_hazard_band: 2.0,
        }
    }
}

/// Configuration for one episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpisodeConfig {
    pub arena: Arena,
    pub goal: Zone,
    pub hazard: Zone,
    /// Radius of every ball (default: 10).
    pub agent_radius: f64,
    /// Ticks per episode (default: 200).
    pub max_steps: Tick,
    /// Distance units per tick at full output (default: 5).
    pub step_scale: f64,
    pub displacement: Displacement,
    pub boundary: Boundary,
    /// Start position; the arena centre when absent.
    pub start: Option<Position>,
    /// Seed for boundary jitter; drawn from the OS when absent.
    pub seed: Option<u64>,
    pub rewards: RewardConfig,
}

impl Default for EpisodeConfig {
    fn default() -> Self {
        Self {
            arena: Arena::default(),
            goal: Zone::default_goal(),
            hazard: Zone::default_hazard(),
            agent_radius: 10.0,
            max_steps: 200,
            step_scale: 5.0,
            displacement: Displacement::default(),
            boundary: Boundary::default(),
            start: None,
            seed: None,
            rewards: RewardConfig::default(),
        }
    }
}

impl EpisodeConfig {
    /// Default configuration with the given zones and episode length.
    pub fn with_zones(goal: Zone, hazard: Zone, max_steps: Tick) -> Self {
        Self {
            goal,
            hazard,
            max_steps,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_start(mut self, start: Position) -> Self {
        self.start = Some(start);
        self
    }

    /// Where every agent starts.
    pub fn start_position(&self) -> Position {
        self.start.unwrap_or_else(|| self.arena.center())
    }

    /// Check that the configuration describes a playable arena.
    pub fn validate(&self) -> Result<()> {
        let Arena { width, height } = self.arena;
        for (field, value) in [("arena.width", width), ("arena.height", height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GoalballError::invalid_config(
                    field,
                    value.to_string(),
                    "must be positive",
                ));
            }
        }

        let min_side = width.min(height);
        if !self.agent_radius.is_finite() || self.agent_radius < 0.0 {
            return Err(GoalballError::invalid_config(
                "agent_radius",
                self.agent_radius.to_string(),
                "must be non-negative",
            ));
        }
        // Room for the ball plus one unit of boundary inset on either side.
        let max_radius = (min_side - 1.0) / 2.0;
        if self.agent_radius > max_radius {
            return Err(GoalballError::out_of_range(
                "agent_radius",
                0.0,
                max_radius,
                self.agent_radius,
            ));
        }

        for (field, zone) in [("goal", &self.goal), ("hazard", &self.hazard)] {
            if !zone.radius.is_finite() || zone.radius <= 0.0 {
                return Err(GoalballError::invalid_config(
                    format!("{}.radius", field),
                    zone.radius.to_string(),
                    "must be positive",
                ));
            }
            if !zone.center.x.is_finite() || !zone.center.y.is_finite() {
                return Err(GoalballError::invalid_config(
                    format!("{}.center", field),
                    format!("({}, {})", zone.center.x, zone.center.y),
                    "must be finite",
                ));
            }
        }

        if self.max_steps == 0 {
            return Err(GoalballError::invalid_config(
                "max_steps",
                "0",
                "an episode needs at least one tick",
            ));
        }
        if !self.step_scale.is_finite() || self.step_scale <= 0.0 {
            return Err(GoalballError::invalid_config(
                "step_scale",
                self.step_scale.to_string(),
                "must be positive",
            ));
        }

        if let Boundary::Inset(d) = self.boundary {
            let max_inset = (min_side / 2.0 - self.agent_radius).min(1.0);
            if !d.is_finite() || d <= 0.0 || d > max_inset {
                return Err(GoalballError::out_of_range("boundary.inset", 0.0, max_inset, d));
            }
        }

        let start = self.start_position();
        let r = self.agent_radius;
        if start.x < r || start.x > width - r || start.y < r || start.y > height - r {
            return Err(GoalballError::invalid_config(
                "start",
                format!("({}, {})", start.x, start.y),
                "must lie inside the arena bounds",
            ));
        }

        let rw = &self.rewards;
        for (field, value) in [
            ("rewards.goal_bonus", rw.goal_bonus),
            ("rewards.hazard_penalty", rw.hazard_penalty),
            ("rewards.near_hazard_penalty", rw.near_hazard_penalty),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GoalballError::invalid_config(
                    field,
                    value.to_string(),
                    "must be a non-negative magnitude",
                ));
            }
        }
        if !rw.near_hazard_band.is_finite() || rw.near_hazard_band < 1.0 {
            return Err(GoalballError::invalid_config(
                "rewards.near_hazard_band",
                rw.near_hazard_band.to_string(),
                "must be at least 1 hazard radius",
            ));
        }

        Ok(())
    }
}
