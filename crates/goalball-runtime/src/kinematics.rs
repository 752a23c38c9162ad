//! Kinematics - the movement and contact rules shared by training and replay.
//!
//! One call to [`Kinematics::step`] turns an action into a proposed
//! position, measures both zones and reports contact. The caller decides
//! what to do with it: the simulator scores it, replay only watches for
//! contact. On contact the caller keeps the pre-tick position.

use crate::config::{Boundary, EpisodeConfig};
use goalball_core::error::Result;
use goalball_core::geometry::{clamp_axis, contains, distance};
use goalball_core::policy::{Action, Observation};
use goalball_core::types::{Position, ZoneKind};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Result of applying one action to one agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Position after displacement and boundary clamping.
    pub position: Position,
    pub dist_goal: f64,
    pub dist_hazard: f64,
    /// Zone touched at the proposed position. Hazard wins over goal.
    pub contact: Option<ZoneKind>,
}

/// Movement model bound to one configuration.
#[derive(Debug, Clone)]
pub struct Kinematics {
    config: EpisodeConfig,
    rng: SmallRng,
}

impl Kinematics {
    /// Validate `config` and seed the jitter source.
    pub fn new(config: EpisodeConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &EpisodeConfig {
        &self.config
    }

    /// `(x / width, y / height, goal.x / width, goal.y / height)`.
    pub fn observe(&self, position: &Position) -> Observation {
        let arena = &self.config.arena;
        let (x, y) = arena.normalize(position);
        let (gx, gy) = arena.normalize(&self.config.goal.center);
        [x, y, gx, gy]
    }

    /// Displace `from` by `action` and clamp the result into the arena.
    pub fn propose(&mut self, from: &Position, action: &Action) -> Position {
        let (mx, my) = action.movement();
        let scale = self.config.step_scale;
        let mode = self.config.displacement;
        let x = from.x + mode.apply(mx * scale);
        let y = from.y + mode.apply(my * scale);

        let r = self.config.agent_radius;
        let (w, h) = (self.config.arena.width, self.config.arena.height);
        Position::new(self.clamp(x, r, w - r), self.clamp(y, r, h - r))
    }

    fn clamp(&mut self, value: f64, low: f64, high: f64) -> f64 {
        let boundary = self.config.boundary;
        let rng = &mut self.rng;
        clamp_axis(value, low, high, || match boundary {
            // random() is in [0, 1); flip it so the inset is never zero.
            Boundary::Jitter => 1.0 - rng.random::<f64>(),
            Boundary::Inset(d) => d,
        })
    }

    /// Full movement step: propose, measure, detect contact.
    pub fn step(&mut self, from: &Position, action: &Action) -> Step {
        let position = self.propose(from, action);
        let goal = &self.config.goal;
        let hazard = &self.config.hazard;
        let r = self.config.agent_radius;

        let contact = if contains(hazard, &position, r) {
            Some(ZoneKind::Hazard)
        } else if contains(goal, &position, r) {
            Some(ZoneKind::Goal)
        } else {
            None
        };

        Step {
            position,
            dist_goal: distance(&goal.center, &position),
            dist_hazard: distance(&hazard.center, &position),
            contact,
        }
    }
}
