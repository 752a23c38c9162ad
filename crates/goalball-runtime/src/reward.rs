//! Reward shaping.
//!
//! Every active tick earns `1 / (dist_goal + 1)`. Entering the hazard costs
//! a one-time penalty; hovering inside the near-hazard band costs a small
//! penalty every tick. Reaching the goal pays a one-time bonus plus the
//! number of ticks left.

use crate::config::RewardConfig;
use crate::kinematics::Step;
use goalball_core::types::{Tick, ZoneKind};

impl RewardConfig {
    /// Per-tick shaping term, always positive.
    pub fn shaping(&self, dist_goal: f64) -> f64 {
        1.0 / (dist_goal + 1.0)
    }

    /// Non-terminal penalty inside the near-hazard band, zero outside it.
    pub fn near_hazard(&self, hazard_radius: f64, dist_hazard: f64) -> f64 {
        if dist_hazard < self.near_hazard_band * hazard_radius {
            -self.near_hazard_penalty / (dist_hazard + 1.0)
        } else {
            0.0
        }
    }

    /// One-time hazard penalty.
    pub fn hazard(&self) -> f64 {
        -self.hazard_penalty
    }

    /// One-time goal bonus for contact at `tick`.
    pub fn goal(&self, tick: Tick, max_steps: Tick) -> f64 {
        let speed = if self.speed_bonus {
            max_steps.saturating_sub(tick) as f64
        } else {
            0.0
        };
        self.goal_bonus + speed
    }

    /// Total fitness change for one agent-tick.
    pub fn score(&self, step: &Step, hazard_radius: f64, tick: Tick, max_steps: Tick) -> f64 {
        let shaping = self.shaping(step.dist_goal);
        match step.contact {
            Some(ZoneKind::Hazard) => shaping + self.hazard(),
            Some(ZoneKind::Goal) => {
                shaping + self.near_hazard(hazard_radius, step.dist_hazard) + self.goal(tick, max_steps)
            }
            None => shaping + self.near_hazard(hazard_radius, step.dist_hazard),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use goalball_core::types::Position;

    fn step(dist_goal: f64, dist_hazard: f64, contact: Option<ZoneKind>) -> Step {
        Step {
            position: Position::new(0.0, 0.0),
            dist_goal,
            dist_hazard,
            contact,
        }
    }

    #[test]
    fn shaping_is_inverse_distance() {
        let rewards = RewardConfig::default();
        assert_relative_eq!(rewards.shaping(0.0), 1.0);
        assert_relative_eq!(rewards.shaping(99.0), 0.01);
    }

    #[test]
    fn near_band_is_exclusive() {
        let rewards = RewardConfig::default();
        assert_relative_eq!(rewards.near_hazard(20.0, 39.0), -1.25);
        assert_eq!(rewards.near_hazard(20.0, 40.0), 0.0);
    }

    #[test]
    fn near_band_grows_toward_the_hazard() {
        let rewards = RewardConfig::default();
        let penalties: Vec<f64> = (30..=39)
            .rev()
            .map(|d| rewards.near_hazard(20.0, d as f64))
            .collect();
        assert!(penalties.iter().all(|p| *p < 0.0));
        for pair in penalties.windows(2) {
            assert!(pair[1] < pair[0], "{} !< {}", pair[1], pair[0]);
        }
    }

    #[test]
    fn goal_bonus_includes_remaining_ticks() {
        let rewards = RewardConfig::default();
        assert_relative_eq!(rewards.goal(114, 200), 586.0);
        assert_relative_eq!(rewards.goal(199, 200), 501.0);

        let no_speed = RewardConfig {
            speed_bonus: false,
            ..RewardConfig::default()
        };
        assert_relative_eq!(no_speed.goal(10, 200), 500.0);
    }

    #[test]
    fn hazard_contact_skips_band_penalty() {
        let rewards = RewardConfig::default();
        let hit = rewards.score(&step(99.0, 10.0, Some(ZoneKind::Hazard)), 20.0, 5, 200);
        assert_relative_eq!(hit, 0.01 - 200.0);

        let near = rewards.score(&step(99.0, 35.0, None), 20.0, 5, 200);
        assert_relative_eq!(near, 0.01 - 50.0 / 36.0);
    }
}
