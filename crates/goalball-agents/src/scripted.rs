//! Scripted policies - hand-written controllers for baselines and demos.

use goalball_core::policy::Policy;
use serde::{Deserialize, Serialize};

/// Returns the same outputs every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantPolicy {
    pub outputs: Vec<f64>,
}

impl ConstantPolicy {
    pub fn new(outputs: Vec<f64>) -> Self {
        Self { outputs }
    }

    /// Outputs `(0.5, 0.5)`, which maps to zero movement.
    pub fn idle() -> Self {
        Self::new(vec![0.5, 0.5])
    }

    /// Constant move with components in `[-1, 1]`.
    pub fn moving(dx: f64, dy: f64) -> Self {
        Self::new(vec![(dx + 1.0) / 2.0, (dy + 1.0) / 2.0])
    }
}

impl Policy for ConstantPolicy {
    fn activate(&mut self, _observation: &[f64]) -> Vec<f64> {
        self.outputs.clone()
    }
}

/// Steers axis by axis through a list of waypoints.
///
/// Waypoints are in normalized arena coordinates, the same frame as the
/// first two observation values. Each axis pushes at full speed toward the
/// current waypoint until it is within `tolerance`; once both axes are
/// within tolerance the next waypoint becomes current. After the last one
/// the policy holds still.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeekPolicy {
    pub waypoints: Vec<(f64, f64)>,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(skip)]
    current: usize,
}

fn default_tolerance() -> f64 {
    0.004
}

impl SeekPolicy {
    pub fn new(waypoints: Vec<(f64, f64)>) -> Self {
        Self {
            waypoints,
            tolerance: default_tolerance(),
            current: 0,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Index of the waypoint currently steered toward.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Restart from the first waypoint.
    pub fn reset(&mut self) {
        self.current = 0;
    }

    fn axis(&self, delta: f64) -> f64 {
        if delta > self.tolerance {
            1.0
        } else if delta < -self.tolerance {
            0.0
        } else {
            0.5
        }
    }
}

impl Policy for SeekPolicy {
    fn activate(&mut self, observation: &[f64]) -> Vec<f64> {
        if observation.len() < 2 {
            return Vec::new();
        }
        let (x, y) = (observation[0], observation[1]);

        while let Some(&(tx, ty)) = self.waypoints.get(self.current) {
            let (dx, dy) = (tx - x, ty - y);
            if dx.abs() <= self.tolerance && dy.abs() <= self.tolerance {
                self.current += 1;
                continue;
            }
            return vec![self.axis(dx), self.axis(dy)];
        }
        vec![0.5, 0.5]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_moving_maps_back_to_move() {
        let mut p = ConstantPolicy::moving(1.0, -1.0);
        assert_eq!(p.activate(&[0.0; 4]), vec![1.0, 0.0]);
        assert_eq!(ConstantPolicy::idle().activate(&[0.0; 4]), vec![0.5, 0.5]);
    }

    #[test]
    fn seek_moves_axis_by_axis() {
        let mut p = SeekPolicy::new(vec![(0.875, 0.5), (0.875, 0.875)]);
        assert_eq!(p.activate(&[0.5, 0.5, 0.875, 0.875]), vec![1.0, 0.5]);
        assert_eq!(p.current(), 0);

        // Arrived at the first waypoint: head for the second.
        assert_eq!(p.activate(&[0.875, 0.5, 0.875, 0.875]), vec![0.5, 1.0]);
        assert_eq!(p.current(), 1);
    }

    #[test]
    fn seek_holds_after_last_waypoint() {
        let mut p = SeekPolicy::new(vec![(0.25, 0.25)]);
        assert_eq!(p.activate(&[0.25, 0.25, 0.0, 0.0]), vec![0.5, 0.5]);
        assert_eq!(p.current(), 1);
        p.reset();
        assert_eq!(p.current(), 0);
    }

    #[test]
    fn seek_moves_backwards_when_past_target() {
        let mut p = SeekPolicy::new(vec![(0.1, 0.9)]);
        assert_eq!(p.activate(&[0.5, 0.5, 0.0, 0.0]), vec![0.0, 1.0]);
    }
}
