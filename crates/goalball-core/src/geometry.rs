//! Geometry utilities - distance and zone containment.

use crate::types::{Position, Zone};

/// Euclidean distance between two points.
pub fn distance(p1: &Position, p2: &Position) -> f64 {
    p1.distance_to(p2)
}

/// Whether an agent of `agent_radius` centred at `point` overlaps `zone`.
///
/// The test is strict: touching exactly at `zone.radius + agent_radius`
/// does not count as contact.
pub fn contains(zone: &Zone, point: &Position, agent_radius: f64) -> bool {
    distance(&zone.center, point) < zone.radius + agent_radius
}

/// Clamp a single coordinate into `[low, high]`.
///
/// Out-of-range values are pulled back inside by `inset`, measured from
/// the violated bound. Values already inside are returned unchanged.
pub fn clamp_axis(value: f64, low: f64, high: f64, inset: impl FnOnce() -> f64) -> f64 {
    if value < low {
        low + inset()
    } else if value > high {
        high - inset()
    } else {
        value
    }
}
