//! Club flight arc between two hand anchors
//!
//! A thrown club follows a quadratic Bézier curve:
//! - start/end: the two hand anchors
//! - control: above the anchors' midpoint, lifted by the throw's apex height
//!
//! This is a stylized arc, not a ballistic solve. Screen y grows downward, so
//! "above" means smaller y.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::ACCEL;

/// Screen-space positions of both hands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandAnchors {
    pub left: Vec2,
    pub right: Vec2,
}

impl HandAnchors {
    pub fn new(left: Vec2, right: Vec2) -> Self {
        Self { left, right }
    }

    /// Midpoint between the hands
    #[inline]
    pub fn midpoint(&self) -> Vec2 {
        (self.left + self.right) * 0.5
    }
}

/// Total normalized flight time for a throw velocity
///
/// Matches a parabola under `ACCEL` returning to its launch height.
#[inline]
pub fn throw_duration(velocity: f32) -> f32 {
    velocity / ACCEL * -2.0
}

/// Peak height of a throw above the left hand
#[inline]
pub fn apex_height(velocity: f32) -> f32 {
    velocity * velocity / -ACCEL
}

/// Quadratic arc from the left hand to the right hand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightArc {
    pub start: Vec2,
    pub control: Vec2,
    pub end: Vec2,
}

impl FlightArc {
    /// Build the arc for a throw of `velocity` between `hands`
    pub fn between(hands: &HandAnchors, velocity: f32) -> Self {
        let control = Vec2::new(hands.midpoint().x, hands.left.y - apex_height(velocity));
        Self {
            start: hands.left,
            control,
            end: hands.right,
        }
    }

    /// Point on the arc at `t` in [0, 1] (0 = left hand, 1 = right hand)
    pub fn point_at(&self, t: f32) -> Vec2 {
        let u = 1.0 - t;
        self.start * (u * u) + self.control * (2.0 * u * t) + self.end * (t * t)
    }
}
