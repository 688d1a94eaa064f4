//! Draw order and animation fractions for the juggler's body parts

use crate::sim::{Direction, Juggler, Slot};

/// Body sprite is drawn at twice the depth scale
pub const BODY_SCALE: f32 = 2.0;
/// Leg sprite scale relative to the depth scale
pub const LEGS_SCALE: f32 = 1.25;
/// Body is lifted this far (scaled) above the projected position
pub const BODY_LIFT: f32 = 24.0;
/// Walk cycle speed
pub const LEGS_FPS: f64 = 16.0;
/// Arm pose switches to the catch frame past this progress
pub const CATCH_POSE_PROGRESS: f32 = 0.9;

/// One drawable part of the juggler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Club(Slot),
    Legs,
    Body,
}

/// Back-to-front order for a facing
///
/// The hand on the far side of the body is drawn before the body, the near
/// hand and the airborne club after it.
pub fn layer_order(facing: Direction) -> [Layer; 5] {
    use Layer::*;
    if facing.is_leftward() {
        [Club(Slot::RightHand), Legs, Body, Club(Slot::LeftHand), Club(Slot::InFlight)]
    } else if facing.is_rightward() {
        [Club(Slot::LeftHand), Legs, Body, Club(Slot::RightHand), Club(Slot::InFlight)]
    } else if facing == Direction::Up {
        [Club(Slot::LeftHand), Club(Slot::RightHand), Club(Slot::InFlight), Legs, Body]
    } else {
        [Body, Legs, Club(Slot::LeftHand), Club(Slot::RightHand), Club(Slot::InFlight)]
    }
}

/// Body sheet fraction from what the hands are doing
///
/// A club still finishing its flight into a hand raises that arm; it drops
/// into the catch pose for the last stretch.
pub fn body_pose_fraction(juggler: &Juggler) -> f32 {
    let right = juggler.right_hand();
    let left = juggler.left_hand();
    if !right.is_grounded() {
        if right.progress > CATCH_POSE_PROGRESS { 7.0 / 8.0 } else { 3.0 / 4.0 }
    } else if !left.is_grounded() {
        if left.progress > CATCH_POSE_PROGRESS { 1.0 / 8.0 } else { 1.0 / 4.0 }
    } else {
        0.0
    }
}

/// Leg sheet fraction of the walk cycle at `now_ms`
pub fn legs_fraction(juggler: &Juggler, now_ms: f64, frames: u32) -> f32 {
    let Some(since) = juggler.moving_since_ms else {
        return 0.0;
    };
    let ms_per_frame = 1000.0 / LEGS_FPS;
    let frame = ((now_ms - since).max(0.0) / ms_per_frame) % frames as f64;
    (frame / frames as f64) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_every_order_draws_all_parts_once() {
        for facing in Direction::ALL {
            let order = layer_order(facing);
            for layer in [
                Layer::Legs,
                Layer::Body,
                Layer::Club(Slot::LeftHand),
                Layer::Club(Slot::RightHand),
                Layer::Club(Slot::InFlight),
            ] {
                assert_eq!(order.iter().filter(|l| **l == layer).count(), 1, "{:?}", facing);
            }
        }
    }

    #[test]
    fn test_far_hand_behind_body() {
        let left = layer_order(Direction::Left);
        assert_eq!(left[0], Layer::Club(Slot::RightHand));
        let right = layer_order(Direction::DownRight);
        assert_eq!(right[0], Layer::Club(Slot::LeftHand));
        assert_eq!(layer_order(Direction::Down)[0], Layer::Body);
        assert_eq!(layer_order(Direction::Up)[4], Layer::Body);
    }

    #[test]
    fn test_body_pose_idle_hands() {
        let juggler = Juggler::new("Tester", &Settings::default());
        // Only the airborne slot is in flight at start
        assert_eq!(body_pose_fraction(&juggler), 0.0);
    }

    #[test]
    fn test_legs_still_when_standing() {
        let mut juggler = Juggler::new("Tester", &Settings::default());
        assert_eq!(legs_fraction(&juggler, 500.0, 8), 0.0);

        juggler.moving_since_ms = Some(0.0);
        // 62.5 ms per frame: 3 frames in
        assert!((legs_fraction(&juggler, 187.5, 8) - 3.0 / 8.0).abs() < 1e-6);
        // Wraps after a full cycle
        assert!((legs_fraction(&juggler, 500.0 + 187.5, 8) - 3.0 / 8.0).abs() < 1e-6);
    }
}
