//! Club flight state machine
//!
//! A club is either grounded (`progress == 0`, sitting in a hand) or in
//! flight (`0 < progress < 1`). Crossing `progress >= 1` resolves the catch
//! and grounds the club in the other hand.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::juggler::Direction;
use super::rating::LaunchRating;
use super::trajectory::{FlightArc, HandAnchors, throw_duration};
use crate::consts::*;
use crate::court_distance;

/// Highest progress value handed to a sprite sheet
pub const MAX_RENDER_PROGRESS: f32 = 0.999;

/// Which hand a club belongs to (or was thrown from, while airborne)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub fn opposite(self) -> Self {
        match self {
            Hand::Left => Hand::Right,
            Hand::Right => Hand::Left,
        }
    }
}

/// Juggler state frozen at the moment of a launched trick
///
/// The catch is judged against this, not against where the juggler is now.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchSnapshot {
    pub anchors: HandAnchors,
    pub facing: Direction,
    pub player_pos: Vec2,
    pub rating: LaunchRating,
}

/// Result of a club reaching the end of its flight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatchOutcome {
    /// Hand the club landed in
    pub hand: Hand,
    pub launched: bool,
    pub dropped: bool,
    /// Rating of the launch, if this was a launched trick
    pub rating: Option<LaunchRating>,
    /// Spins completed during the flight
    pub spins: u32,
}

/// A single club
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Club {
    pub hand: Hand,
    /// Flight progress in [0, 1); 0 = grounded
    pub progress: f32,
    /// Full rotations over one flight
    pub spins: u32,
    /// Set once progress passes `LANDING_THRESHOLD`
    pub is_landing: bool,
    /// Present only while a launched trick is in the air
    pub launch: Option<LaunchSnapshot>,
    velocity: f32,
}

impl Club {
    /// A grounded club in `hand`
    pub fn new(hand: Hand) -> Self {
        Self {
            hand,
            progress: 0.0,
            spins: 1,
            is_landing: false,
            launch: None,
            velocity: INIT_THROW_VEL,
        }
    }

    /// A club just thrown from `hand`
    pub fn airborne(hand: Hand) -> Self {
        let mut club = Self::new(hand);
        club.throw();
        club
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.progress == 0.0
    }

    #[inline]
    pub fn is_launched(&self) -> bool {
        self.launch.is_some()
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Set the throw velocity; non-positive values fall back to a plain throw
    pub fn set_velocity(&mut self, velocity: f32) {
        if velocity > 0.0 && velocity.is_finite() {
            self.velocity = velocity;
        } else {
            log::warn!("Rejected club velocity {}, using {}", velocity, INIT_THROW_VEL);
            self.velocity = INIT_THROW_VEL;
        }
    }

    /// Normalized flight time for the current velocity
    #[inline]
    pub fn throw_duration(&self) -> f32 {
        throw_duration(self.velocity)
    }

    /// Hand this club will occupy once its current flight ends
    pub fn catching_hand(&self) -> Hand {
        if self.is_grounded() {
            self.hand
        } else {
            self.hand.opposite()
        }
    }

    /// Put a grounded club in the air
    ///
    /// Progress starts just above zero so the club is airborne on the very
    /// next update without being drawn in the hand for a frame.
    pub fn throw(&mut self) {
        if self.is_grounded() {
            self.progress = LAUNCH_EPSILON;
        }
    }

    /// Turn the current flight into a launched trick
    pub fn launch(&mut self, snapshot: LaunchSnapshot, charge: f32) {
        self.spins = launch_spins(charge);
        self.set_velocity(INIT_THROW_VEL + SPIN_VELOCITY_BONUS * self.spins as f32);
        self.launch = Some(snapshot);
    }

    /// Advance the flight by `dt` ms
    ///
    /// `player_pos` is the juggler's live court position, used to check a
    /// launched catch against the landing star.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        player_pos: Vec2,
        catch_tolerance: f32,
        rng: &mut R,
    ) -> Option<CatchOutcome> {
        if self.is_grounded() {
            return None;
        }

        self.progress += dt / 10.0 / self.throw_duration();
        if self.progress > LANDING_THRESHOLD {
            self.is_landing = true;
        }
        if self.progress < 1.0 {
            return None;
        }

        Some(self.resolve_catch(player_pos, catch_tolerance, rng))
    }

    fn resolve_catch<R: Rng + ?Sized>(
        &mut self,
        player_pos: Vec2,
        catch_tolerance: f32,
        rng: &mut R,
    ) -> CatchOutcome {
        let launch = self.launch.take();
        let mut dropped = false;
        if let Some(snapshot) = &launch {
            // Either a bad launch or being off the star drops the club
            dropped |= rng.random::<f32>() < snapshot.rating.drop_odds();
            dropped |= court_distance(player_pos, snapshot.player_pos) > catch_tolerance;
        }

        let outcome = CatchOutcome {
            hand: self.hand.opposite(),
            launched: launch.is_some(),
            dropped,
            rating: launch.map(|s| s.rating),
            spins: self.spins,
        };

        if dropped {
            log::info!("Club dropped ({:?} hand, {} spins)", outcome.hand, outcome.spins);
        }

        self.progress = 0.0;
        self.is_landing = false;
        self.hand = self.hand.opposite();
        self.set_velocity(INIT_THROW_VEL);
        self.spins = 1;

        outcome
    }

    /// Facing used to draw this club (frozen for a launched trick)
    pub fn facing(&self, live: Direction) -> Direction {
        self.launch.map(|s| s.facing).unwrap_or(live)
    }

    /// Screen position given the juggler's live hand anchors
    pub fn position(&self, live: &HandAnchors) -> Vec2 {
        if self.is_grounded() {
            return match self.hand {
                Hand::Left => live.left,
                Hand::Right => live.right,
            };
        }

        let anchors = self.launch.map(|s| s.anchors).unwrap_or(*live);
        let arc = FlightArc::between(&anchors, self.velocity);
        let t = match self.hand {
            Hand::Left => self.progress,
            Hand::Right => 1.0 - self.progress,
        };
        arc.point_at(t)
    }

    /// Fraction of the current rotation, for picking a spin frame
    ///
    /// Vertical facings show the club edge-on, so a left-hand throw runs the
    /// frames backwards to keep the rotation direction consistent.
    pub fn spin_phase(&self, live: Direction) -> f32 {
        if self.is_grounded() {
            return 0.0;
        }
        let phase = (self.progress * self.spins as f32).fract();
        if self.facing(live).is_vertical() && self.hand == Hand::Left {
            1.0 - phase
        } else {
            phase
        }
    }

    /// Spin phase clamped for sprite sampling
    pub fn render_progress(&self, live: Direction) -> f32 {
        self.spin_phase(live).clamp(0.0, MAX_RENDER_PROGRESS)
    }
}

/// Spins for a launch bar charge in [0, 1]
#[inline]
pub fn launch_spins(charge: f32) -> u32 {
    (charge.clamp(0.0, 1.0) * MAX_EXTRA_SPINS).round() as u32 + 1
}
