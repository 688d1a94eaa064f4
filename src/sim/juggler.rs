//! The juggler: position, facing, and the three club roles
//!
//! Two clubs sit in hand slots and one is in the air. When the airborne club
//! starts landing, it trades places with the club in the catching hand, which
//! is thrown straight away. Roles are an index table into a fixed club array,
//! so a swap never copies a club.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::club::{CatchOutcome, Club, Hand, LaunchSnapshot};
use super::rating::LaunchRating;
use super::trajectory::HandAnchors;
use crate::court::Projection;
use crate::settings::Settings;
use crate::{clamp_to_court, depth_scale};

/// Eight-way facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Down,
    DownLeft,
    Left,
    UpLeft,
    Up,
    UpRight,
    Right,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
    ];

    /// Facing straight toward or away from the camera
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    pub fn is_leftward(self) -> bool {
        matches!(self, Direction::Left | Direction::UpLeft | Direction::DownLeft)
    }

    pub fn is_rightward(self) -> bool {
        matches!(self, Direction::Right | Direction::UpRight | Direction::DownRight)
    }

    /// Facing implied by held movement keys (None if nothing is held)
    ///
    /// Diagonals win over single directions; down beats up, left beats right.
    pub fn from_input(input: &InputSnapshot) -> Option<Self> {
        let InputSnapshot {
            up,
            down,
            left,
            right,
        } = *input;
        let facing = if down && left {
            Direction::DownLeft
        } else if down && right {
            Direction::DownRight
        } else if up && left {
            Direction::UpLeft
        } else if up && right {
            Direction::UpRight
        } else if down {
            Direction::Down
        } else if left {
            Direction::Left
        } else if up {
            Direction::Up
        } else if right {
            Direction::Right
        } else {
            return None;
        };
        Some(facing)
    }

    /// Unscaled (left, right) hand offsets from the projected body position
    pub fn hand_offsets(self) -> (Vec2, Vec2) {
        let (l, r) = match self {
            Direction::Down => ((-30.0, -30.0), (30.0, -30.0)),
            Direction::Up => ((20.0, -45.0), (-20.0, -45.0)),
            Direction::DownRight => ((10.0, -35.0), (20.0, -30.0)),
            Direction::UpRight => ((20.0, -35.0), (10.0, -30.0)),
            Direction::Right => ((20.0, -35.0), (20.0, -30.0)),
            Direction::UpLeft => ((-20.0, -30.0), (-10.0, -35.0)),
            Direction::DownLeft => ((-10.0, -30.0), (-20.0, -35.0)),
            Direction::Left => ((-20.0, -30.0), (-20.0, -35.0)),
        };
        (Vec2::new(l.0, l.1), Vec2::new(r.0, r.1))
    }
}

/// Movement keys held during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputSnapshot {
    pub fn any_movement(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// A released launch waiting for the next throw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingLaunch {
    pub charge: f32,
    pub rating: LaunchRating,
}

/// Rating word currently floating above the juggler
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingFeedback {
    pub rating: LaunchRating,
    pub shown_at_ms: f64,
    /// Screen position the word rises from
    pub anchor: Vec2,
}

/// Club roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    LeftHand = 0,
    RightHand = 1,
    InFlight = 2,
}

impl Slot {
    /// Update order
    pub const ALL: [Slot; 3] = [Slot::LeftHand, Slot::RightHand, Slot::InFlight];

    fn for_hand(hand: Hand) -> Self {
        match hand {
            Hand::Left => Slot::LeftHand,
            Hand::Right => Slot::RightHand,
        }
    }
}

/// A club leaving the hand this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throw {
    /// Hand it was thrown from
    pub hand: Hand,
    pub spins: u32,
    pub rating: Option<LaunchRating>,
}

/// What happened to the clubs during one update
#[derive(Debug, Clone, Default)]
pub struct UpdateReport {
    pub catches: Vec<CatchOutcome>,
    pub throw: Option<Throw>,
}

/// The juggler and the clubs it owns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Juggler {
    pub name: String,
    /// Court position (untransformed)
    pub position: Vec2,
    pub facing: Direction,
    pub pending_launch: Option<PendingLaunch>,
    pub feedback: Option<RatingFeedback>,
    /// Clock time movement started (None while standing)
    pub moving_since_ms: Option<f64>,
    clubs: [Club; 3],
    /// Club index for each role, indexed by `Slot`
    slots: [usize; 3],
    court: Vec2,
    speed: f32,
    catch_tolerance: f32,
    rating_display_ms: f64,
}

impl Juggler {
    pub fn new(name: impl Into<String>, settings: &Settings) -> Self {
        Self {
            name: name.into(),
            position: settings.start_position,
            facing: Direction::Down,
            pending_launch: None,
            feedback: None,
            moving_since_ms: None,
            clubs: [
                Club::new(Hand::Left),
                Club::new(Hand::Right),
                // First club is already on its way to the left hand
                Club::airborne(Hand::Right),
            ],
            slots: [0, 1, 2],
            court: settings.court_size(),
            speed: settings.player_speed,
            catch_tolerance: settings.catch_tolerance,
            rating_display_ms: settings.rating_display_ms,
        }
    }

    /// Club currently holding `slot`
    pub fn club(&self, slot: Slot) -> &Club {
        &self.clubs[self.slots[slot as usize]]
    }

    pub fn left_hand(&self) -> &Club {
        self.club(Slot::LeftHand)
    }

    pub fn right_hand(&self) -> &Club {
        self.club(Slot::RightHand)
    }

    pub fn in_flight(&self) -> &Club {
        self.club(Slot::InFlight)
    }

    /// All clubs with their current role
    pub fn clubs(&self) -> impl Iterator<Item = (Slot, &Club)> {
        Slot::ALL.into_iter().map(|slot| (slot, self.club(slot)))
    }

    /// Raw role table (club index per slot)
    pub fn slot_table(&self) -> [usize; 3] {
        self.slots
    }

    pub fn court(&self) -> Vec2 {
        self.court
    }

    pub fn is_moving(&self) -> bool {
        self.moving_since_ms.is_some()
    }

    /// Sprite scale at the juggler's depth
    pub fn scale(&self) -> f32 {
        depth_scale(self.position.y, self.court.y)
    }

    /// Screen positions of both hands for the live facing
    pub fn hand_anchors(&self, proj: &impl Projection) -> HandAnchors {
        let base = proj.transform(self.position);
        let scale = self.scale();
        let (left, right) = self.facing.hand_offsets();
        HandAnchors::new(base + left * scale, base + right * scale)
    }

    /// Queue a launch from a released launch bar value
    pub fn queue_launch(&mut self, charge: f32, now_ms: f64, proj: &impl Projection) -> LaunchRating {
        let rating = LaunchRating::evaluate(charge);
        self.pending_launch = Some(PendingLaunch { charge, rating });
        self.feedback = Some(RatingFeedback {
            rating,
            shown_at_ms: now_ms,
            anchor: proj.transform(self.position),
        });
        log::debug!("{} queued launch: charge {:.3} -> {:?}", self.name, charge, rating);
        rating
    }

    /// Rating word still on screen at `now_ms`
    pub fn active_feedback(&self, now_ms: f64) -> Option<&RatingFeedback> {
        self.feedback
            .as_ref()
            .filter(|f| now_ms - f.shown_at_ms <= self.rating_display_ms)
    }

    /// Fraction of the rating word's lifetime elapsed at `now_ms`
    pub fn feedback_age(&self, now_ms: f64) -> Option<f32> {
        self.active_feedback(now_ms)
            .map(|f| ((now_ms - f.shown_at_ms) / self.rating_display_ms) as f32)
    }

    /// Advance one frame of `dt` ms
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        now_ms: f64,
        input: &InputSnapshot,
        proj: &impl Projection,
        rng: &mut R,
    ) -> UpdateReport {
        self.apply_movement(dt, now_ms, input);
        if let Some(facing) = Direction::from_input(input) {
            self.facing = facing;
        }

        let mut report = UpdateReport::default();
        for slot in Slot::ALL {
            let idx = self.slots[slot as usize];
            let outcome = self.clubs[idx].update(dt, self.position, self.catch_tolerance, rng);
            if let Some(outcome) = outcome {
                // The rating word goes away once its trick resolves
                if outcome.launched {
                    self.feedback = None;
                }
                report.catches.push(outcome);
            }
        }

        // A grounded club in the air slot caught within this same frame
        let air = self.in_flight();
        if air.is_landing || air.is_grounded() {
            report.throw = self.swap_hands(proj);
        }

        report
    }

    fn apply_movement(&mut self, dt: f32, now_ms: f64, input: &InputSnapshot) {
        let step = self.speed * dt;
        let mut delta = Vec2::ZERO;
        if input.up {
            delta.y -= step;
        }
        if input.left {
            delta.x -= step;
        }
        if input.down {
            delta.y += step;
        }
        if input.right {
            delta.x += step;
        }
        self.position = clamp_to_court(self.position + delta, self.court);

        if input.any_movement() {
            self.moving_since_ms.get_or_insert(now_ms);
        } else {
            self.moving_since_ms = None;
        }
    }

    /// Move the landing club into its catching hand and throw the club that
    /// was waiting there
    fn swap_hands(&mut self, proj: &impl Projection) -> Option<Throw> {
        let air_idx = self.slots[Slot::InFlight as usize];
        let target = Slot::for_hand(self.clubs[air_idx].catching_hand());
        let hand_idx = self.slots[target as usize];

        // The catching hand must be empty of flight before it can throw
        if !self.clubs[hand_idx].is_grounded() {
            return None;
        }

        self.slots.swap(Slot::InFlight as usize, target as usize);

        let anchors = self.hand_anchors(proj);
        let facing = self.facing;
        let player_pos = self.position;
        let pending = self.pending_launch.take();

        let club = &mut self.clubs[hand_idx];
        club.throw();
        if let Some(pending) = pending {
            club.launch(
                LaunchSnapshot {
                    anchors,
                    facing,
                    player_pos,
                    rating: pending.rating,
                },
                pending.charge,
            );
            log::info!(
                "{} launched a {}-spin {:?} from the {:?} hand",
                self.name,
                club.spins,
                pending.rating,
                club.hand
            );
        }

        Some(Throw {
            hand: club.hand,
            spins: club.spins,
            rating: club.launch.map(|s| s.rating),
        })
    }
}
