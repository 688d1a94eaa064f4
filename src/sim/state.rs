//! Game state and scene-level types
//!
//! One juggler, the play phase, held keys, the launch bar and the clock.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::club::Hand;
use super::juggler::{InputSnapshot, Juggler};
use super::rating::{LaunchBar, LaunchRating};
use crate::records::Records;
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the launch key
    StartScreen,
    /// Juggling
    Playing,
}

/// Things the host may want to react to (sounds, HUD, logging)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    /// Launch key released; the next throw becomes a launched trick
    LaunchQueued { charge: f32, rating: LaunchRating },
    /// A launched trick left the hand
    Launched {
        hand: Hand,
        spins: u32,
        rating: LaunchRating,
    },
    Caught { hand: Hand, launched: bool },
    Dropped {
        hand: Hand,
        rating: Option<LaunchRating>,
    },
    /// A drop ended the point
    PointEnded { point: u32, streak: u32 },
}

/// Keys currently held, updated from key events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub launch: bool,
}

impl HeldKeys {
    /// Movement snapshot for one frame
    pub fn movement(&self) -> InputSnapshot {
        InputSnapshot {
            up: self.up,
            down: self.down,
            left: self.left,
            right: self.right,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub phase: GamePhase,
    pub juggler: Juggler,
    pub launch_bar: LaunchBar,
    pub held: HeldKeys,
    /// Simulation clock (ms since the session began)
    pub clock_ms: f64,
    /// Ticks processed
    pub frame: u64,
    /// Current point (1-based)
    pub point: u32,
    /// Launched tricks caught in the current point
    pub streak: u32,
    pub records: Records,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            seed: settings.seed,
            phase: GamePhase::StartScreen,
            juggler: Juggler::new(settings.juggler_name.clone(), settings),
            launch_bar: LaunchBar::new(settings.launch_bar_period_ms),
            held: HeldKeys::default(),
            clock_ms: 0.0,
            frame: 0,
            point: 1,
            streak: 0,
            records: Records::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(settings.seed),
        }
    }

    /// Current launch bar fill, if the launch key is held
    pub fn launch_value(&self) -> Option<f32> {
        self.launch_bar.value(self.clock_ms)
    }

    /// Close the current point and start the next one
    pub(crate) fn end_point(&mut self) {
        let point = self.point;
        let streak = self.streak;
        if let Some(rank) = self.records.add_streak(streak, point, self.clock_ms) {
            log::info!("Point {} streak {} ranks #{}", point, streak, rank);
        }
        self.events.push(GameEvent::PointEnded { point, streak });
        self.point += 1;
        self.streak = 0;
    }
}
