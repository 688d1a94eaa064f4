//! Game settings
//!
//! Loaded from a JSON file on native; anything missing takes its default.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Name of the juggler on court unless configured otherwise
pub const DEFAULT_JUGGLER_NAME: &str = "Wes Peden";

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Court ===
    pub court_width: f32,
    pub court_height: f32,
    /// Where the juggler starts (court units)
    pub start_position: Vec2,

    // === Juggler ===
    pub juggler_name: String,
    /// Movement speed (units per ms)
    pub player_speed: f32,
    /// Max distance from the landing star for a launched catch
    pub catch_tolerance: f32,

    // === Launch ===
    /// One-way sweep time of the launch bar
    pub launch_bar_period_ms: f64,
    /// How long the rating word stays up
    pub rating_display_ms: f64,

    /// RNG seed for drop trials
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            court_width: COURT_WIDTH,
            court_height: COURT_HEIGHT,
            start_position: Vec2::new(200.0, 200.0),

            juggler_name: DEFAULT_JUGGLER_NAME.to_string(),
            player_speed: PLAYER_SPEED,
            catch_tolerance: CATCH_TOLERANCE,

            launch_bar_period_ms: LAUNCH_BAR_PERIOD_MS,
            rating_display_ms: RATING_WORD_MS,

            seed: 0x5eed,
        }
    }
}

impl Settings {
    pub fn court_size(&self) -> Vec2 {
        Vec2::new(self.court_width, self.court_height)
    }

    /// Parse settings from JSON, then sanitize them
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a file, falling back to defaults on any error
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace unusable values with defaults
    ///
    /// The court must have area, speeds and periods must be positive, and the
    /// start position must lie on the court.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.court_width > 0.0 && self.court_height > 0.0) {
            log::warn!(
                "Court {}x{} is empty, using {}x{}",
                self.court_width,
                self.court_height,
                defaults.court_width,
                defaults.court_height
            );
            self.court_width = defaults.court_width;
            self.court_height = defaults.court_height;
        }
        if !(self.player_speed >= 0.0 && self.player_speed.is_finite()) {
            log::warn!("Player speed {} is invalid", self.player_speed);
            self.player_speed = defaults.player_speed;
        }
        if !(self.catch_tolerance >= 0.0) {
            log::warn!("Catch tolerance {} is invalid", self.catch_tolerance);
            self.catch_tolerance = defaults.catch_tolerance;
        }
        if !(self.launch_bar_period_ms > 0.0) {
            log::warn!("Launch bar period {} is invalid", self.launch_bar_period_ms);
            self.launch_bar_period_ms = defaults.launch_bar_period_ms;
        }
        if !(self.rating_display_ms >= 0.0) {
            self.rating_display_ms = defaults.rating_display_ms;
        }
        self.start_position = self.start_position.clamp(Vec2::ZERO, self.court_size());
        self
    }
}
