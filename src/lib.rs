//! Club Court - a two-club juggling game on a perspective court
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (club flight, catches, launch ratings)
//! - `renderer`: Draw-list composition and vertex shapes for a host renderer
//! - `court`: Projection from court space to screen space
//! - `records`: Best-streak leaderboard
//! - `settings`: Data-driven configuration

pub mod court;
pub mod records;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use court::{Identity, Projection};
pub use records::Records;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
///
/// Times are in milliseconds, distances in court units.
pub mod consts {
    /// Gravity-like deceleration of a thrown club (negative)
    pub const ACCEL: f32 = -0.022;
    /// Velocity of an ordinary throw
    pub const INIT_THROW_VEL: f32 = 1.0;
    /// Extra velocity per spin on a launched trick
    pub const SPIN_VELOCITY_BONUS: f32 = 0.35;
    /// Charge is scaled by this before rounding to extra spins
    pub const MAX_EXTRA_SPINS: f32 = 4.0;

    /// Progress past which a club counts as landing
    pub const LANDING_THRESHOLD: f32 = 0.8;
    /// Progress given to a freshly thrown club (0 means grounded)
    pub const LAUNCH_EPSILON: f32 = 0.0001;

    /// Player movement speed (units per ms)
    pub const PLAYER_SPEED: f32 = 0.25;
    /// Max distance from the landing star that still allows a catch
    pub const CATCH_TOLERANCE: f32 = 75.0;

    /// Launch bar sweep time in one direction
    pub const LAUNCH_BAR_PERIOD_MS: f64 = 1500.0;
    /// How long the rating word stays on screen
    pub const RATING_WORD_MS: f64 = 1000.0;
    /// How far the rating word rises over its lifetime
    pub const RATING_WORD_RISE: f32 = 30.0;

    /// Longest frame delta the simulation will accept
    pub const MAX_FRAME_DT_MS: f32 = 100.0;

    /// Default court size (matches a 1280x720 canvas)
    pub const COURT_WIDTH: f32 = 1280.0;
    pub const COURT_HEIGHT: f32 = 720.0;
    /// Sprites shrink by up to this fraction at the far edge of the court
    pub const DEPTH_SHRINK: f32 = 0.3;
}

/// Distance between two court positions
#[inline]
pub fn court_distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Clamp a position to `[0, size.x] x [0, size.y]`
#[inline]
pub fn clamp_to_court(pos: Vec2, size: Vec2) -> Vec2 {
    pos.clamp(Vec2::ZERO, size)
}

/// Sprite scale at court depth `y` (1.0 at the near edge)
#[inline]
pub fn depth_scale(y: f32, court_height: f32) -> f32 {
    1.0 - ((court_height - y) / court_height) * consts::DEPTH_SHRINK
}
