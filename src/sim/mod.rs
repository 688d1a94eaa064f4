//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering and
//! platform code:
//! - Variable `dt` in milliseconds, clamped per tick
//! - Injected RNG only (seeded `Pcg32` in `GameState`)
//! - Court coordinates for state, projection only for display anchors

pub mod club;
pub mod juggler;
pub mod rating;
pub mod state;
pub mod tick;
pub mod trajectory;

pub use club::{CatchOutcome, Club, Hand, LaunchSnapshot};
pub use juggler::{Direction, InputSnapshot, Juggler, PendingLaunch, RatingFeedback, Slot};
pub use rating::{LaunchBar, LaunchRating};
pub use state::{GameEvent, GamePhase, GameState, HeldKeys};
pub use tick::{Key, KeyEvent, TickInput, tick};
pub use trajectory::{FlightArc, HandAnchors};
