//! Best-streak leaderboard
//!
//! A streak is the number of launched tricks caught before a drop ends the
//! point. Kept in memory for the session; the host may serialize it.

use serde::{Deserialize, Serialize};

/// Maximum number of streaks to keep
pub const MAX_RECORDS: usize = 10;

/// A single leaderboard entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakEntry {
    /// Launched tricks caught
    pub streak: u32,
    /// Point the streak was set in
    pub point: u32,
    /// Simulation clock (ms) when the point ended
    pub ended_at_ms: f64,
}

/// Streak leaderboard, best first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Records {
    pub entries: Vec<StreakEntry>,
}

impl Records {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a finished point's streak
    /// Returns the rank achieved (1-indexed) or None if it didn't make the board
    pub fn add_streak(&mut self, streak: u32, point: u32, ended_at_ms: f64) -> Option<usize> {
        if streak == 0 {
            return None;
        }
        let idx = self
            .entries
            .iter()
            .position(|e| streak > e.streak)
            .unwrap_or(self.entries.len());
        if idx >= MAX_RECORDS {
            return None;
        }
        self.entries.insert(
            idx,
            StreakEntry {
                streak,
                point,
                ended_at_ms,
            },
        );
        self.entries.truncate(MAX_RECORDS);
        Some(idx + 1)
    }

    pub fn best_streak(&self) -> Option<u32> {
        self.entries.first().map(|e| e.streak)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
