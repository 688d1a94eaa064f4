//! Sprite sheet frame selection
//!
//! Sheets are a single row of equally sized frames. The host owns the image
//! data; this only decides which frame and how big.

use serde::{Deserialize, Serialize};

use crate::sim::Direction;
use crate::sim::club::MAX_RENDER_PROGRESS;

/// Frames per sheet
pub const DEFAULT_FRAMES: u32 = 8;
/// Sprites are normalized to this on-screen width at scale 1.0
pub const BASE_SPRITE_WIDTH: f32 = 32.0;

/// Sprite sheet metadata
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteSheet {
    pub width: u32,
    pub height: u32,
    pub frames: u32,
}

impl SpriteSheet {
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            frames: DEFAULT_FRAMES,
        }
    }

    /// Frame to show for a progress fraction in [0, 1]
    pub fn frame_index(&self, progress: f32) -> u32 {
        let pct = progress.clamp(0.0, MAX_RENDER_PROGRESS);
        ((pct * self.frames as f32).floor() as u32).min(self.frames - 1)
    }

    /// Scale that normalizes this sheet to `BASE_SPRITE_WIDTH`
    pub fn scale_factor(&self) -> f32 {
        BASE_SPRITE_WIDTH / self.width as f32
    }

    /// Top-left corner and size of the destination rect for a sprite centered
    /// at (x, y) with an extra `scale`
    pub fn dest_rect(&self, x: f32, y: f32, scale: f32) -> [f32; 4] {
        let s = scale * self.scale_factor();
        let w = self.width as f32 * s;
        let h = self.height as f32 * s;
        [x - w / 2.0, y - h / 2.0, w, h]
    }
}

/// Sheet used for the upper body at a facing
pub fn body_sheet(facing: Direction) -> SpriteSheet {
    if facing.is_vertical() {
        SpriteSheet::new(54, 54)
    } else {
        SpriteSheet::new(32, 32)
    }
}

/// Sheet used for clubs and legs
pub fn standard_sheet() -> SpriteSheet {
    SpriteSheet::new(32, 32)
}

/// Asset name of the club sheet for a facing (diagonals share a sheet)
pub fn club_sheet_name(facing: Direction) -> &'static str {
    match facing {
        Direction::Down => "clubDown",
        Direction::Up => "clubUp",
        d if d.is_rightward() => "clubRight",
        _ => "clubLeft",
    }
}

/// Asset name of the leg sheet for a facing
pub fn legs_sheet_name(facing: Direction) -> &'static str {
    match facing {
        Direction::Down | Direction::Up => "legsDown",
        d if d.is_rightward() => "legsRight",
        _ => "legsLeft",
    }
}

/// Asset name of the body sheet for a facing
pub fn body_sheet_name(facing: Direction) -> &'static str {
    match facing {
        Direction::Down => "bodyDown",
        Direction::Up => "bodyUp",
        d if d.is_rightward() => "bodyRight",
        _ => "bodyLeft",
    }
}
