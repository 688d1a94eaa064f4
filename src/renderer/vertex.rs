//! Vertex types for 2D shapes

use bytemuck::{Pod, Zeroable};

use crate::sim::LaunchRating;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    /// Yellow court surface
    pub const COURT: [f32; 4] = [1.0, 214.0 / 255.0, 64.0 / 255.0, 1.0];
    pub const COURT_LINES: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const SHADOW: [f32; 4] = [0.0, 0.0, 0.0, 0.5];
    pub const STAR_FILL: [f32; 4] = [0.53, 0.81, 0.92, 1.0]; // skyblue
    pub const STAR_OUTLINE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

    pub const GREEN: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
    pub const YELLOW_GREEN: [f32; 4] = [0.6, 0.8, 0.2, 1.0];
    pub const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const ORANGE: [f32; 4] = [1.0, 0.65, 0.0, 1.0];
    pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
}

/// RGBA for a rating's feedback word
pub fn rating_color(rating: LaunchRating) -> [f32; 4] {
    match rating {
        LaunchRating::Perfect => colors::GREEN,
        LaunchRating::Great => colors::YELLOW_GREEN,
        LaunchRating::Good => colors::YELLOW,
        LaunchRating::Okay => colors::ORANGE,
        LaunchRating::Poor => colors::RED,
    }
}
