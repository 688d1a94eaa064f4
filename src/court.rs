//! Court-to-screen projection
//!
//! The simulation always works in flat court coordinates. Anything that ends
//! up on screen (hand anchors, shapes, the rating word) goes through a
//! [`Projection`] supplied by the host.

use glam::Vec2;

/// Maps a court point to a screen point
pub trait Projection {
    fn transform(&self, p: Vec2) -> Vec2;
}

/// Screen space equals court space
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Projection for Identity {
    #[inline]
    fn transform(&self, p: Vec2) -> Vec2 {
        p
    }
}

impl<F> Projection for F
where
    F: Fn(Vec2) -> Vec2,
{
    #[inline]
    fn transform(&self, p: Vec2) -> Vec2 {
        self(p)
    }
}

/// The four projected corners of a court of `size`, in drawing order
/// (top-left, bottom-left, bottom-right, top-right)
pub fn court_corners(proj: &impl Projection, size: Vec2) -> [Vec2; 4] {
    [
        proj.transform(Vec2::ZERO),
        proj.transform(Vec2::new(0.0, size.y)),
        proj.transform(size),
        proj.transform(Vec2::new(size.x, 0.0)),
    ]
}
