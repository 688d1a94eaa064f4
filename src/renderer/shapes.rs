//! Shape generation for 2D primitives
//!
//! Shapes are built in court space and pushed through the projection, so
//! they tilt with the court like the sprites do.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::court::{Projection, court_corners};

pub const STAR_OUTER_RADIUS: f32 = 30.0;
pub const STAR_INNER_RADIUS: f32 = 15.0;

pub const SHADOW_X_RADIUS: f32 = 30.0;
pub const SHADOW_Y_RADIUS: f32 = 15.0;
/// Shadow sits this far below the juggler's feet
pub const SHADOW_OFFSET: f32 = 20.0;

/// Radius of the center circle painted on the court
pub const CENTER_CIRCLE_RADIUS: f32 = 100.0;
/// Stroke width of court markings and star outlines
pub const LINE_WIDTH: f32 = 5.0;

/// Outline of a five-point star around `center`, closed (first == last)
pub fn star_outline(center: Vec2, proj: &impl Projection) -> Vec<Vec2> {
    let step = PI / 5.0;
    let mut rot = PI / 2.0 * 3.0;
    let mut pts = Vec::with_capacity(12);

    pts.push(center - Vec2::new(0.0, STAR_OUTER_RADIUS));
    for _ in 0..5 {
        pts.push(center + Vec2::new(rot.cos(), rot.sin()) * STAR_OUTER_RADIUS);
        rot += step;
        pts.push(center + Vec2::new(rot.cos(), rot.sin()) * STAR_INNER_RADIUS);
        rot += step;
    }
    pts.push(center - Vec2::new(0.0, STAR_OUTER_RADIUS));

    pts.into_iter().map(|p| proj.transform(p)).collect()
}

/// Filled landing star (fan from the projected center)
pub fn landing_star(center: Vec2, proj: &impl Projection) -> Vec<Vertex> {
    let outline = star_outline(center, proj);
    fan(proj.transform(center), &outline, colors::STAR_FILL)
}

/// Projected radii of an ellipse of court radii `radius` centered at `center`
fn projected_radii(center: Vec2, radius: Vec2, proj: &impl Projection) -> (Vec2, Vec2) {
    let c = proj.transform(center);
    let edge = proj.transform(center - radius);
    (c, c - edge)
}

/// Vertices for a filled ellipse
pub fn ellipse(center: Vec2, radii: Vec2, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let rim: Vec<Vec2> = (0..=segments)
        .map(|i| {
            let theta = (i as f32 / segments as f32) * 2.0 * PI;
            center + Vec2::new(radii.x * theta.cos(), radii.y * theta.sin())
        })
        .collect();
    fan(center, &rim, color)
}

/// Drop shadow under a juggler standing at `position`
pub fn shadow(position: Vec2, proj: &impl Projection) -> Vec<Vertex> {
    let feet = position + Vec2::new(0.0, SHADOW_OFFSET);
    let (c, radii) = projected_radii(feet, Vec2::new(SHADOW_X_RADIUS, SHADOW_Y_RADIUS), proj);
    ellipse(c, radii, colors::SHADOW, 24)
}

/// Court surface as two triangles
pub fn court_surface(size: Vec2, proj: &impl Projection) -> Vec<Vertex> {
    let [tl, bl, br, tr] = court_corners(proj, size);
    let c = colors::COURT;
    vec![
        Vertex::new(tl.x, tl.y, c),
        Vertex::new(bl.x, bl.y, c),
        Vertex::new(br.x, br.y, c),
        Vertex::new(br.x, br.y, c),
        Vertex::new(tr.x, tr.y, c),
        Vertex::new(tl.x, tl.y, c),
    ]
}

/// Half-court line across the middle of the court, projected
pub fn midline(size: Vec2, proj: &impl Projection) -> [Vec2; 2] {
    let y = size.y / 2.0;
    [
        proj.transform(Vec2::new(0.0, y)),
        proj.transform(Vec2::new(size.x, y)),
    ]
}

/// Center circle outline on the court, as a projected polyline
pub fn center_circle(size: Vec2, proj: &impl Projection, segments: u32) -> Vec<Vec2> {
    let center = size / 2.0;
    (0..=segments)
        .map(|i| {
            let theta = (i as f32 / segments as f32) * 2.0 * PI;
            proj.transform(center + Vec2::new(theta.cos(), theta.sin()) * CENTER_CIRCLE_RADIUS)
        })
        .collect()
}

/// Triangle fan from `center` over consecutive `rim` points
fn fan(center: Vec2, rim: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(rim.len().saturating_sub(1) * 3);
    for pair in rim.windows(2) {
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(pair[0].x, pair[0].y, color));
        vertices.push(Vertex::new(pair[1].x, pair[1].y, color));
    }
    vertices
}
