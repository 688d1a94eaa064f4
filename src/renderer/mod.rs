//! Frame composition for a host renderer
//!
//! The crate does not blit anything itself. `compose_frame` walks the game
//! state back to front and hands sprites, filled shapes, strokes and text to
//! a [`RenderSink`] in the order they must be drawn.

pub mod layers;
pub mod shapes;
pub mod sprite;
pub mod vertex;

use glam::Vec2;

pub use layers::{Layer, layer_order};
pub use sprite::SpriteSheet;
pub use vertex::Vertex;

use crate::consts::RATING_WORD_RISE;
use crate::court::Projection;
use crate::depth_scale;
use crate::sim::{Direction, GamePhase, GameState, Juggler, LaunchBar};
use vertex::colors;

/// Rating word starts this far above the juggler
pub const RATING_WORD_LIFT: f32 = 75.0;

/// Sprite families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Club(Direction),
    Body(Direction),
    Legs(Direction),
}

impl Entity {
    /// Sheet metadata for this sprite
    pub fn sheet(self) -> SpriteSheet {
        match self {
            Entity::Body(facing) => sprite::body_sheet(facing),
            Entity::Club(_) | Entity::Legs(_) => sprite::standard_sheet(),
        }
    }

    /// Asset name of the sheet to sample
    pub fn sheet_name(self) -> &'static str {
        match self {
            Entity::Club(facing) => sprite::club_sheet_name(facing),
            Entity::Body(facing) => sprite::body_sheet_name(facing),
            Entity::Legs(facing) => sprite::legs_sheet_name(facing),
        }
    }
}

/// Drawing capability supplied by the host
pub trait RenderSink {
    /// Draw the frame of `entity`'s sheet at `progress` in [0, 1), centered
    /// on `position`
    fn render_frame(&mut self, entity: Entity, position: Vec2, progress: f32, scale: f32);

    /// Filled triangles
    fn fill(&mut self, _vertices: &[Vertex]) {}

    /// Polyline through `points`
    fn stroke(&mut self, _points: &[Vec2], _color: [f32; 4], _width: f32) {}

    /// Centered text
    fn text(&mut self, _text: &str, _position: Vec2, _color: [f32; 4]) {}

    /// Launch bar overlay with `fill` in [0, 1] and aiming marks
    fn launch_bar(&mut self, _fill: f32, _marks: &[f32]) {}
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite {
        entity: Entity,
        sheet: &'static str,
        frame: u32,
        /// Destination rect as [x, y, w, h]
        rect: [f32; 4],
        progress: f32,
    },
    Fill(Vec<Vertex>),
    Stroke {
        points: Vec<Vec2>,
        color: [f32; 4],
        width: f32,
    },
    Text {
        text: String,
        position: Vec2,
        color: [f32; 4],
    },
    LaunchBar { fill: f32 },
}

/// Sink that records draw calls (headless runs, tests)
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn sprites(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { .. }))
    }
}

impl RenderSink for DrawList {
    fn render_frame(&mut self, entity: Entity, position: Vec2, progress: f32, scale: f32) {
        let sheet = entity.sheet();
        self.commands.push(DrawCommand::Sprite {
            entity,
            sheet: entity.sheet_name(),
            frame: sheet.frame_index(progress),
            rect: sheet.dest_rect(position.x, position.y, scale),
            progress,
        });
    }

    fn fill(&mut self, vertices: &[Vertex]) {
        self.commands.push(DrawCommand::Fill(vertices.to_vec()));
    }

    fn stroke(&mut self, points: &[Vec2], color: [f32; 4], width: f32) {
        self.commands.push(DrawCommand::Stroke {
            points: points.to_vec(),
            color,
            width,
        });
    }

    fn text(&mut self, text: &str, position: Vec2, color: [f32; 4]) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            color,
        });
    }

    fn launch_bar(&mut self, fill: f32, _marks: &[f32]) {
        self.commands.push(DrawCommand::LaunchBar { fill });
    }
}

/// Draw everything for the current state
pub fn compose_frame(state: &GameState, proj: &impl Projection, sink: &mut impl RenderSink) {
    let court = state.juggler.court();
    match state.phase {
        GamePhase::StartScreen => {
            sink.text("Press Spacebar to start", court / 2.0, [0.0, 0.0, 0.0, 1.0]);
        }
        GamePhase::Playing => {
            sink.fill(&shapes::court_surface(court, proj));
            sink.stroke(&shapes::midline(court, proj), colors::COURT_LINES, shapes::LINE_WIDTH);
            sink.stroke(
                &shapes::center_circle(court, proj, 48),
                colors::COURT_LINES,
                shapes::LINE_WIDTH,
            );
            compose_juggler(&state.juggler, state.clock_ms, proj, sink);
            if let Some(fill) = state.launch_value() {
                sink.launch_bar(fill, &LaunchBar::aiming_marks());
            }
        }
    }
}

/// Draw the juggler, its clubs, landing stars and rating word
pub fn compose_juggler(
    juggler: &Juggler,
    now_ms: f64,
    proj: &impl Projection,
    sink: &mut impl RenderSink,
) {
    for (_, club) in juggler.clubs() {
        if let Some(snapshot) = &club.launch {
            sink.fill(&shapes::landing_star(snapshot.player_pos, proj));
            sink.stroke(
                &shapes::star_outline(snapshot.player_pos, proj),
                colors::STAR_OUTLINE,
                shapes::LINE_WIDTH,
            );
        }
    }
    sink.fill(&shapes::shadow(juggler.position, proj));

    let anchors = juggler.hand_anchors(proj);
    let base = proj.transform(juggler.position);
    let court_height = juggler.court().y;
    let facing = juggler.facing;

    for layer in layer_order(facing) {
        match layer {
            Layer::Club(slot) => {
                let club = juggler.club(slot);
                let loc = club.launch.map(|s| s.player_pos).unwrap_or(juggler.position);
                sink.render_frame(
                    Entity::Club(club.facing(facing)),
                    club.position(&anchors),
                    club.render_progress(facing),
                    depth_scale(loc.y, court_height),
                );
            }
            Layer::Body => {
                let scale = juggler.scale() * layers::BODY_SCALE;
                sink.render_frame(
                    Entity::Body(facing),
                    base - Vec2::new(0.0, layers::BODY_LIFT * scale),
                    layers::body_pose_fraction(juggler),
                    scale,
                );
            }
            Layer::Legs => {
                let frames = sprite::standard_sheet().frames;
                sink.render_frame(
                    Entity::Legs(facing),
                    base,
                    layers::legs_fraction(juggler, now_ms, frames),
                    juggler.scale() * layers::LEGS_SCALE,
                );
            }
        }
    }

    if let (Some(feedback), Some(age)) =
        (juggler.active_feedback(now_ms), juggler.feedback_age(now_ms))
    {
        let rise = RATING_WORD_LIFT + age * RATING_WORD_RISE;
        let position = feedback.anchor - Vec2::new(0.0, rise);
        sink.text(
            feedback.rating.word(),
            position,
            vertex::rating_color(feedback.rating),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::court::Identity;
    use crate::settings::Settings;
    use crate::sim::{Key, KeyEvent, TickInput, tick};

    fn playing() -> GameState {
        let mut state = GameState::new(&Settings::default());
        tick(&mut state, &TickInput::with([KeyEvent::down(Key::Launch)]), 16.0, &Identity);
        state
    }

    #[test]
    fn test_start_screen_draws_prompt_only() {
        let state = GameState::new(&Settings::default());
        let mut list = DrawList::default();
        compose_frame(&state, &Identity, &mut list);
        assert_eq!(list.commands.len(), 1);
        assert!(matches!(&list.commands[0], DrawCommand::Text { .. }));
    }

    #[test]
    fn test_playing_draws_five_sprites() {
        let state = playing();
        let mut list = DrawList::default();
        compose_frame(&state, &Identity, &mut list);
        assert_eq!(list.sprites().count(), 5);
        // Court, its markings, then the shadow
        assert!(matches!(&list.commands[0], DrawCommand::Fill(_)));
        assert!(matches!(&list.commands[3], DrawCommand::Fill(_)));
    }

    #[test]
    fn test_court_markings_drawn() {
        let state = playing();
        let mut list = DrawList::default();
        compose_frame(&state, &Identity, &mut list);
        let strokes: Vec<_> = list
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Stroke { points, color, width } => Some((points.clone(), *color, *width)),
                _ => None,
            })
            .collect();
        assert_eq!(strokes.len(), 2);

        let (line, color, width) = &strokes[0];
        assert_eq!(line, &vec![Vec2::new(0.0, 360.0), Vec2::new(1280.0, 360.0)]);
        assert_eq!(*color, colors::COURT_LINES);
        assert_eq!(*width, shapes::LINE_WIDTH);

        let (circle, color, _) = &strokes[1];
        assert_eq!(*color, colors::COURT_LINES);
        let center = Vec2::new(640.0, 360.0);
        for p in circle {
            assert!((p.distance(center) - shapes::CENTER_CIRCLE_RADIUS).abs() < 1e-2);
        }
    }

    #[test]
    fn test_sprites_resolve_sheet_frames() {
        let state = playing();
        let mut list = DrawList::default();
        compose_frame(&state, &Identity, &mut list);
        // Facing down at the start: body, legs, then the clubs
        let sheets: Vec<_> = list
            .sprites()
            .filter_map(|c| match c {
                DrawCommand::Sprite { sheet, frame, .. } => Some((*sheet, *frame)),
                _ => None,
            })
            .collect();
        assert_eq!(sheets[0], ("bodyDown", 0));
        assert_eq!(sheets[1], ("legsDown", 0));
        assert!(sheets[2..].iter().all(|(name, frame)| *name == "clubDown" && *frame < 8));
    }

    #[test]
    fn test_sprite_progress_below_one() {
        let mut state = playing();
        let mut list = DrawList::default();
        for _ in 0..200 {
            tick(&mut state, &TickInput::default(), 16.0, &Identity);
            list.commands.clear();
            compose_frame(&state, &Identity, &mut list);
            for cmd in list.sprites() {
                if let DrawCommand::Sprite { progress, frame, .. } = cmd {
                    assert!((0.0..1.0).contains(progress));
                    assert!(*frame < sprite::DEFAULT_FRAMES);
                }
            }
        }
    }

    #[test]
    fn test_rating_word_and_star_drawn() {
        let mut state = playing();
        state.juggler.queue_launch(0.5, state.clock_ms, &Identity);
        let mut list = DrawList::default();
        compose_juggler(&state.juggler, state.clock_ms, &Identity, &mut list);
        let word = list.commands.iter().find_map(|c| match c {
            DrawCommand::Text { text, position, .. } => Some((text.clone(), *position)),
            _ => None,
        });
        let (text, position) = word.expect("no rating word");
        assert_eq!(text, "Perfect!!!");
        assert_eq!(position, state.juggler.position - Vec2::new(0.0, RATING_WORD_LIFT));

        // Run until the launch is in the air: an outlined star comes before the shadow
        for _ in 0..200 {
            tick(&mut state, &TickInput::default(), 16.0, &Identity);
            if state.juggler.clubs().any(|(_, c)| c.is_launched()) {
                break;
            }
        }
        list.commands.clear();
        compose_juggler(&state.juggler, state.clock_ms, &Identity, &mut list);
        assert!(matches!(&list.commands[0], DrawCommand::Fill(_)));
        match &list.commands[1] {
            DrawCommand::Stroke { points, color, .. } => {
                assert_eq!(points.len(), 12);
                assert_eq!(*color, colors::STAR_OUTLINE);
            }
            other => panic!("expected star outline, got {:?}", other),
        }
        assert!(matches!(&list.commands[2], DrawCommand::Fill(_)));
        assert!(matches!(&list.commands[3], DrawCommand::Sprite { .. }));
    }

    #[test]
    fn test_launch_bar_shown_while_charging() {
        let mut state = playing();
        tick(&mut state, &TickInput::with([KeyEvent::down(Key::Launch)]), 16.0, &Identity);
        tick(&mut state, &TickInput::default(), 16.0, &Identity);
        let mut list = DrawList::default();
        compose_frame(&state, &Identity, &mut list);
        assert!(matches!(list.commands.last(), Some(DrawCommand::LaunchBar { .. })));
    }
}
