//! Per-frame simulation tick
//!
//! Each call drains the frame's key events, then advances the juggler once.

use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::MAX_FRAME_DT_MS;
use crate::court::Projection;

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Hold to charge the launch bar, release to queue a launch
    Launch,
}

/// A key going down or up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub pressed: bool,
}

impl KeyEvent {
    pub fn down(key: Key) -> Self {
        Self { key, pressed: true }
    }

    pub fn up(key: Key) -> Self {
        Self {
            key,
            pressed: false,
        }
    }
}

/// Input for a single tick, in arrival order
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub events: Vec<KeyEvent>,
}

impl TickInput {
    pub fn with(events: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }
}

/// Advance the game by one frame of `dt` ms
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, proj: &impl Projection) {
    state.events.clear();

    let dt = dt.clamp(0.0, MAX_FRAME_DT_MS);
    state.clock_ms += dt as f64;
    state.frame += 1;

    for event in &input.events {
        handle_event(state, *event, proj);
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    let movement = state.held.movement();
    let report = state
        .juggler
        .update(dt, state.clock_ms, &movement, proj, &mut state.rng);

    if let Some(throw) = report.throw {
        if let Some(rating) = throw.rating {
            state.events.push(GameEvent::Launched {
                hand: throw.hand,
                spins: throw.spins,
                rating,
            });
        }
    }

    for catch in report.catches {
        if catch.dropped {
            state.events.push(GameEvent::Dropped {
                hand: catch.hand,
                rating: catch.rating,
            });
            state.end_point();
        } else {
            state.events.push(GameEvent::Caught {
                hand: catch.hand,
                launched: catch.launched,
            });
            if catch.launched {
                state.streak += 1;
            }
        }
    }
}

fn handle_event(state: &mut GameState, event: KeyEvent, proj: &impl Projection) {
    match state.phase {
        GamePhase::StartScreen => {
            if event.key == Key::Launch && event.pressed {
                log::info!("{} takes the court", state.juggler.name);
                state.phase = GamePhase::Playing;
                state.events.push(GameEvent::Started);
            }
        }
        GamePhase::Playing => match event.key {
            Key::Up => state.held.up = event.pressed,
            Key::Down => state.held.down = event.pressed,
            Key::Left => state.held.left = event.pressed,
            Key::Right => state.held.right = event.pressed,
            Key::Launch => {
                state.held.launch = event.pressed;
                if event.pressed {
                    state.launch_bar.press(state.clock_ms);
                } else if let Some(charge) = state.launch_bar.release(state.clock_ms) {
                    let rating = state.juggler.queue_launch(charge, state.clock_ms, proj);
                    state.events.push(GameEvent::LaunchQueued { charge, rating });
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::court::Identity;
    use crate::settings::Settings;
    use crate::sim::rating::LaunchRating;

    const FRAME: f32 = 1000.0 / 60.0;

    fn playing_state() -> GameState {
        let mut state = GameState::new(&Settings::default());
        tick(&mut state, &TickInput::with([KeyEvent::down(Key::Launch)]), FRAME, &Identity);
        // Releasing the start key does not queue a launch
        tick(&mut state, &TickInput::with([KeyEvent::up(Key::Launch)]), FRAME, &Identity);
        state
    }

    #[test]
    fn test_start_screen_to_playing() {
        let mut state = GameState::new(&Settings::default());
        assert_eq!(state.phase, GamePhase::StartScreen);

        // Movement does nothing before the game starts
        let before = state.juggler.position;
        tick(&mut state, &TickInput::with([KeyEvent::down(Key::Right)]), FRAME, &Identity);
        assert_eq!(state.phase, GamePhase::StartScreen);
        assert_eq!(state.juggler.position, before);
        assert!(!state.held.right);

        tick(&mut state, &TickInput::with([KeyEvent::down(Key::Launch)]), FRAME, &Identity);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.events, vec![GameEvent::Started]);
    }

    #[test]
    fn test_start_key_release_queues_nothing() {
        let state = playing_state();
        assert!(state.juggler.pending_launch.is_none());
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_held_keys_move_juggler() {
        let mut state = playing_state();
        let start = state.juggler.position;
        tick(&mut state, &TickInput::with([KeyEvent::down(Key::Down)]), 100.0, &Identity);
        tick(&mut state, &TickInput::default(), 100.0, &Identity);
        assert!((state.juggler.position.y - (start.y + 50.0)).abs() < 1e-3);

        tick(&mut state, &TickInput::with([KeyEvent::up(Key::Down)]), 100.0, &Identity);
        let stopped = state.juggler.position;
        tick(&mut state, &TickInput::default(), 100.0, &Identity);
        assert_eq!(state.juggler.position, stopped);
    }

    #[test]
    fn test_dt_is_clamped() {
        let mut state = playing_state();
        let clock = state.clock_ms;
        tick(&mut state, &TickInput::default(), 5000.0, &Identity);
        assert!((state.clock_ms - clock - MAX_FRAME_DT_MS as f64).abs() < 1e-9);
        tick(&mut state, &TickInput::default(), -20.0, &Identity);
        assert!((state.clock_ms - clock - MAX_FRAME_DT_MS as f64).abs() < 1e-9);
    }

    #[test]
    fn test_charge_and_release_queues_launch() {
        let mut state = playing_state();
        tick(&mut state, &TickInput::with([KeyEvent::down(Key::Launch)]), FRAME, &Identity);
        assert!(state.launch_bar.is_charging());

        // Hold for 750 ms: bar at 0.5
        for _ in 0..7 {
            tick(&mut state, &TickInput::default(), 100.0, &Identity);
        }
        tick(&mut state, &TickInput::with([KeyEvent::up(Key::Launch)]), 50.0, &Identity);

        let queued = state
            .events
            .iter()
            .find_map(|e| match e {
                GameEvent::LaunchQueued { charge, rating } => Some((*charge, *rating)),
                _ => None,
            })
            .expect("launch not queued");
        assert!((queued.0 - 0.5).abs() < 1e-4);
        assert_eq!(queued.1, LaunchRating::Perfect);
        assert!(state.juggler.pending_launch.is_some() || launched_this_frame(&state));
    }

    fn launched_this_frame(state: &GameState) -> bool {
        state
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::Launched { .. }))
    }

    #[test]
    fn test_launched_trick_caught_extends_streak() {
        let mut state = playing_state();
        state.juggler.queue_launch(0.25, state.clock_ms, &Identity);

        let mut launched = false;
        let mut caught_launch = false;
        for _ in 0..600 {
            tick(&mut state, &TickInput::default(), FRAME, &Identity);
            launched |= launched_this_frame(&state);
            caught_launch |= state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::Caught { launched: true, .. }));
            if caught_launch {
                break;
            }
        }
        assert!(launched);
        assert!(caught_launch);
        assert_eq!(state.streak, 1);
        assert_eq!(state.point, 1);
    }

    #[test]
    fn test_drop_ends_point() {
        let mut state = playing_state();
        state.streak = 4;
        state.juggler.queue_launch(1.0, state.clock_ms, &Identity);

        // Wait for the launch, then run away from the landing star
        let mut ticks = 0;
        while !launched_this_frame(&state) {
            tick(&mut state, &TickInput::default(), FRAME, &Identity);
            ticks += 1;
            assert!(ticks < 600, "launch never happened");
        }
        tick(&mut state, &TickInput::with([KeyEvent::down(Key::Right)]), FRAME, &Identity);

        let mut ended = None;
        for _ in 0..600 {
            tick(&mut state, &TickInput::default(), FRAME, &Identity);
            ended = state.events.iter().find_map(|e| match e {
                GameEvent::PointEnded { point, streak } => Some((*point, *streak)),
                _ => None,
            });
            if ended.is_some() {
                assert!(state.events.iter().any(|e| matches!(e, GameEvent::Dropped { .. })));
                break;
            }
        }
        assert_eq!(ended, Some((1, 4)));
        assert_eq!(state.point, 2);
        assert_eq!(state.streak, 0);
        assert_eq!(state.records.best_streak(), Some(4));
        // Juggling carries on after the drop
        assert!(!state.juggler.in_flight().is_grounded());
    }

    #[test]
    fn test_determinism() {
        let settings = Settings {
            seed: 99999,
            ..Settings::default()
        };
        let mut a = GameState::new(&settings);
        let mut b = GameState::new(&settings);

        let script = [
            TickInput::with([KeyEvent::down(Key::Launch)]),
            TickInput::with([KeyEvent::up(Key::Launch)]),
            TickInput::with([KeyEvent::down(Key::Launch), KeyEvent::down(Key::Left)]),
            TickInput::default(),
            TickInput::with([KeyEvent::up(Key::Launch)]),
        ];
        for _ in 0..40 {
            for input in &script {
                tick(&mut a, input, FRAME, &Identity);
                tick(&mut b, input, FRAME, &Identity);
                assert_eq!(a.events, b.events);
            }
        }
        assert_eq!(a.juggler.position, b.juggler.position);
        assert_eq!(a.point, b.point);
        assert_eq!(a.juggler.slot_table(), b.juggler.slot_table());
    }
}
