//! Club Court entry point
//!
//! Runs a scripted headless session at 60 Hz and logs what happens. A host
//! with a window feeds real key events into `tick` the same way.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Club Court (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => club_court::Settings::load(path),
        None => club_court::Settings::default(),
    };

    run_session(&settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosted builds drive `tick` from their own frame callback
}

#[cfg(not(target_arch = "wasm32"))]
fn run_session(settings: &club_court::Settings) {
    use club_court::Identity;
    use club_court::renderer::{DrawList, compose_frame};
    use club_court::sim::{GameEvent, GameState, Key, KeyEvent, TickInput, tick};

    const FRAME_MS: f32 = 1000.0 / 60.0;
    const FRAMES: u64 = 60 * 30;

    let mut state = GameState::new(settings);
    let mut draw = DrawList::default();

    for frame in 0..FRAMES {
        // Start, stroll right and then left, and charge a launch every two
        // seconds for a little under half a bar period
        let mut events = Vec::new();
        match frame {
            0 => events.push(KeyEvent::down(Key::Launch)),
            1 => events.push(KeyEvent::up(Key::Launch)),
            120 => events.push(KeyEvent::down(Key::Right)),
            240 => events.extend([KeyEvent::up(Key::Right), KeyEvent::down(Key::Left)]),
            360 => events.push(KeyEvent::up(Key::Left)),
            _ => {}
        }
        match frame % 120 {
            30 if frame > 1 => events.push(KeyEvent::down(Key::Launch)),
            75 => events.push(KeyEvent::up(Key::Launch)),
            _ => {}
        }

        tick(&mut state, &TickInput::with(events), FRAME_MS, &Identity);

        for event in &state.events {
            match event {
                GameEvent::PointEnded { point, streak } => {
                    log::info!("Point {} over with a streak of {}", point, streak)
                }
                other => log::debug!("frame {}: {:?}", state.frame, other),
            }
        }

        draw.commands.clear();
        compose_frame(&state, &Identity, &mut draw);
        log::trace!("frame {}: {} draw commands", state.frame, draw.commands.len());
    }

    log::info!(
        "{} played {} points, current streak {}",
        state.juggler.name,
        state.point,
        state.streak
    );
    match state.records.best_streak() {
        Some(best) => log::info!("Best streak: {}", best),
        None => log::info!("No streaks recorded"),
    }
    if let Ok(json) = state.records.to_json() {
        log::debug!("Records: {}", json);
    }
}
