//! Raylib window that drives a [`Game`] at its configured tick rate and draws
//! its snapshots.

mod input;
mod render;

use tracing::info;

use crate::clock::FrameClock;
use crate::game::Game;

pub fn run(mut game: Game) {
    let config = game.config().clone();
    let (mut rl, thread) = raylib::init()
        .size(config.arena_width as i32, config.arena_height as i32)
        .title("Tank Arena")
        .build();
    rl.set_target_fps(config.fps);

    let keys = input::bound_keys(&config);
    let mut clock = FrameClock::new(config.fps, rl.get_time() * 1000.0);
    info!(fps = config.fps, "window open");

    while !rl.window_should_close() {
        if clock.advance(rl.get_time() * 1000.0) {
            let held = input::sample_keyboard(&rl, &keys);
            game.step(&held);
        }

        let snapshot = game.snapshot();
        let mut d = rl.begin_drawing(&thread);
        render::draw_frame(&mut d, &snapshot, config.reset_key);
    }
    info!(ticks = game.tick(), "window closed");
}
