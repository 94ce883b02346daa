use macroquad::prelude::*;

use crate::config::TICK_MS;
use crate::game::draw;
use crate::game::state::GameState;
use crate::ui;

// Frames render as fast as the window lets them; the simulation only
// advances in whole 20 ms steps carved out of the accumulated frame time.
pub async fn run() {
    let mut state = GameState::new(vec2(screen_width(), screen_height()));
    let mut started = false;
    let mut tick_debt_ms: f32 = 0.0;

    loop {
        if !started {
            if ui::start_screen() {
                let mut rng = ::rand::thread_rng();
                state.bounds = vec2(screen_width(), screen_height());
                state.reset(&mut rng);
                started = true;
                tick_debt_ms = 0.0;
            }
            next_frame().await;
            continue;
        }

        // Resize and pointer movement land between ticks; every tick reads
        // the latest value (last writer wins, no queueing).
        state.bounds = vec2(screen_width(), screen_height());
        let (mx, my) = mouse_position();
        state.pointer = vec2(mx, my);

        let mut rng = ::rand::thread_rng();
        tick_debt_ms += get_frame_time() * 1000.0;
        // A long hitch drops ticks instead of spiraling.
        tick_debt_ms = tick_debt_ms.min(TICK_MS * 5.0);
        while tick_debt_ms >= TICK_MS {
            state.tick(&mut rng);
            tick_debt_ms -= TICK_MS;
        }

        draw::draw_game(&state, get_time());
        next_frame().await;
    }
}
