use macroquad::prelude::*;

use crate::config::SNAKE_THICKNESS;
use crate::game::food::{Food, FoodKind};
use crate::game::state::GameState;

pub fn draw_game(state: &GameState, now_sec: f64) {
    clear_background(Color::from_rgba(12, 14, 20, 255));

    for food in state.foods.items() {
        draw_food(food, now_sec);
    }
    draw_snake(state.snake.segments());

    draw_text(&format!("SCORE {}", state.score), 16.0, 40.0, 32.0, WHITE);
}

fn draw_food(food: &Food, now_sec: f64) {
    let base = match food.kind {
        FoodKind::Red => RED,
        FoodKind::Yellow => YELLOW,
        FoodKind::Green => GREEN,
        FoodKind::Super => rainbow_color(now_sec),
    };
    let color = Color::new(base.r, base.g, base.b, food.opacity);
    draw_circle(food.pos.x, food.pos.y, food.radius, color);
}

fn draw_snake(segments: &[Vec2]) {
    // Thick polyline with round caps and joints: a disc at every joint
    // plus connecting strokes.
    let r = SNAKE_THICKNESS * 0.5;
    for p in segments {
        draw_circle(p.x, p.y, r, LIME);
    }
    for pair in segments.windows(2) {
        draw_line(pair[0].x, pair[0].y, pair[1].x, pair[1].y, SNAKE_THICKNESS, LIME);
    }
}

/// Smooth periodic RGB cycle for the super food, pure in the supplied
/// clock (seconds).
pub fn rainbow_color(now_sec: f64) -> Color {
    let t = now_sec * 2.0;
    let channel = |phase: f64| ((t + phase).sin() * 127.0 + 128.0) as f32 / 255.0;
    Color::new(channel(0.0), channel(2.0), channel(4.0), 1.0)
}
