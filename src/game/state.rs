use macroquad::prelude::*;
use ::rand::Rng;

use crate::config::TICK_MS;
use crate::game::collision;
use crate::game::food::Foods;
use crate::game::snake::Snake;

/// Everything the fixed-step update mutates. The game loop owns one of
/// these and threads it through the per-tick calls; input handlers only
/// ever overwrite `pointer` and `bounds` between ticks.
pub struct GameState {
    pub snake: Snake,
    pub foods: Foods,
    pub score: i32,
    /// Latest pointer position, screen space. Last writer wins.
    pub pointer: Vec2,
    /// Current window size, re-read every frame so spawns see resizes.
    pub bounds: Vec2,
}

impl GameState {
    pub fn new(bounds: Vec2) -> Self {
        let center = bounds * 0.5;
        Self {
            snake: Snake::new_at(center),
            foods: Foods::new(),
            score: 0,
            pointer: center,
            bounds,
        }
    }

    /// Back to the start-of-game state: snake at the window center,
    /// score zeroed, food field cleared and seeded with one spawn (the
    /// lifecycle refills the rest tick by tick).
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.snake = Snake::new_at(self.bounds * 0.5);
        self.score = 0;
        self.foods.clear();
        self.foods.spawn_one(self.bounds, rng);
    }

    /// One 20 ms update: move toward the pointer, resolve pickups, then
    /// age the food field.
    pub fn tick(&mut self, rng: &mut impl Rng) {
        self.snake.advance_toward(self.pointer);
        collision::resolve(&mut self.snake, &mut self.foods, &mut self.score);
        self.foods.age(TICK_MS, self.bounds, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rand::rngs::StdRng;
    use ::rand::SeedableRng;

    #[test]
    fn test_new_starts_at_center() {
        let state = GameState::new(vec2(800.0, 600.0));
        assert_eq!(state.snake.head_pos(), vec2(400.0, 300.0));
        assert_eq!(state.score, 0);
        assert_eq!(state.foods.total(), 0);
    }

    #[test]
    fn test_reset_restores_start_state() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut state = GameState::new(vec2(800.0, 600.0));
        state.pointer = vec2(0.0, 0.0);
        for _ in 0..200 {
            state.tick(&mut rng);
        }
        state.score = 17;

        state.reset(&mut rng);
        assert_eq!(state.snake.head_pos(), vec2(400.0, 300.0));
        assert_eq!(state.snake.target_length(), 5);
        assert_eq!(state.score, 0);
        assert_eq!(state.foods.total(), 1);
    }

    #[test]
    fn test_tick_moves_and_refills() {
        let mut rng = StdRng::seed_from_u64(22);
        let mut state = GameState::new(vec2(800.0, 600.0));
        state.reset(&mut rng);
        state.pointer = state.snake.head_pos() + vec2(100.0, 0.0);

        let before = state.snake.head_pos();
        state.tick(&mut rng);
        assert!(state.snake.head_pos().x > before.x);
        // Below the floor, the lifecycle adds one food per tick.
        assert!(state.foods.total() >= 1 && state.foods.total() <= 2);
    }

    #[test]
    fn test_long_run_keeps_invariants() {
        let mut rng = StdRng::seed_from_u64(23);
        let mut state = GameState::new(vec2(800.0, 600.0));
        state.reset(&mut rng);

        // Chase a wandering pointer so pickups of every kind happen.
        for i in 0..4000 {
            let a = i as f32 * 0.02;
            state.pointer = vec2(
                400.0 + a.cos() * 350.0,
                300.0 + (a * 1.3).sin() * 250.0,
            );
            state.tick(&mut rng);
            assert!(state.snake.target_length() >= 5);
            assert!(state.snake.len() >= 1);
        }
    }
}
