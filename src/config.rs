// Fixed update step. Every lifetime below counts in the same unit (ms).
pub const TICK_MS: f32 = 20.0;

// Snake
pub const SNAKE_SPEED: f32 = 3.0; // units per tick
pub const MIN_SNAKE_LENGTH: usize = 5;
pub const SNAKE_THICKNESS: f32 = 20.0;

// Food population band. The lifecycle refills one per tick below the
// floor and pressure-releases one per tick above the ceiling.
pub const MIN_FOODS: usize = 30;
pub const MAX_FOODS: usize = 50;

pub const FOOD_RADIUS: f32 = 10.0;
pub const FOOD_LIFETIME_MS: f32 = 6000.0;
pub const SUPER_FOOD_LIFETIME_MS: f32 = 10_000.0;

// Last stretch of a food's life: opacity ramps linearly to zero.
pub const FOOD_FADE_MS: f32 = 1000.0;
