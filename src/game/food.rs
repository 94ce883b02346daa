use macroquad::prelude::*;
use ::rand::Rng;

use crate::config::{
    FOOD_FADE_MS, FOOD_LIFETIME_MS, FOOD_RADIUS, MAX_FOODS, MIN_FOODS, SUPER_FOOD_LIFETIME_MS,
};

// ---- Food kinds ----

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoodKind {
    Red,
    Yellow,
    Green,
    Super,
}

impl FoodKind {
    pub fn score_value(self) -> i32 {
        match self {
            FoodKind::Red => 1,
            FoodKind::Yellow => 2,
            FoodKind::Green => -20,
            FoodKind::Super => 10,
        }
    }

    /// Target-length change on pickup. Same magnitudes as the score; the
    /// length clamp lives on the snake side.
    pub fn growth(self) -> i32 {
        match self {
            FoodKind::Red => 1,
            FoodKind::Yellow => 2,
            FoodKind::Green => -20,
            FoodKind::Super => 10,
        }
    }

    pub fn lifetime_ms(self) -> f32 {
        match self {
            FoodKind::Super => SUPER_FOOD_LIFETIME_MS,
            _ => FOOD_LIFETIME_MS,
        }
    }
}

// ---- Food field ----

#[derive(Clone, Copy, Debug)]
pub struct Food {
    pub pos: Vec2,
    pub kind: FoodKind,
    pub radius: f32,
    pub lifetime_ms: f32,
    pub opacity: f32,
}

pub struct Foods {
    items: Vec<Food>,
}

impl Foods {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[Food] {
        &self.items
    }

    /// Spawns a single food inside `bounds`, unless the population is
    /// already at the floor. Callers don't need to check first.
    pub fn spawn_one(&mut self, bounds: Vec2, rng: &mut impl Rng) {
        if self.items.len() >= MIN_FOODS {
            return;
        }
        self.items.push(Self::random_food(bounds, rng));
    }

    /// Per-tick aging: count lifetimes down, fade the ones in their last
    /// second, drop the expired, then nudge the population back into its
    /// band (one spawn below the floor, one forced fade above the
    /// ceiling).
    pub fn age(&mut self, dt_ms: f32, bounds: Vec2, rng: &mut impl Rng) {
        for food in &mut self.items {
            food.lifetime_ms -= dt_ms;
            if food.lifetime_ms <= FOOD_FADE_MS {
                food.opacity = (food.lifetime_ms / FOOD_FADE_MS).max(0.0);
            }
        }
        self.items.retain(|f| f.lifetime_ms > 0.0);

        if self.items.len() < MIN_FOODS {
            self.spawn_one(bounds, rng);
        } else if self.items.len() > MAX_FOODS {
            // Pressure valve: push one random food into fade-out rather
            // than deleting it. min() never extends a life, so picking one
            // that is already fading is harmless.
            let idx = rng.gen_range(0..self.items.len());
            let food = &mut self.items[idx];
            food.lifetime_ms = food.lifetime_ms.min(FOOD_FADE_MS);
        }
    }

    /// Removes and returns the kinds of every food whose center is
    /// strictly within its radius of `head`.
    pub fn eat_colliding(&mut self, head: Vec2) -> Vec<FoodKind> {
        let mut eaten = Vec::new();

        let mut i = 0;
        while i < self.items.len() {
            let f = self.items[i];
            if head.distance_squared(f.pos) < f.radius * f.radius {
                eaten.push(f.kind);
                self.items.swap_remove(i);
                continue;
            }
            i += 1;
        }

        eaten
    }

    #[cfg(test)]
    pub fn push(&mut self, food: Food) {
        self.items.push(food);
    }

    fn random_food(bounds: Vec2, rng: &mut impl Rng) -> Food {
        let kind = Self::random_kind(rng);
        Food {
            pos: random_pos(bounds, rng),
            kind,
            radius: FOOD_RADIUS,
            lifetime_ms: kind.lifetime_ms(),
            opacity: 1.0,
        }
    }

    fn random_kind(rng: &mut impl Rng) -> FoodKind {
        let roll: f32 = rng.gen();
        if roll < 0.60 {
            FoodKind::Red
        } else if roll < 0.90 {
            FoodKind::Yellow
        } else if roll < 0.98 {
            FoodKind::Green
        } else {
            FoodKind::Super
        }
    }
}

fn random_pos(bounds: Vec2, rng: &mut impl Rng) -> Vec2 {
    // A zero-sized window degrades to spawning on the axis, not a panic.
    let x = if bounds.x > 0.0 {
        rng.gen_range(0.0..bounds.x)
    } else {
        0.0
    };
    let y = if bounds.y > 0.0 {
        rng.gen_range(0.0..bounds.y)
    } else {
        0.0
    };
    vec2(x, y)
}
