use crate::game::food::Foods;
use crate::game::snake::Snake;

/// Consumes every food overlapping the head this tick and applies its
/// score and length effects. Effects are independent and commutative, so
/// the order among simultaneous pickups doesn't matter.
pub fn resolve(snake: &mut Snake, foods: &mut Foods, score: &mut i32) {
    for kind in foods.eat_colliding(snake.head_pos()) {
        *score += kind.score_value();
        snake.grow(kind.growth());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FOOD_RADIUS;
    use crate::game::food::{Food, FoodKind};
    use macroquad::prelude::*;

    fn food_at(pos: Vec2, kind: FoodKind) -> Food {
        Food {
            pos,
            kind,
            radius: FOOD_RADIUS,
            lifetime_ms: kind.lifetime_ms(),
            opacity: 1.0,
        }
    }

    #[test]
    fn test_red_food_at_head_center() {
        let mut snake = Snake::new_at(vec2(100.0, 100.0));
        let mut foods = Foods::new();
        let mut score = 0;
        foods.push(food_at(vec2(100.0, 100.0), FoodKind::Red));

        resolve(&mut snake, &mut foods, &mut score);

        assert_eq!(foods.total(), 0);
        assert_eq!(score, 1);
        assert_eq!(snake.target_length(), 6);
    }

    #[test]
    fn test_green_food_clamps_length() {
        let mut snake = Snake::new_at(vec2(0.0, 0.0));
        snake.grow(3); // target 8
        let mut foods = Foods::new();
        let mut score = 0;
        foods.push(food_at(vec2(0.0, 0.0), FoodKind::Green));

        resolve(&mut snake, &mut foods, &mut score);

        assert_eq!(snake.target_length(), 5);
        assert_eq!(score, -20);
    }

    #[test]
    fn test_score_can_go_negative() {
        let mut snake = Snake::new_at(vec2(0.0, 0.0));
        let mut foods = Foods::new();
        let mut score = 0;
        foods.push(food_at(vec2(0.0, 0.0), FoodKind::Green));
        resolve(&mut snake, &mut foods, &mut score);
        foods.push(food_at(vec2(0.0, 0.0), FoodKind::Green));
        resolve(&mut snake, &mut foods, &mut score);

        assert_eq!(score, -40);
        assert_eq!(snake.target_length(), 5);
    }

    #[test]
    fn test_simultaneous_pickups_all_apply() {
        let mut snake = Snake::new_at(vec2(0.0, 0.0));
        let mut foods = Foods::new();
        let mut score = 0;
        foods.push(food_at(vec2(2.0, 0.0), FoodKind::Yellow));
        foods.push(food_at(vec2(-2.0, 0.0), FoodKind::Super));

        resolve(&mut snake, &mut foods, &mut score);

        assert_eq!(score, 12);
        assert_eq!(snake.target_length(), 5 + 2 + 10);
        assert_eq!(foods.total(), 0);
    }

    #[test]
    fn test_out_of_range_food_untouched() {
        let mut snake = Snake::new_at(vec2(0.0, 0.0));
        let mut foods = Foods::new();
        let mut score = 0;
        foods.push(food_at(vec2(FOOD_RADIUS, 0.0), FoodKind::Red));

        resolve(&mut snake, &mut foods, &mut score);

        assert_eq!(foods.total(), 1);
        assert_eq!(score, 0);
        assert_eq!(snake.target_length(), 5);
    }
}
