use macroquad::prelude::*;

use crate::config::{MIN_SNAKE_LENGTH, SNAKE_SPEED};

pub struct Snake {
    // Head first. Never empty.
    segments: Vec<Vec2>,
    target_length: usize,
}

impl Snake {
    pub fn new_at(head: Vec2) -> Self {
        Self {
            segments: vec![head],
            target_length: MIN_SNAKE_LENGTH,
        }
    }

    pub fn head_pos(&self) -> Vec2 {
        self.segments[0]
    }

    pub fn segments(&self) -> &[Vec2] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Step the head `SNAKE_SPEED` units toward `target`, then trim the
    /// tail back to the target length. Within `SNAKE_SPEED` of the target
    /// the head stays put, so the snake settles under the pointer instead
    /// of jittering around it (distance zero included).
    pub fn advance_toward(&mut self, target: Vec2) {
        let to_target = target - self.head_pos();
        let distance = to_target.length();
        if distance > SNAKE_SPEED {
            let new_head = self.head_pos() + to_target / distance * SNAKE_SPEED;
            self.segments.insert(0, new_head);
        }

        while self.segments.len() > self.target_length {
            self.segments.pop();
        }
    }

    /// Adjust the target length by `amount` (negative to shrink), clamped
    /// so the snake never drops below the minimum length.
    pub fn grow(&mut self, amount: i32) {
        let grown = self.target_length as i32 + amount;
        self.target_length = grown.max(MIN_SNAKE_LENGTH as i32) as usize;
    }
}
