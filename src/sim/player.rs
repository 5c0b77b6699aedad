//! Player ship and its bullets

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::tick::TickInput;
use crate::consts::*;

/// A bullet climbing straight up the field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub speed: f32,
    /// Flagged for removal: left the field or hit something
    pub spent: bool,
}

impl Bullet {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            speed,
            spent: false,
        }
    }

    pub fn update(&mut self) {
        self.pos.y -= self.speed;
        if self.pos.y < 0.0 {
            self.spent = true;
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub speed: f32,
    /// Live bullets in firing order
    pub bullets: Vec<Bullet>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PLAYER_SPEED)
    }
}

impl Player {
    pub fn new(speed: f32) -> Self {
        Self {
            pos: Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT - PLAYER_START_OFFSET),
            speed,
            bullets: Vec::new(),
        }
    }

    /// Movement envelope: full width, bottom `PLAYER_BAND` pixels
    #[inline]
    pub fn envelope() -> (Vec2, Vec2) {
        (
            Vec2::new(0.0, FIELD_HEIGHT - PLAYER_BAND),
            Vec2::new(FIELD_WIDTH, FIELD_HEIGHT),
        )
    }

    /// Move from the held directions, then advance and reap bullets.
    ///
    /// Axes are independent, so diagonals cover more ground than straight moves.
    pub fn update(&mut self, input: &TickInput) {
        if input.left {
            self.pos.x -= self.speed;
        }
        if input.right {
            self.pos.x += self.speed;
        }
        if input.up {
            self.pos.y -= self.speed;
        }
        if input.down {
            self.pos.y += self.speed;
        }

        let (min, max) = Self::envelope();
        self.pos = self.pos.clamp(min, max);

        for bullet in &mut self.bullets {
            bullet.update();
        }
        self.bullets.retain(|b| !b.spent);
    }

    /// Fire a bullet from the ship's current position
    pub fn shoot(&mut self, bullet_speed: f32) {
        self.bullets.push(Bullet::new(self.pos, bullet_speed));
    }
}
