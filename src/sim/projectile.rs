//! Projectiles fired from the ship's nose

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Circle;
use super::entity::{Body, Entity};
use crate::config::GameConfig;
use crate::heading_to_direction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub body: Body,
    /// Ticks left before the projectile burns out
    pub remaining_lifetime: u32,
    pub radius: f32,
}

impl Projectile {
    /// Launch from `pos` along heading `angle` (degrees)
    pub fn new(pos: Vec2, angle: f32, config: &GameConfig) -> Self {
        let mut body = Body::new(pos, heading_to_direction(angle) * config.bullet_speed);
        body.angle = angle;
        Self {
            body,
            remaining_lifetime: config.bullet_lifetime,
            radius: config.bullet_radius,
        }
    }
}

impl Entity for Projectile {
    fn body(&self) -> &Body {
        &self.body
    }

    fn advance(&mut self, config: &GameConfig) {
        self.body.advance(config.world_size());
        self.remaining_lifetime = self.remaining_lifetime.saturating_sub(1);
        if self.remaining_lifetime == 0 {
            self.body.active = false;
        }
    }

    fn collision_shape(&self) -> Circle {
        Circle::new(self.body.pos, self.radius)
    }
}
