//! The player's ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Circle;
use super::entity::{Body, Entity};
use crate::config::GameConfig;
use crate::heading_to_direction;

/// Rotation input for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Turn {
    Left,
    #[default]
    None,
    Right,
}

impl Turn {
    /// -1, 0 or +1
    pub fn sign(self) -> f32 {
        match self {
            Turn::Left => -1.0,
            Turn::None => 0.0,
            Turn::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub body: Body,
    pub thrusting: bool,
    pub radius: f32,
    /// Distance from center to the point projectiles leave from
    pub nose_offset: f32,
}

impl Ship {
    pub fn new(pos: Vec2, config: &GameConfig) -> Self {
        Self {
            body: Body::new(pos, Vec2::ZERO),
            thrusting: false,
            radius: config.ship_radius,
            nose_offset: config
                .ship_visual_extent
                .map(|extent| extent / 2.0)
                .unwrap_or(config.ship_radius),
        }
    }

    /// Fresh ship at the center of the screen, at rest and facing up
    pub fn centered(config: &GameConfig) -> Self {
        Self::new(config.center(), config)
    }

    pub fn rotate(&mut self, turn: Turn, config: &GameConfig) {
        self.body.angle += turn.sign() * config.ship_rotation_speed;
    }

    /// Fire the engine for this tick: impulse along the current facing
    pub fn thrust(&mut self, config: &GameConfig) {
        self.thrusting = true;
        self.body.vel += heading_to_direction(self.body.angle) * config.ship_acceleration;
    }

    pub fn stop_thrust(&mut self) {
        self.thrusting = false;
    }

    /// World point at the tip of the ship
    pub fn nose_position(&self) -> Vec2 {
        self.body.pos + heading_to_direction(self.body.angle) * self.nose_offset
    }
}

impl Entity for Ship {
    fn body(&self) -> &Body {
        &self.body
    }

    fn advance(&mut self, config: &GameConfig) {
        // No friction while the engine is on; speed is otherwise uncapped
        if !self.thrusting {
            self.body.vel *= config.ship_friction;
        }
        self.body.advance(config.world_size());
    }

    fn collision_shape(&self) -> Circle {
        Circle::new(self.body.pos, self.radius)
    }
}
