//! Shared motion state for everything that drifts across the screen
//!
//! Ships, projectiles and asteroids each embed a `Body` and expose their
//! per-kind behavior through the `Entity` trait. They live by value in
//! plain `Vec`s owned by the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Circle;
use crate::config::GameConfig;

/// Position, velocity and facing of a moving object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Facing in degrees, 0 = up, unbounded
    pub angle: f32,
    /// Cleared when the object should be dropped by its owner
    pub active: bool,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            angle: 0.0,
            active: true,
        }
    }

    /// Integrate one tick of motion and wrap around the world edges
    pub fn advance(&mut self, world: Vec2) {
        self.pos += self.vel;
        self.pos.x = wrap_snap(self.pos.x, world.x);
        self.pos.y = wrap_snap(self.pos.y, world.y);
    }
}

/// Toroidal wrap for one axis
///
/// Crossing an edge snaps to the opposite edge exactly (not by the overshoot),
/// so a coordinate of exactly `extent` is a legal resting value.
#[inline]
pub fn wrap_snap(value: f32, extent: f32) -> f32 {
    if value < 0.0 {
        extent
    } else if value > extent {
        0.0
    } else {
        value
    }
}

/// Behavior common to every collidable, moving object
pub trait Entity {
    fn body(&self) -> &Body;

    /// Advance by one tick
    fn advance(&mut self, config: &GameConfig);

    /// Circle used for collision tests
    fn collision_shape(&self) -> Circle;

    #[inline]
    fn is_active(&self) -> bool {
        self.body().active
    }
}
