//! Astro Drift - a single-screen asteroid shooter
//!
//! Core modules:
//! - `sim`: Simulation (motion, wraparound, spawning, collisions, game flow)
//! - `config`: Tuning values injected at startup
//! - `input`: Input seam consumed once per tick
//! - `render`: Renderer-agnostic procedural geometry

pub mod config;
pub mod input;
pub mod render;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use input::{InputSource, ScriptedInput};
pub use sim::{GamePhase, Simulation, TickInput};

use glam::Vec2;

/// Classic tuning values, used as `GameConfig` defaults
pub mod consts {
    /// Simulation rate the driver paces to
    pub const TICKS_PER_SECOND: u32 = 60;

    /// World dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Ship defaults
    pub const SHIP_ROTATION_SPEED: f32 = 3.0; // degrees per tick
    pub const SHIP_ACCELERATION: f32 = 0.1;
    pub const SHIP_FRICTION: f32 = 0.98;
    pub const SHIP_RADIUS: f32 = 20.0;

    /// Projectile defaults
    pub const BULLET_SPEED: f32 = 7.0;
    pub const BULLET_LIFETIME: u32 = 60; // ticks
    pub const BULLET_RADIUS: f32 = 3.0;
    pub const FIRE_COOLDOWN_MS: u64 = 300;

    /// Asteroid defaults
    pub const ASTEROID_MIN_SPEED: f32 = 1.0;
    pub const ASTEROID_MAX_SPEED: f32 = 3.0;
    pub const ASTEROID_MIN_ROTATION: f32 = -2.0;
    pub const ASTEROID_MAX_ROTATION: f32 = 2.0;
    pub const ASTEROID_MIN_SIZE: u32 = 20;
    pub const ASTEROID_MAX_SIZE: u32 = 50;
    pub const ASTEROID_SPAWN_RATE: u32 = 60; // ticks between spawns
    pub const ASTEROID_SPAWN_MARGIN: f32 = 50.0; // how far outside the edge they appear

    /// Game flow
    pub const INITIAL_LIVES: u32 = 3;
    pub const EXPLOSION_DURATION: u32 = 20; // ticks
    pub const TITLE_REGION_WIDTH: f32 = 300.0;
    pub const TITLE_REGION_HEIGHT: f32 = 100.0;
    pub const BACKGROUND_SCROLL_SPEED: f32 = 1.0;
}

/// Unit vector for a heading in degrees (0 = up, clockwise positive)
///
/// Screen space has +y pointing down, so "up" is `(0, -1)`.
#[inline]
pub fn heading_to_direction(angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(rad.sin(), -rad.cos())
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}
