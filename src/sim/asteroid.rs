//! Asteroids: spawned just off one screen edge, drifting and spinning

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Circle;
use super::entity::{Body, Entity};
use crate::config::GameConfig;

/// Screen edge an asteroid enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnEdge {
    Top,
    Right,
    Bottom,
    Left,
}

impl SpawnEdge {
    pub const ALL: [SpawnEdge; 4] = [
        SpawnEdge::Top,
        SpawnEdge::Right,
        SpawnEdge::Bottom,
        SpawnEdge::Left,
    ];

    /// Spawn point for this edge; `t` in [0, 1] runs along the edge
    pub fn spawn_point(self, t: f32, config: &GameConfig) -> Vec2 {
        let w = config.screen_width;
        let h = config.screen_height;
        let margin = config.asteroid_spawn_margin;
        match self {
            SpawnEdge::Top => Vec2::new(t * w, -margin),
            SpawnEdge::Right => Vec2::new(w + margin, t * h),
            SpawnEdge::Bottom => Vec2::new(t * w, h + margin),
            SpawnEdge::Left => Vec2::new(-margin, t * h),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub body: Body,
    pub radius: f32,
    /// Degrees per tick, visual only
    pub rotation_speed: f32,
    /// Seeds the procedural outline so it stays stable frame to frame
    pub shape_seed: u32,
}

impl Asteroid {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, rotation_speed: f32) -> Self {
        Self {
            body: Body::new(pos, vel),
            radius,
            rotation_speed,
            shape_seed: 0,
        }
    }

    /// Random asteroid just outside a random screen edge
    pub fn spawn<R: Rng>(rng: &mut R, config: &GameConfig) -> Self {
        let edge = SpawnEdge::ALL[rng.random_range(0..SpawnEdge::ALL.len())];
        let pos = edge.spawn_point(rng.random_range(0.0..=1.0), config);

        let heading = rng.random_range(0.0..std::f32::consts::TAU);
        let speed = rng.random_range(config.asteroid_min_speed..=config.asteroid_max_speed);
        let vel = Vec2::from_angle(heading) * speed;

        let rotation_speed =
            rng.random_range(config.asteroid_min_rotation..=config.asteroid_max_rotation);
        let radius = rng.random_range(config.asteroid_min_size..=config.asteroid_max_size) as f32;

        let mut asteroid = Self::new(pos, vel, radius, rotation_speed);
        asteroid.shape_seed = rng.random();
        asteroid
    }
}

impl Entity for Asteroid {
    fn body(&self) -> &Body {
        &self.body
    }

    fn advance(&mut self, config: &GameConfig) {
        self.body.angle += self.rotation_speed;
        self.body.advance(config.world_size());
    }

    fn collision_shape(&self) -> Circle {
        Circle::new(self.body.pos, self.radius)
    }
}
