//! Rendering module
//!
//! Builds a triangle list per frame from a read-only view of the simulation.
//! No GPU or windowing dependency; a backend uploads `FrameBuilder::bytes()`.

pub mod shapes;
pub mod vertex;

pub use shapes::EXPLOSION_MAX_RADIUS;
pub use vertex::{Vertex, colors};

use glam::Vec2;

use crate::sim::{GamePhase, Simulation};

/// Consumes simulation state once per frame
///
/// Implementations must not mutate the simulation.
pub trait Renderer {
    fn render(&mut self, sim: &Simulation);
}

/// CPU-side frame assembly into a reused vertex buffer
#[derive(Debug, Default)]
pub struct FrameBuilder {
    vertices: Vec<Vertex>,
    /// World size of the last frame, for NDC mapping
    world: Vec2,
    frames: u64,
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn bytes(&self) -> &[u8] {
        vertex::as_bytes(&self.vertices)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Convert screen coordinates (origin top-left, y down) to NDC
    pub fn screen_to_ndc(&self, p: Vec2) -> Vec2 {
        if self.world.x <= 0.0 || self.world.y <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(p.x / self.world.x * 2.0 - 1.0, 1.0 - p.y / self.world.y * 2.0)
    }
}

impl Renderer for FrameBuilder {
    fn render(&mut self, sim: &Simulation) {
        let config = sim.config();
        self.world = config.world_size();
        self.vertices.clear();

        // Background is drawn in every phase
        self.vertices
            .extend(shapes::background(sim.background_offset, config.screen_width));

        match sim.phase {
            GamePhase::Start => {}
            GamePhase::Playing => {
                for asteroid in &sim.asteroids {
                    self.vertices.extend(shapes::asteroid(asteroid));
                }
                for bullet in &sim.bullets {
                    self.vertices.extend(shapes::rocket(bullet));
                }
                for explosion in &sim.explosions {
                    self.vertices.extend(shapes::explosion(explosion));
                }
                self.vertices
                    .extend(shapes::ship(&sim.ship, sim.ship.nose_offset));
                self.vertices
                    .extend(shapes::life_icons(sim.lives, config.screen_width));
            }
            GamePhase::GameOver => {
                self.vertices
                    .extend(shapes::life_icons(sim.lives, config.screen_width));
            }
        }

        self.frames += 1;
    }
}
