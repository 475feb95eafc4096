//! Simulation module
//!
//! All gameplay logic lives here:
//! - One fixed step per tick, no frame-time scaling
//! - RNG owned by the simulation
//! - Stable iteration order (insertion order of each collection)
//! - No rendering or platform dependencies

pub mod asteroid;
pub mod collision;
pub mod entity;
pub mod explosion;
pub mod projectile;
pub mod ship;
pub mod state;
pub mod tick;

pub use asteroid::{Asteroid, SpawnEdge};
pub use collision::{Aabb, Circle, projectile_hits_asteroid, ship_hits_asteroid};
pub use entity::{Body, Entity, wrap_snap};
pub use explosion::Explosion;
pub use projectile::Projectile;
pub use ship::{Ship, Turn};
pub use state::{GameEvent, GamePhase, Simulation, Snapshot};
pub use tick::{TickInput, advance, handle_input, tick};
