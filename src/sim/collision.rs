//! Collision tests between projectiles, asteroids and the ship
//!
//! Every test is two-stage: an axis-aligned box overlap as a cheap prefilter,
//! then a center distance check that decides the hit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, half_extent: f32) -> Self {
        let half = Vec2::splat(half_extent);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap; boxes that only share an edge do not collide
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Collision circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Bounding box of the circle
    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.center, self.radius)
    }
}

/// Projectile hits when its center is inside the asteroid
///
/// The projectile's own size only matters for the box prefilter.
pub fn projectile_hits_asteroid(projectile: &Circle, asteroid: &Circle) -> bool {
    projectile.bounds().overlaps(&asteroid.bounds())
        && projectile.center.distance(asteroid.center) < asteroid.radius
}

/// Ship hits when the two circles overlap
pub fn ship_hits_asteroid(ship: &Circle, asteroid: &Circle) -> bool {
    ship.bounds().overlaps(&asteroid.bounds())
        && ship.center.distance(asteroid.center) < ship.radius + asteroid.radius
}
