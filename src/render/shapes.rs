//! Shape generation for 2D primitives and game objects
//!
//! Everything is emitted as triangle lists. Object shapes are described in
//! local space with "up" as -y, then rotated by the object's heading.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::TAU;

use super::vertex::{Vertex, colors};
use crate::sim::{Asteroid, Explosion, Projectile, Ship};

/// Largest explosion radius, reached on the first tick
pub const EXPLOSION_MAX_RADIUS: f32 = 30.0;
/// Line width for outlines
const OUTLINE_WIDTH: f32 = 1.5;

/// Map a local-space point into the world for an object at `pos` facing `angle_deg`
#[inline]
pub fn to_world(pos: Vec2, angle_deg: f32, local: Vec2) -> Vec2 {
    pos + Vec2::from_angle(angle_deg.to_radians()).rotate(local)
}

#[inline]
fn push_triangle(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(c.x, c.y, color));
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        push_triangle(
            &mut vertices,
            center,
            center + Vec2::from_angle(theta1) * radius,
            center + Vec2::from_angle(theta2) * radius,
            color,
        );
    }

    vertices
}

/// Filled polygon as a fan around `center`
///
/// Only correct for polygons that are star-shaped around `center`, which
/// covers every outline generated here.
pub fn polygon_fan(center: Vec2, points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(points.len() * 3);
    for (i, &p) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        push_triangle(&mut vertices, center, p, next, color);
    }
    vertices
}

/// Closed outline of `width`, one quad per edge
pub fn outline(points: &[Vec2], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(points.len() * 6);
    let half = width / 2.0;

    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        let dir = (b - a).normalize_or_zero();
        let perp = Vec2::new(-dir.y, dir.x) * half;

        // Two triangles
        push_triangle(&mut vertices, a + perp, a - perp, b + perp, color);
        push_triangle(&mut vertices, b + perp, a - perp, b - perp, color);
    }

    vertices
}

/// Ship hull, cockpit detail and, while thrusting, an exhaust flame
///
/// `half_size` is half the sprite height; the nose sits that far ahead.
pub fn ship(ship: &Ship, half_size: f32) -> Vec<Vertex> {
    let h = half_size;
    let pos = ship.body.pos;
    let angle = ship.body.angle;
    let world = |x: f32, y: f32| to_world(pos, angle, Vec2::new(x, y));

    let mut vertices = Vec::with_capacity(18);

    if ship.thrusting {
        // Flame scales with the hull
        let s = h / 20.0;
        let outer = [
            world(0.0, h),
            world(-h / 3.0, h + 15.0 * s),
            world(0.0, h + 25.0 * s),
            world(h / 3.0, h + 15.0 * s),
        ];
        vertices.extend(polygon_fan(world(0.0, h + 12.0 * s), &outer, colors::FLAME_OUTER));
        let inner = [
            world(0.0, h + 5.0 * s),
            world(-h / 5.0, h + 15.0 * s),
            world(0.0, h + 20.0 * s),
            world(h / 5.0, h + 15.0 * s),
        ];
        vertices.extend(polygon_fan(world(0.0, h + 14.0 * s), &inner, colors::FLAME_INNER));
    }

    push_triangle(
        &mut vertices,
        world(0.0, -h),
        world(-h, h),
        world(h, h),
        colors::SHIP_HULL,
    );
    push_triangle(
        &mut vertices,
        world(0.0, -h / 3.0),
        world(-h / 2.0, h),
        world(h / 2.0, h),
        colors::SHIP_DETAIL,
    );

    vertices
}

/// Rocket-shaped projectile pointing along its heading
pub fn rocket(projectile: &Projectile) -> Vec<Vertex> {
    let pos = projectile.body.pos;
    let angle = projectile.body.angle;
    let world = |x: f32, y: f32| to_world(pos, angle, Vec2::new(x, y));

    let mut vertices = Vec::with_capacity(12);

    // Body
    push_triangle(&mut vertices, world(-2.0, -4.0), world(-2.0, 7.0), world(2.0, -4.0), colors::ROCKET_BODY);
    push_triangle(&mut vertices, world(2.0, -4.0), world(-2.0, 7.0), world(2.0, 7.0), colors::ROCKET_BODY);
    // Nose cone
    push_triangle(&mut vertices, world(0.0, -8.0), world(-2.0, -4.0), world(2.0, -4.0), colors::ROCKET_NOSE);
    // Exhaust
    push_triangle(&mut vertices, world(-1.5, 7.0), world(0.0, 10.0), world(1.5, 7.0), colors::ROCKET_EXHAUST);

    vertices
}

/// Jagged outline and craters for one asteroid, in local space
#[derive(Debug, Clone, PartialEq)]
pub struct AsteroidShape {
    pub outline: Vec<Vec2>,
    /// (center, radius)
    pub craters: Vec<(Vec2, f32)>,
}

impl AsteroidShape {
    /// Same seed and size always give the same shape
    pub fn generate(shape_seed: u32, size: f32) -> Self {
        let mut rng = Pcg32::seed_from_u64(shape_seed as u64);

        let num_points = rng.random_range(8..=12);
        let outline = (0..num_points)
            .map(|i| {
                let theta = TAU * i as f32 / num_points as f32;
                let jitter: f32 = rng.random_range(0.7..=1.0);
                Vec2::from_angle(theta) * size * jitter
            })
            .collect();

        let num_craters = rng.random_range(2..=5);
        let craters = (0..num_craters)
            .map(|_| {
                let offset = Vec2::new(
                    rng.random_range(-0.5..=0.5),
                    rng.random_range(-0.5..=0.5),
                ) * size;
                let scale: f32 = rng.random_range(0.125..=0.25);
                let radius = size * scale;
                (offset, radius)
            })
            .collect();

        Self { outline, craters }
    }
}

/// Filled, outlined and cratered asteroid
pub fn asteroid(asteroid: &Asteroid) -> Vec<Vertex> {
    let pos = asteroid.body.pos;
    let angle = asteroid.body.angle;
    let shape = AsteroidShape::generate(asteroid.shape_seed, asteroid.radius);

    let points: Vec<Vec2> = shape.outline.iter().map(|&p| to_world(pos, angle, p)).collect();

    let mut vertices = polygon_fan(pos, &points, colors::ASTEROID_FILL);
    for &(offset, radius) in &shape.craters {
        vertices.extend(circle(to_world(pos, angle, offset), radius, colors::ASTEROID_CRATER, 10));
    }
    vertices.extend(outline(&points, OUTLINE_WIDTH * 2.0, colors::ASTEROID_EDGE));
    vertices
}

/// Shrinking fireball with a ring of sparks
pub fn explosion(explosion: &Explosion) -> Vec<Vertex> {
    let radius = EXPLOSION_MAX_RADIUS * (1.0 - explosion.progress());
    if radius <= 0.0 {
        return Vec::new();
    }

    let mut vertices = circle(explosion.pos, radius, colors::EXPLOSION_CORE, 16);
    let spark_size = (radius * 0.3).max(1.0);
    for i in 0..8 {
        let theta = TAU * i as f32 / 8.0;
        let spark = explosion.pos + Vec2::from_angle(theta) * radius * 1.5;
        vertices.extend(circle(spark, spark_size, colors::EXPLOSION_SPARK, 6));
    }
    vertices
}

/// Slowly scrolling field of faint rock outlines
pub fn background(offset: f32, width: f32) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for i in 0..5u32 {
        let x = (offset + i as f32 * 200.0).rem_euclid(width);
        for j in 0..4u32 {
            let y = j as f32 * 150.0;
            let size = 15.0 + i as f32 * 2.0;

            // Stable per-rock jitter so the field doesn't shimmer
            let mut rng = Pcg32::seed_from_u64((i * 4 + j) as u64);
            let points: Vec<Vec2> = (0..6)
                .map(|k| {
                    let theta = TAU * k as f32 / 6.0;
                    let jitter: f32 = rng.random_range(0.8..=1.0);
                    Vec2::new(x, y) + Vec2::from_angle(theta) * size * jitter
                })
                .collect();
            vertices.extend(outline(&points, OUTLINE_WIDTH, colors::BACKGROUND_ROCK));
        }
    }

    vertices
}

/// Remaining lives as small ships along the top-right corner
pub fn life_icons(lives: u32, width: f32) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for i in 0..lives {
        let center = Vec2::new(width - 50.0 - i as f32 * 40.0, 30.0);
        let h = 15.0 / 2.0;
        push_triangle(
            &mut vertices,
            center + Vec2::new(0.0, -h),
            center + Vec2::new(-h, h),
            center + Vec2::new(h, h),
            colors::SHIP_HULL,
        );
    }
    vertices
}
