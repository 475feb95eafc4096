//! Game configuration
//!
//! All tuning values are collected in one immutable struct handed to the
//! simulation at construction. Loaded from JSON when a file is supplied.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Error raised while loading or validating a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// File contents are not valid JSON for `GameConfig`
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// Parsed but out of range
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Tuning values for one run of the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === World ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Ship ===
    /// Degrees per rotate call
    pub ship_rotation_speed: f32,
    /// Velocity added per thrust call
    pub ship_acceleration: f32,
    /// Velocity multiplier per coasting tick (0, 1]
    pub ship_friction: f32,
    pub ship_radius: f32,
    /// Full height of the ship sprite, when the renderer knows it
    pub ship_visual_extent: Option<f32>,

    // === Projectiles ===
    pub bullet_speed: f32,
    /// Lifetime in ticks
    pub bullet_lifetime: u32,
    pub bullet_radius: f32,
    /// Minimum wall-clock gap between shots
    pub fire_cooldown_ms: u64,

    // === Asteroids ===
    pub asteroid_min_speed: f32,
    pub asteroid_max_speed: f32,
    pub asteroid_min_rotation: f32,
    pub asteroid_max_rotation: f32,
    pub asteroid_min_size: u32,
    pub asteroid_max_size: u32,
    /// Ticks between spawns
    pub asteroid_spawn_rate: u32,
    pub asteroid_spawn_margin: f32,

    // === Game flow ===
    pub initial_lives: u32,
    /// Explosion lifetime in ticks
    pub explosion_duration: u32,
    pub title_region_width: f32,
    pub title_region_height: f32,
    pub background_scroll_speed: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            ship_rotation_speed: SHIP_ROTATION_SPEED,
            ship_acceleration: SHIP_ACCELERATION,
            ship_friction: SHIP_FRICTION,
            ship_radius: SHIP_RADIUS,
            ship_visual_extent: None,

            bullet_speed: BULLET_SPEED,
            bullet_lifetime: BULLET_LIFETIME,
            bullet_radius: BULLET_RADIUS,
            fire_cooldown_ms: FIRE_COOLDOWN_MS,

            asteroid_min_speed: ASTEROID_MIN_SPEED,
            asteroid_max_speed: ASTEROID_MAX_SPEED,
            asteroid_min_rotation: ASTEROID_MIN_ROTATION,
            asteroid_max_rotation: ASTEROID_MAX_ROTATION,
            asteroid_min_size: ASTEROID_MIN_SIZE,
            asteroid_max_size: ASTEROID_MAX_SIZE,
            asteroid_spawn_rate: ASTEROID_SPAWN_RATE,
            asteroid_spawn_margin: ASTEROID_SPAWN_MARGIN,

            initial_lives: INITIAL_LIVES,
            explosion_duration: EXPLOSION_DURATION,
            title_region_width: TITLE_REGION_WIDTH,
            title_region_height: TITLE_REGION_HEIGHT,
            background_scroll_speed: BACKGROUND_SCROLL_SPEED,
        }
    }
}

impl GameConfig {
    /// World size as a vector
    #[inline]
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Center of the screen (ship spawn point)
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.world_size() / 2.0
    }

    /// Whether a point lies inside the clickable title region on the start screen
    pub fn title_region_contains(&self, point: Vec2) -> bool {
        let half = Vec2::new(self.title_region_width, self.title_region_height) / 2.0;
        let min = self.center() - half;
        let max = self.center() + half;
        // Right and bottom edges are exclusive
        point.x >= min.x && point.x < max.x && point.y >= min.y && point.y < max.y
    }

    /// Check every value is inside the range the simulation is defined over
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(ConfigError::Invalid("screen size must be positive"));
        }
        if !(self.ship_friction > 0.0 && self.ship_friction <= 1.0) {
            return Err(ConfigError::Invalid("ship_friction must be in (0, 1]"));
        }
        if self.ship_radius <= 0.0 || self.bullet_radius <= 0.0 {
            return Err(ConfigError::Invalid("collision radii must be positive"));
        }
        if self.ship_visual_extent.is_some_and(|h| h <= 0.0) {
            return Err(ConfigError::Invalid("ship_visual_extent must be positive"));
        }
        if self.bullet_lifetime == 0 {
            return Err(ConfigError::Invalid("bullet_lifetime must be at least 1 tick"));
        }
        if self.asteroid_min_speed > self.asteroid_max_speed {
            return Err(ConfigError::Invalid("asteroid speed range is empty"));
        }
        if self.asteroid_min_rotation > self.asteroid_max_rotation {
            return Err(ConfigError::Invalid("asteroid rotation range is empty"));
        }
        if self.asteroid_min_size == 0 || self.asteroid_min_size > self.asteroid_max_size {
            return Err(ConfigError::Invalid("asteroid size range is empty"));
        }
        if self.asteroid_spawn_rate == 0 {
            return Err(ConfigError::Invalid("asteroid_spawn_rate must be at least 1"));
        }
        if self.initial_lives == 0 {
            return Err(ConfigError::Invalid("initial_lives must be at least 1"));
        }
        if self.explosion_duration == 0 {
            return Err(ConfigError::Invalid("explosion_duration must be at least 1 tick"));
        }
        Ok(())
    }

    /// Parse and validate a JSON document; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load a config file, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{e} ({}), using default config", path.display());
                Self::default()
            }
        }
    }
}
