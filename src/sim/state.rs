//! Simulation state
//!
//! Everything the renderer draws lives here. The tick logic that mutates it
//! is in `tick.rs`.

use std::sync::Arc;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::asteroid::Asteroid;
use super::explosion::Explosion;
use super::projectile::Projectile;
use super::ship::Ship;
use crate::config::{ConfigError, GameConfig};

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for a click on the title
    Start,
    /// Active gameplay
    Playing,
    /// Out of lives, waiting for a click to restart
    GameOver,
}

/// Something that happened during a tick, for logging and effect hooks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    ShotFired { pos: Vec2, angle: f32 },
    AsteroidSpawned { pos: Vec2, radius: f32 },
    AsteroidDestroyed { pos: Vec2, radius: f32 },
    ShipDestroyed { pos: Vec2, lives_left: u32 },
}

/// The whole game world
#[derive(Debug, Clone)]
pub struct Simulation {
    pub(super) config: Arc<GameConfig>,
    /// Run seed
    seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    pub ship: Ship,
    /// In firing order
    pub bullets: Vec<Projectile>,
    /// In spawn order
    pub asteroids: Vec<Asteroid>,
    pub explosions: Vec<Explosion>,
    pub score: u64,
    pub lives: u32,
    /// Ticks since the last asteroid spawn
    pub asteroid_spawn_timer: u32,
    /// Cosmetic scroll offset, cyclic over the screen width
    pub background_offset: f32,
    /// Wall-clock time of the last successful shot
    pub last_shot_ms: Option<u64>,
    events: Vec<GameEvent>,
}

impl Simulation {
    /// Create a simulation on the start screen
    ///
    /// `config` must already pass `GameConfig::validate`; an empty asteroid
    /// range makes the first spawn panic. Use `try_new` for configs built by
    /// hand.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid config: {config:?}");
        let ship = Ship::centered(&config);
        let lives = config.initial_lives;
        Self {
            config: Arc::new(config),
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Start,
            ship,
            bullets: Vec::new(),
            asteroids: Vec::new(),
            explosions: Vec::new(),
            score: 0,
            lives,
            asteroid_spawn_timer: 0,
            background_offset: 0.0,
            last_shot_ms: None,
            events: Vec::new(),
        }
    }

    /// Validate `config`, then create a simulation on the start screen
    pub fn try_new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, seed))
    }

    /// Back to the start screen with a fresh ship and empty field
    ///
    /// The RNG keeps running so consecutive games differ.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Start;
        self.ship = Ship::centered(&self.config);
        self.bullets.clear();
        self.asteroids.clear();
        self.explosions.clear();
        self.score = 0;
        self.lives = self.config.initial_lives;
        self.asteroid_spawn_timer = 0;
        self.background_offset = 0.0;
        self.last_shot_ms = None;
        log::debug!("Simulation reset");
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Events recorded since the last call, at most one tick's worth
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events recorded during the current tick, without draining them
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub(crate) fn clear_events(&mut self) {
        self.events.clear();
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Move to a new phase, logging the change
    pub(crate) fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        self.phase = to;
        log::info!("Phase {:?} -> {:?} (score {}, lives {})", from, to, self.score, self.lives);
        self.push_event(GameEvent::PhaseChanged { from, to });
    }

    /// Owned copy of everything a renderer reads
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            ship: self.ship.clone(),
            bullets: self.bullets.clone(),
            asteroids: self.asteroids.clone(),
            explosions: self.explosions.clone(),
            score: self.score,
            lives: self.lives,
            background_offset: self.background_offset,
        }
    }
}

/// Read-only view of one tick, safe to hand to another thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub ship: Ship,
    pub bullets: Vec<Projectile>,
    pub asteroids: Vec<Asteroid>,
    pub explosions: Vec<Explosion>,
    pub score: u64,
    pub lives: u32,
    pub background_offset: f32,
}
