//! Per-tick game loop
//!
//! A driver calls `tick` once per frame with that frame's input: input is
//! applied first (phase changes, ship controls, firing), then the world
//! advances by exactly one step.

use std::sync::Arc;

use glam::Vec2;

use super::asteroid::Asteroid;
use super::collision::{projectile_hits_asteroid, ship_hits_asteroid};
use super::entity::Entity;
use super::explosion::Explosion;
use super::projectile::Projectile;
use super::ship::{Ship, Turn};
use super::state::{GameEvent, GamePhase, Simulation};

/// Input sampled once per tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Click/confirm position this tick, if any
    pub confirm: Option<Vec2>,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    /// Fire button held
    pub fire: bool,
    /// Wall-clock time in milliseconds, drives the fire cooldown
    pub now_ms: u64,
}

/// Apply input, then advance one step
///
/// Events from the previous tick are discarded first, so a driver that never
/// calls `take_events` still holds only one tick's worth.
pub fn tick(sim: &mut Simulation, input: &TickInput) {
    sim.clear_events();
    handle_input(sim, input);
    advance(sim);
}

/// Apply phase transitions and ship controls for this tick
pub fn handle_input(sim: &mut Simulation, input: &TickInput) {
    if let Some(point) = input.confirm {
        match sim.phase {
            GamePhase::Start => {
                if sim.config().title_region_contains(point) {
                    sim.set_phase(GamePhase::Playing);
                }
            }
            GamePhase::GameOver => {
                sim.reset();
                sim.set_phase(GamePhase::Playing);
            }
            GamePhase::Playing => {}
        }
    }

    if sim.phase != GamePhase::Playing {
        return;
    }

    let config = Arc::clone(&sim.config);
    // Both held cancel out
    if input.rotate_left {
        sim.ship.rotate(Turn::Left, &config);
    }
    if input.rotate_right {
        sim.ship.rotate(Turn::Right, &config);
    }

    if input.thrust {
        sim.ship.thrust(&config);
    } else {
        sim.ship.stop_thrust();
    }

    if input.fire && fire_ready(sim, input.now_ms) {
        let pos = sim.ship.nose_position();
        let angle = sim.ship.body.angle;
        sim.bullets.push(Projectile::new(pos, angle, &config));
        sim.last_shot_ms = Some(input.now_ms);
        log::trace!("Shot fired at ({:.1}, {:.1})", pos.x, pos.y);
        sim.push_event(GameEvent::ShotFired { pos, angle });
    }
}

/// Whether enough wall-clock time has passed since the last shot
fn fire_ready(sim: &Simulation, now_ms: u64) -> bool {
    sim.last_shot_ms
        .is_none_or(|last| now_ms.saturating_sub(last) > sim.config().fire_cooldown_ms)
}

/// Advance the world by one step; no-op outside `Playing`
pub fn advance(sim: &mut Simulation) {
    if sim.phase != GamePhase::Playing {
        return;
    }
    let config = Arc::clone(&sim.config);

    sim.background_offset = (sim.background_offset - config.background_scroll_speed)
        .rem_euclid(config.screen_width);

    sim.ship.advance(&config);

    for bullet in &mut sim.bullets {
        bullet.advance(&config);
    }
    sim.bullets.retain(|b| b.is_active());

    sim.asteroid_spawn_timer += 1;
    if sim.asteroid_spawn_timer >= config.asteroid_spawn_rate {
        let asteroid = Asteroid::spawn(&mut sim.rng, &config);
        log::debug!(
            "Asteroid spawned at ({:.0}, {:.0}) r={}",
            asteroid.body.pos.x,
            asteroid.body.pos.y,
            asteroid.radius
        );
        sim.push_event(GameEvent::AsteroidSpawned {
            pos: asteroid.body.pos,
            radius: asteroid.radius,
        });
        sim.asteroids.push(asteroid);
        sim.asteroid_spawn_timer = 0;
    }

    for asteroid in &mut sim.asteroids {
        asteroid.advance(&config);
    }

    for explosion in &mut sim.explosions {
        explosion.advance();
    }
    sim.explosions.retain(|e| e.active);

    resolve_projectile_hits(sim);
    resolve_ship_hit(sim);
}

/// Each projectile destroys at most one asteroid per tick
///
/// Hits are marked first (inactive flag) and both collections are compacted
/// afterwards, so an asteroid claimed by an earlier projectile is skipped.
fn resolve_projectile_hits(sim: &mut Simulation) {
    let duration = sim.config().explosion_duration;
    let mut destroyed = Vec::new();

    for bullet in &mut sim.bullets {
        let shot = bullet.collision_shape();
        let target = sim
            .asteroids
            .iter_mut()
            .filter(|a| a.is_active())
            .find(|a| projectile_hits_asteroid(&shot, &a.collision_shape()));

        if let Some(asteroid) = target {
            asteroid.body.active = false;
            bullet.body.active = false;
            destroyed.push((asteroid.body.pos, asteroid.radius));
        }
    }

    if destroyed.is_empty() {
        return;
    }

    sim.bullets.retain(|b| b.is_active());
    sim.asteroids.retain(|a| a.is_active());
    for (pos, radius) in destroyed {
        sim.explosions.push(Explosion::new(pos, duration));
        sim.score += 1;
        log::debug!("Asteroid destroyed at ({:.0}, {:.0}), score {}", pos.x, pos.y, sim.score);
        sim.push_event(GameEvent::AsteroidDestroyed { pos, radius });
    }
}

/// At most one ship collision is processed per tick
fn resolve_ship_hit(sim: &mut Simulation) {
    let ship_shape = sim.ship.collision_shape();
    let Some(index) = sim
        .asteroids
        .iter()
        .position(|a| ship_hits_asteroid(&ship_shape, &a.collision_shape()))
    else {
        return;
    };

    let asteroid = sim.asteroids.remove(index);
    let duration = sim.config().explosion_duration;
    sim.explosions.push(Explosion::new(asteroid.body.pos, duration));
    sim.lives = sim.lives.saturating_sub(1);

    log::info!("Ship destroyed, {} lives left", sim.lives);
    sim.push_event(GameEvent::ShipDestroyed {
        pos: ship_shape.center,
        lives_left: sim.lives,
    });

    if sim.lives == 0 {
        sim.set_phase(GamePhase::GameOver);
    } else {
        sim.ship = Ship::centered(sim.config());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn playing(config: GameConfig) -> Simulation {
        let mut sim = Simulation::new(config, 12345);
        sim.phase = GamePhase::Playing;
        sim
    }

    fn still_asteroid(pos: Vec2, radius: f32) -> Asteroid {
        Asteroid::new(pos, Vec2::ZERO, radius, 0.0)
    }

    #[test]
    fn test_click_outside_title_stays_on_start() {
        let mut sim = Simulation::new(GameConfig::default(), 1);
        let input = TickInput {
            confirm: Some(Vec2::new(5.0, 5.0)),
            ..Default::default()
        };
        tick(&mut sim, &input);
        assert_eq!(sim.phase, GamePhase::Start);
    }

    #[test]
    fn test_click_on_title_starts_game() {
        let mut sim = Simulation::new(GameConfig::default(), 1);
        let center = sim.config().center();
        let input = TickInput {
            confirm: Some(center),
            ..Default::default()
        };
        tick(&mut sim, &input);
        assert_eq!(sim.phase, GamePhase::Playing);
        assert_eq!(sim.asteroid_spawn_timer, 1);
    }

    #[test]
    fn test_start_screen_is_passive() {
        let mut sim = Simulation::new(GameConfig::default(), 1);
        sim.ship.body.vel = Vec2::new(5.0, 0.0);
        let input = TickInput {
            thrust: true,
            fire: true,
            rotate_left: true,
            ..Default::default()
        };
        for _ in 0..100 {
            tick(&mut sim, &input);
        }
        assert_eq!(sim.ship.body.pos, sim.config().center());
        assert_eq!(sim.ship.body.angle, 0.0);
        assert!(sim.bullets.is_empty());
        assert!(sim.asteroids.is_empty());
        assert_eq!(sim.asteroid_spawn_timer, 0);
        assert_eq!(sim.background_offset, 0.0);
    }

    #[test]
    fn test_click_on_game_over_resets_and_plays() {
        let mut sim = playing(GameConfig::default());
        sim.phase = GamePhase::GameOver;
        sim.score = 9;
        sim.lives = 0;
        sim.asteroids.push(still_asteroid(Vec2::new(50.0, 50.0), 30.0));

        // Any point works on the game over screen
        let input = TickInput {
            confirm: Some(Vec2::new(1.0, 1.0)),
            ..Default::default()
        };
        handle_input(&mut sim, &input);
        assert_eq!(sim.phase, GamePhase::Playing);
        assert_eq!(sim.score, 0);
        assert_eq!(sim.lives, sim.config().initial_lives);
        assert!(sim.asteroids.is_empty());
    }

    #[test]
    fn test_fire_cooldown_is_wall_clock() {
        let mut sim = playing(GameConfig::default());
        let mut fire = TickInput {
            fire: true,
            ..Default::default()
        };

        for (now_ms, expected) in [(1000, 1), (1100, 1), (1300, 1), (1301, 2), (1500, 2), (1602, 3)] {
            fire.now_ms = now_ms;
            handle_input(&mut sim, &fire);
            assert_eq!(sim.bullets.len(), expected, "at {now_ms} ms");
        }
    }

    #[test]
    fn test_shot_leaves_from_nose_along_facing() {
        let mut sim = playing(GameConfig::default());
        sim.ship.body.angle = 90.0;
        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        handle_input(&mut sim, &input);

        let shot = &sim.bullets[0];
        assert_eq!(shot.body.pos, sim.ship.nose_position());
        assert_eq!(shot.body.angle, 90.0);
        assert!(shot.body.vel.x > 0.0);
        assert!(matches!(sim.events()[0], GameEvent::ShotFired { .. }));
    }

    #[test]
    fn test_controls_rotate_and_thrust() {
        let mut sim = playing(GameConfig::default());
        let input = TickInput {
            rotate_right: true,
            thrust: true,
            ..Default::default()
        };
        handle_input(&mut sim, &input);
        assert_eq!(sim.ship.body.angle, 3.0);
        assert!(sim.ship.thrusting);

        // Releasing thrust stops the engine; both turns cancel
        let input = TickInput {
            rotate_left: true,
            rotate_right: true,
            ..Default::default()
        };
        handle_input(&mut sim, &input);
        assert_eq!(sim.ship.body.angle, 3.0);
        assert!(!sim.ship.thrusting);
    }

    #[test]
    fn test_spawn_cadence() {
        // Huge world so nothing drifts into the ship during the test
        let config = GameConfig {
            screen_width: 20_000.0,
            screen_height: 20_000.0,
            ..Default::default()
        };
        let mut sim = playing(config);

        for t in 1..=300u32 {
            advance(&mut sim);
            assert_eq!(sim.asteroids.len() as u32, t / 60, "after tick {t}");
        }
    }

    #[test]
    fn test_spawn_every_tick_with_rate_one() {
        let config = GameConfig {
            screen_width: 20_000.0,
            screen_height: 20_000.0,
            asteroid_spawn_rate: 1,
            ..Default::default()
        };
        let mut sim = playing(config);
        for _ in 0..5 {
            advance(&mut sim);
        }
        assert_eq!(sim.asteroids.len(), 5);
    }

    #[test]
    fn test_projectile_destroys_one_of_two_overlapping_asteroids() {
        let config = GameConfig::default();
        let mut sim = playing(config.clone());

        // Facing up; after one step the shot sits at (100, 93)
        sim.bullets.push(Projectile::new(Vec2::new(100.0, 100.0), 0.0, &config));
        sim.asteroids.push(still_asteroid(Vec2::new(95.0, 93.0), 40.0));
        sim.asteroids.push(still_asteroid(Vec2::new(105.0, 93.0), 40.0));

        advance(&mut sim);

        assert_eq!(sim.score, 1);
        assert_eq!(sim.asteroids.len(), 1);
        assert!(sim.bullets.is_empty());
        assert_eq!(sim.explosions.len(), 1);
        // First in order is the one destroyed
        assert_eq!(sim.asteroids[0].body.pos, Vec2::new(105.0, 93.0));
        assert_eq!(sim.explosions[0].pos, Vec2::new(95.0, 93.0));
    }

    #[test]
    fn test_two_projectiles_do_not_share_an_asteroid() {
        let config = GameConfig::default();
        let mut sim = playing(config.clone());
        sim.bullets.push(Projectile::new(Vec2::new(100.0, 100.0), 0.0, &config));
        sim.bullets.push(Projectile::new(Vec2::new(102.0, 100.0), 0.0, &config));
        sim.asteroids.push(still_asteroid(Vec2::new(100.0, 93.0), 40.0));

        advance(&mut sim);

        assert_eq!(sim.score, 1);
        assert!(sim.asteroids.is_empty());
        // Second projectile had nothing left to hit
        assert_eq!(sim.bullets.len(), 1);
        assert_eq!(sim.bullets[0].body.pos.x, 102.0);
    }

    #[test]
    fn test_ship_hit_loses_life_and_respawns() {
        let mut sim = playing(GameConfig::default());
        let center = sim.config().center();
        sim.lives = 2;
        sim.ship.body.pos = center + Vec2::new(10.0, 0.0);
        sim.ship.body.vel = Vec2::new(0.0, 0.0);
        sim.ship.body.angle = 45.0;
        sim.asteroids.push(still_asteroid(center + Vec2::new(30.0, 0.0), 25.0));

        advance(&mut sim);

        assert_eq!(sim.lives, 1);
        assert_eq!(sim.phase, GamePhase::Playing);
        assert!(sim.asteroids.is_empty());
        assert_eq!(sim.explosions.len(), 1);
        assert_eq!(sim.ship.body.pos, center);
        assert_eq!(sim.ship.body.vel, Vec2::ZERO);
        assert_eq!(sim.ship.body.angle, 0.0);
        assert!(!sim.ship.thrusting);
    }

    #[test]
    fn test_last_life_ends_game() {
        let mut sim = playing(GameConfig::default());
        let center = sim.config().center();
        sim.lives = 1;
        sim.asteroids.push(still_asteroid(center, 25.0));

        advance(&mut sim);

        assert_eq!(sim.lives, 0);
        assert_eq!(sim.phase, GamePhase::GameOver);
        assert!(sim.take_events().iter().any(|e| matches!(
            e,
            GameEvent::PhaseChanged {
                to: GamePhase::GameOver,
                ..
            }
        )));

        // Nothing moves after game over
        let before = sim.snapshot();
        advance(&mut sim);
        assert_eq!(sim.snapshot(), before);
    }

    #[test]
    fn test_one_ship_hit_per_tick() {
        let mut sim = playing(GameConfig::default());
        let center = sim.config().center();
        sim.lives = 3;
        sim.asteroids.push(still_asteroid(center + Vec2::new(5.0, 0.0), 25.0));
        sim.asteroids.push(still_asteroid(center - Vec2::new(5.0, 0.0), 25.0));

        advance(&mut sim);
        assert_eq!(sim.lives, 2);
        assert_eq!(sim.asteroids.len(), 1);
        // The survivor was spawned second
        assert_eq!(sim.asteroids[0].body.pos, center - Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_expired_projectiles_are_removed() {
        let config = GameConfig {
            bullet_lifetime: 3,
            ..Default::default()
        };
        let mut sim = playing(config.clone());
        sim.bullets.push(Projectile::new(Vec2::new(50.0, 500.0), 0.0, &config));

        advance(&mut sim);
        advance(&mut sim);
        assert_eq!(sim.bullets.len(), 1);
        advance(&mut sim);
        assert!(sim.bullets.is_empty());
    }

    #[test]
    fn test_explosions_expire() {
        let mut sim = playing(GameConfig::default());
        sim.explosions.push(Explosion::new(Vec2::new(10.0, 10.0), 2));
        advance(&mut sim);
        assert_eq!(sim.explosions.len(), 1);
        advance(&mut sim);
        assert!(sim.explosions.is_empty());
    }

    #[test]
    fn test_background_offset_scrolls_and_wraps() {
        let mut sim = playing(GameConfig::default());
        advance(&mut sim);
        assert_eq!(sim.background_offset, 799.0);
        advance(&mut sim);
        assert_eq!(sim.background_offset, 798.0);
    }

    #[test]
    fn test_event_buffer_holds_one_tick() {
        let mut sim = playing(GameConfig::default());
        for i in 0..6000u64 {
            let input = TickInput {
                fire: true,
                now_ms: i * 1000 / 60,
                ..Default::default()
            };
            tick(&mut sim, &input);
            // Shot, spawn, ship hit, phase change and one kill per live bullet
            assert!(sim.events().len() < 10);
        }

        // Earlier ticks are gone; only this tick's shot is left at the front
        sim.phase = GamePhase::Playing;
        sim.last_shot_ms = None;
        let input = TickInput {
            fire: true,
            now_ms: 1_000_000,
            ..Default::default()
        };
        tick(&mut sim, &input);
        assert!(matches!(sim.events()[0], GameEvent::ShotFired { .. }));
    }

    #[test]
    fn test_determinism() {
        let script: Vec<TickInput> = (0..600u64)
            .map(|i| TickInput {
                rotate_left: i % 7 < 3,
                thrust: i % 11 < 4,
                fire: true,
                now_ms: i * 1000 / 60,
                ..Default::default()
            })
            .collect();

        let mut a = playing(GameConfig::default());
        let mut b = playing(GameConfig::default());
        for input in &script {
            tick(&mut a, input);
            tick(&mut b, input);
        }
        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(a.take_events(), b.take_events());
    }
}
