//! Whole-game scenarios driven through the public API

use astro_drift::render::{FrameBuilder, Renderer};
use astro_drift::sim::{Asteroid, GameEvent, tick};
use astro_drift::{GameConfig, GamePhase, InputSource, ScriptedInput, Simulation, TickInput};
use glam::Vec2;

/// Run `ticks` ticks, collecting every event along the way
fn run(sim: &mut Simulation, input: &mut ScriptedInput, ticks: usize) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..ticks {
        tick(sim, &input.poll());
        events.extend(sim.take_events());
    }
    events
}

/// Drop a motionless asteroid on the ship
fn ram_ship(sim: &mut Simulation) {
    let pos = sim.ship.body.pos;
    sim.asteroids.push(Asteroid::new(pos, Vec2::ZERO, 30.0, 0.0));
}

#[test]
fn start_play_lose_and_restart() {
    let config = GameConfig::default();
    let center = config.center();
    let mut sim = Simulation::new(config, 99);
    let mut input = ScriptedInput::new();
    let mut events = Vec::new();

    // Clicking the corner does nothing, clicking the title starts
    input.confirm_at(Vec2::new(1.0, 1.0)).confirm_at(center);
    events.extend(run(&mut sim, &mut input, 1));
    assert_eq!(sim.phase, GamePhase::Start);
    events.extend(run(&mut sim, &mut input, 1));
    assert_eq!(sim.phase, GamePhase::Playing);

    for expected_lives in [2, 1] {
        ram_ship(&mut sim);
        events.extend(run(&mut sim, &mut input, 1));
        assert_eq!(sim.lives, expected_lives);
        assert_eq!(sim.phase, GamePhase::Playing);
        assert_eq!(sim.ship.body.pos, center);
        assert_eq!(sim.ship.body.vel, Vec2::ZERO);
    }

    ram_ship(&mut sim);
    events.extend(run(&mut sim, &mut input, 1));
    assert_eq!(sim.lives, 0);
    assert_eq!(sim.phase, GamePhase::GameOver);

    // Nothing moves on the game-over screen
    let frozen = sim.snapshot();
    events.extend(run(&mut sim, &mut input, 120));
    assert_eq!(sim.snapshot(), frozen);

    // Any click restarts straight into play
    input.confirm_at(Vec2::new(3.0, 4.0));
    events.extend(run(&mut sim, &mut input, 1));
    assert_eq!(sim.phase, GamePhase::Playing);
    assert_eq!(sim.lives, 3);
    assert_eq!(sim.score, 0);
    assert!(sim.bullets.is_empty());

    let phases: Vec<_> = events
        .into_iter()
        .filter_map(|e| match e {
            GameEvent::PhaseChanged { from, to } => Some((from, to)),
            _ => None,
        })
        .collect();
    assert_eq!(
        phases,
        vec![
            (GamePhase::Start, GamePhase::Playing),
            (GamePhase::Playing, GamePhase::GameOver),
            (GamePhase::Start, GamePhase::Playing),
        ]
    );
}

#[test]
fn held_fire_respects_cooldown() {
    let config = GameConfig::default();
    let mut sim = Simulation::new(config.clone(), 5);
    let mut input = ScriptedInput::new();
    input.confirm_at(config.center()).repeat(
        TickInput {
            fire: true,
            ..Default::default()
        },
        60,
    );
    let events = run(&mut sim, &mut input, 61);

    let shots = events
        .iter()
        .filter(|e| matches!(e, GameEvent::ShotFired { .. }))
        .count();
    // Shots at 16ms, 333ms, 650ms and 966ms; a gap of exactly 300ms is not enough
    assert_eq!(shots, 4);
}

#[test]
fn long_session_keeps_invariants() {
    let config = GameConfig::default();
    let world = config.world_size();
    let mut sim = Simulation::new(config.clone(), 2024);
    let mut input = ScriptedInput::new();
    input.confirm_at(config.center()).repeat(
        TickInput {
            rotate_left: true,
            thrust: true,
            fire: true,
            ..Default::default()
        },
        3000,
    );
    let mut frame = FrameBuilder::new();

    for _ in 0..3001 {
        tick(&mut sim, &input.poll());
        frame.render(&sim);

        assert!(sim.lives <= config.initial_lives);
        assert!(sim.asteroid_spawn_timer < config.asteroid_spawn_rate);
        assert!(sim.background_offset >= 0.0 && sim.background_offset < world.x);
        for bullet in &sim.bullets {
            assert!(bullet.remaining_lifetime > 0);
            assert!(bullet.remaining_lifetime <= config.bullet_lifetime);
        }
        if sim.phase == GamePhase::GameOver {
            assert_eq!(sim.lives, 0);
            break;
        }
        let p = sim.ship.body.pos;
        assert!(p.x >= 0.0 && p.x <= world.x);
        assert!(p.y >= 0.0 && p.y <= world.y);
    }
    assert!(frame.frames() > 0);
}

#[test]
fn same_seed_same_game() {
    let play = |seed| {
        let config = GameConfig::default();
        let mut sim = Simulation::new(config.clone(), seed);
        let mut input = ScriptedInput::new();
        input.confirm_at(config.center()).repeat(
            TickInput {
                rotate_right: true,
                fire: true,
                ..Default::default()
            },
            900,
        );
        run(&mut sim, &mut input, 901);
        sim.snapshot()
    };
    assert_eq!(play(11), play(11));
}
