//! Astro Drift entry point
//!
//! Runs a bounded headless session: a scripted pilot plays until the game
//! ends or the tick budget runs out, frames are built every tick, and the
//! final state is printed as JSON.

use std::time::{SystemTime, UNIX_EPOCH};

use astro_drift::render::{FrameBuilder, Renderer};
use astro_drift::sim::{GameEvent, tick};
use astro_drift::{GameConfig, GamePhase, InputSource, ScriptedInput, Simulation, TickInput};

/// Env var naming an optional JSON config file
const CONFIG_ENV: &str = "ASTRO_DRIFT_CONFIG";
/// Ten minutes at 60 ticks per second
const MAX_TICKS: u64 = 36_000;

fn load_config() -> GameConfig {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => GameConfig::load_or_default(path),
        None => GameConfig::default(),
    }
}

/// Pilot that sweeps the guns around while drifting forward
fn demo_script(config: &GameConfig) -> ScriptedInput {
    let mut script = ScriptedInput::new();
    script.confirm_at(config.center());

    let patterns = [
        TickInput {
            rotate_left: true,
            fire: true,
            ..Default::default()
        },
        TickInput {
            thrust: true,
            fire: true,
            ..Default::default()
        },
        TickInput {
            rotate_right: true,
            fire: true,
            ..Default::default()
        },
        TickInput {
            fire: true,
            ..Default::default()
        },
    ];
    for _ in 0..MAX_TICKS / 240 {
        for input in &patterns {
            script.repeat(input.clone(), 60);
        }
    }
    script
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::ShipDestroyed { lives_left, .. } => {
            log::info!("Ship lost, {} lives left", lives_left)
        }
        GameEvent::PhaseChanged { from, to } => log::info!("{:?} -> {:?}", from, to),
        other => log::debug!("{:?}", other),
    }
}

fn main() {
    env_logger::init();
    log::info!("Astro Drift (headless) starting...");

    let config = load_config();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    log::info!("Game initialized with seed: {}", seed);

    let mut input = demo_script(&config);
    let mut sim = match Simulation::try_new(config, seed) {
        Ok(sim) => sim,
        Err(e) => {
            log::error!("{e}, using default config");
            Simulation::new(GameConfig::default(), seed)
        }
    };
    let mut renderer = FrameBuilder::new();
    let mut ticks = 0u64;

    while ticks < MAX_TICKS {
        tick(&mut sim, &input.poll());
        renderer.render(&sim);
        ticks += 1;

        for event in sim.take_events() {
            log_event(&event);
        }
        if sim.phase == GamePhase::GameOver {
            break;
        }
    }

    log::info!(
        "Session over after {} ticks: score {}, {} vertices in last frame",
        ticks,
        sim.score,
        renderer.vertices().len()
    );

    match serde_json::to_string_pretty(&sim.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}
