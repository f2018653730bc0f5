//! Token Eater entry point
//!
//! The browser build is driven from JavaScript through `token_eater::web`.
//! Natively this runs a headless autopilot round: the pointer chases the
//! nearest token and steers clear of bigger enemies, and the result is
//! logged.
//!
//! Usage: `token-eater [tuning.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use token_eater::consts::SIM_DT;
    use token_eater::sim::{GameEvent, GamePhase};
    use token_eater::{Game, Tuning};

    env_logger::init();
    log::info!("Token Eater (native) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => load_tuning(&path),
        None => Tuning::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Seed: {}", seed);

    let (mut game, pointer) = match Game::new(seed, tuning) {
        Ok(pair) => pair,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            return;
        }
    };
    game.start();

    // Ten minutes of simulated play at most
    let max_ticks = (600.0 / SIM_DT) as u64;
    let mut eaten = 0;
    let mut power_ups = 0;
    for _ in 0..max_ticks {
        pointer.set(autopilot::target(game.state()));
        for event in game.update(SIM_DT) {
            match event {
                GameEvent::EnemyEaten { .. } => eaten += 1,
                GameEvent::PowerUpCollected { .. } => power_ups += 1,
                _ => {}
            }
        }
        if game.phase() != GamePhase::Playing {
            break;
        }
    }

    let view = game.view();
    log::info!(
        "Finished: score {} (best {}), survived {}, size {:.0}, {} enemies eaten, {} power-ups",
        view.hud.score,
        view.hud.high_score,
        view.hud.clock,
        view.player.size,
        eaten,
        power_ups
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> token_eater::Tuning {
    let loaded = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|json| token_eater::Tuning::from_json(&json).map_err(|e| e.to_string()));
    match loaded {
        Ok(tuning) => {
            log::info!("Loaded tuning from {}", path);
            tuning
        }
        Err(e) => {
            log::warn!("Could not load tuning from {}: {} (using defaults)", path, e);
            token_eater::Tuning::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use glam::Vec2;
    use token_eater::sim::GameState;

    /// Pick a pointer target: run from the closest threatening enemy if one
    /// is near, otherwise head for the nearest token
    pub fn target(state: &GameState) -> Vec2 {
        let player = &state.player;
        let invincible = state.is_invincible();

        let threat = state
            .enemies
            .iter()
            .filter(|e| !invincible && e.size >= player.size)
            .map(|e| (e, e.pos.distance(player.pos)))
            .filter(|(e, d)| *d < e.size + player.size + 60.0)
            .min_by(|a, b| a.1.total_cmp(&b.1));
        if let Some((enemy, _)) = threat {
            let away = (player.pos - enemy.pos).normalize_or_zero();
            return player.pos + away * 100.0;
        }

        let prey = state
            .power_ups
            .iter()
            .map(|p| p.pos)
            .chain(
                state
                    .enemies
                    .iter()
                    .filter(|e| invincible || e.size < player.size)
                    .map(|e| e.pos),
            )
            .chain(state.tokens.iter().map(|t| t.pos));
        prey.min_by(|a, b| a.distance(player.pos).total_cmp(&b.distance(player.pos)))
            .unwrap_or(player.pos)
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::wasm_start, this is just to satisfy the compiler
}
