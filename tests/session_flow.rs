//! Screen-flow tests: menu -> playing -> gameover -> playing / menu.

use glam::Vec2;
use token_eater::consts::*;
use token_eater::sim::{Enemy, GameEvent, GamePhase};
use token_eater::{Game, Tuning};

/// Put a big enemy on top of the player so the next tick is fatal
fn plant_killer(game: &mut Game) {
    let state = game.state_mut();
    // No last-moment token pickups to change score or size
    state.tokens.clear();
    let id = state.next_entity_id();
    let pos = state.player.pos;
    state.enemies[0] = Enemy {
        id,
        pos,
        vel: Vec2::ZERO,
        size: 69.0,
        color: ENEMY_COLORS[2],
    };
}

fn play_until_over(game: &mut Game) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..10 {
        events.extend(game.update(SIM_DT));
        if game.phase() != GamePhase::Playing {
            break;
        }
    }
    events
}

#[test]
fn test_initial_phase_is_menu() {
    let (game, _pointer) = Game::new(1, Tuning::default()).unwrap();
    assert_eq!(game.phase(), GamePhase::Menu);
    let view = game.view();
    assert!(view.tokens.is_empty());
    assert!(view.enemies.is_empty());
}

#[test]
fn test_restart_resets_round_but_keeps_high_score() {
    let (mut game, pointer) = Game::new(77, Tuning::default()).unwrap();
    game.start();
    pointer.set(game.state().player.pos);

    // Bank a score, then die
    game.state_mut().score = 4321.5;
    game.state_mut().player.size = 64.0;
    plant_killer(&mut game);
    let events = play_until_over(&mut game);

    assert_eq!(game.phase(), GamePhase::GameOver);
    let summary = events
        .iter()
        .find_map(|e| match e {
            GameEvent::GameOver(summary) => Some(summary.clone()),
            _ => None,
        })
        .expect("game over event");
    assert!(summary.new_high_score);
    assert_eq!(game.state().high_score.best(), 4321.5);

    // Ticking in GameOver changes nothing
    let ticks = game.state().time_ticks;
    assert!(game.update(1.0).is_empty());
    assert_eq!(game.state().time_ticks, ticks);

    // Replay
    game.start();
    let state = game.state();
    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(state.score, 0.0);
    assert_eq!(state.player.size, 30.0);
    assert_eq!(state.player.pos, Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0));
    assert_eq!(state.tokens.len(), 40);
    assert_eq!(state.enemies.len(), 5);
    assert!(state.power_ups.is_empty());
    assert!(state.particles.is_empty());
    assert!(state.floating_texts.is_empty());
    assert_eq!(state.combo.multiplier, 1.0);
    assert_eq!(state.time_ticks, 0);
    assert_eq!(state.high_score.best(), 4321.5);
}

#[test]
fn test_lower_second_round_keeps_first_high_score() {
    let (mut game, pointer) = Game::new(78, Tuning::default()).unwrap();
    game.start();
    pointer.set(game.state().player.pos);
    game.state_mut().score = 2000.0;
    plant_killer(&mut game);
    play_until_over(&mut game);

    game.start();
    pointer.set(game.state().player.pos);
    game.state_mut().score = 100.0;
    plant_killer(&mut game);
    let events = play_until_over(&mut game);

    assert_eq!(game.phase(), GamePhase::GameOver);
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::GameOver(summary) if !summary.new_high_score
    )));
    assert_eq!(game.state().high_score.best(), 2000.0);
}

#[test]
fn test_return_to_menu_from_game_over() {
    let (mut game, pointer) = Game::new(79, Tuning::default()).unwrap();
    game.start();
    pointer.set(game.state().player.pos);
    game.state_mut().score = 50.0;
    plant_killer(&mut game);
    play_until_over(&mut game);

    game.return_to_menu();
    assert_eq!(game.phase(), GamePhase::Menu);
    assert_eq!(game.state().high_score.best(), 50.0);
    assert!(game.update(SIM_DT).is_empty());

    game.start();
    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(game.view().hud.high_score, 50);
}

#[test]
fn test_snapshot_after_game_over_carries_summary() {
    let (mut game, pointer) = Game::new(80, Tuning::default()).unwrap();
    game.start();
    pointer.set(game.state().player.pos);
    plant_killer(&mut game);
    play_until_over(&mut game);

    let view = game.view();
    assert_eq!(view.phase, GamePhase::GameOver);
    let summary = view.last_round.expect("summary");
    assert_eq!(summary.seconds_alive, 0);
    assert_eq!(summary.final_size, view.player.size);
}
