//! Fixed timestep simulation tick
//!
//! Core game loop that advances a round by one frame.

use glam::Vec2;

use super::effects::update_effects;
use super::rules::{
    collect_power_ups, collect_tokens, expire_invincibility, is_playing, update_enemies,
};
use super::spawn::maybe_spawn_power_up;
use super::state::{GameEvent, GameState};

/// Input for a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    /// Where the player blob is heading, in canvas space
    pub pointer: Vec2,
}

impl TickInput {
    pub fn toward(pointer: Vec2) -> Self {
        Self { pointer }
    }
}

/// Advance the game state by one fixed timestep (`SIM_DT`) and return what
/// happened. Does nothing outside the `Playing` phase.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !is_playing(state) {
        return events;
    }

    state.time_ticks += 1;
    expire_invincibility(state, &mut events);

    let tuning = &state.tuning;
    state.player.seek(input.pointer, tuning);

    collect_tokens(state, &mut events);
    collect_power_ups(state, &mut events);

    update_enemies(state, &mut events);
    if !is_playing(state) {
        // Round ended this tick; freeze the field as it was at impact
        return events;
    }

    maybe_spawn_power_up(state);
    update_effects(state);

    events
}
