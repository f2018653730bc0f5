//! Pickup, combo and enemy-contact rules
//!
//! Each resolver scans one collection against the player, applies score and
//! growth, and reports what happened as `GameEvent`s.

use super::collision::{self, Contact};
use super::effects::{add_floating_text, spawn_burst};
use super::spawn;
use super::state::{Combo, GameEvent, GamePhase, GameState, Token};
use crate::consts::*;

impl Combo {
    /// Register a token pickup on tick `now` and return the new multiplier.
    /// Pickups fewer than `window` ticks apart step the multiplier up to the
    /// cap; anything slower resets it.
    pub fn register_pickup(&mut self, now: u64, window: u64, step: f64, cap: f64) -> f64 {
        let quick = self
            .last_pickup
            .is_some_and(|last| now.saturating_sub(last) < window);
        self.multiplier = if quick {
            (self.multiplier + step).min(cap)
        } else {
            1.0
        };
        self.last_pickup = Some(now);
        self.multiplier
    }
}

/// Collect every token the player touches. Each pickup spawns exactly one
/// replacement.
pub fn collect_tokens(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for i in 0..state.tokens.len() {
        if state.tokens[i].collected
            || !collision::player_touches_token(&state.player, &state.tokens[i], &state.tuning)
        {
            continue;
        }
        state.tokens[i].collected = true;
        let Token { pos, value, .. } = state.tokens[i];

        // Score with the multiplier in effect before this pickup updates it
        let points = f64::from(value) * state.tuning.token_points_per_value * state.combo.multiplier;
        state.score += points;
        state.player.size = state
            .tuning
            .clamp_size(state.player.size + f32::from(value) * state.tuning.token_growth_per_value);

        let tuning = &state.tuning;
        let window = tuning.combo_window_ticks();
        let (step, cap) = (tuning.combo_step, tuning.combo_cap);
        let combo = state.combo.register_pickup(state.time_ticks, window, step, cap);

        spawn::spawn_token(state);
        let color = TOKEN_COLORS[usize::from(value.clamp(1, 3)) - 1];
        let burst = state.tuning.token_burst;
        spawn_burst(state, pos, color, burst);
        add_floating_text(state, pos, format!("+{}", points.floor()), SCORE_TEXT_COLOR);

        events.push(GameEvent::TokenCollected {
            value,
            points,
            combo,
        });
    }
    state.tokens.retain(|t| !t.collected);
}

/// Collect power-ups the player touches
pub fn collect_power_ups(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let mut collected = Vec::new();
    state.power_ups.retain(|power_up| {
        if collision::player_touches_power_up(&state.player, power_up, &state.tuning) {
            collected.push((power_up.pos, power_up.kind));
            false
        } else {
            true
        }
    });

    for (pos, kind) in collected {
        // A fresh pickup always restarts the full window
        let until = state.time_ticks + state.tuning.invincibility_ticks();
        state.player.invincible_until = Some(until);
        let burst = state.tuning.power_up_burst;
        spawn_burst(state, pos, POWER_UP_COLOR, burst);
        add_floating_text(state, pos, "INVINCIBLE!", POWER_UP_COLOR);
        log::debug!("Invincible until tick {until}");
        events.push(GameEvent::PowerUpCollected { kind });
    }
}

/// Drop an expired invincibility window
pub fn expire_invincibility(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let now = state.time_ticks;
    let expired = matches!(state.player.invincible_until, Some(until) if until <= now);
    if expired {
        state.player.invincible_until = None;
        log::debug!("Invincibility expired at tick {now}");
        events.push(GameEvent::InvincibilityExpired);
    }
}

/// Move every enemy and resolve contacts with the player. A fatal contact
/// ends the round immediately and leaves the remaining enemies untouched.
pub fn update_enemies(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for i in 0..state.enemies.len() {
        let invincible = state.is_invincible();
        let player_pos = state.player.pos;
        let player_size = state.player.size;

        let enemy = &mut state.enemies[i];
        enemy.steer(player_pos, player_size, invincible, &state.tuning);
        enemy.advance();

        if !collision::player_touches_enemy(&state.player, &state.enemies[i]) {
            continue;
        }

        let enemy = &state.enemies[i];
        match collision::resolve_contact(player_size, enemy.size, invincible) {
            Contact::Eat => {
                let (id, pos, color) = (enemy.id, enemy.pos, enemy.color);
                state.score += state.tuning.enemy_eat_bonus;
                state.player.size = state
                    .tuning
                    .clamp_size(state.player.size + state.tuning.enemy_eat_growth);
                let burst = state.tuning.enemy_burst;
                let label = format!("+{}", state.tuning.enemy_eat_bonus.floor());
                spawn_burst(state, pos, color, burst);
                add_floating_text(state, pos, label, EAT_TEXT_COLOR);
                spawn::respawn_enemy(state, i);
                log::debug!("Enemy {} eaten, player size {:.1}", id, state.player.size);
                events.push(GameEvent::EnemyEaten { enemy_id: id });
            }
            Contact::Fatal => {
                let summary = state.end_round();
                events.push(GameEvent::GameOver(summary));
                return;
            }
        }
    }
}

/// Whether the round is still live
#[inline]
pub fn is_playing(state: &GameState) -> bool {
    state.phase == GamePhase::Playing
}
