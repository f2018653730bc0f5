//! Entity spawning
//!
//! All randomness is drawn from the state's seeded RNG.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, GameState, PowerUp, PowerUpKind, Token};
use crate::consts::*;

/// Uniform random point on the canvas
pub fn random_position(rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        rng.random_range(0.0..CANVAS_WIDTH),
        rng.random_range(0.0..CANVAS_HEIGHT),
    )
}

/// Enemy diameter drawn from the tuning's size range; a collapsed range
/// yields its lower bound
fn random_enemy_size(rng: &mut impl Rng, min_size: f32, max_size: f32) -> f32 {
    if max_size > min_size {
        rng.random_range(min_size..max_size)
    } else {
        min_size
    }
}

/// Add a token with a random value in 1..=3 at a random spot
pub fn spawn_token(state: &mut GameState) -> u32 {
    let id = state.next_entity_id();
    let pos = random_position(&mut state.rng);
    let value = state.rng.random_range(1..=3u8);
    state.tokens.push(Token {
        id,
        pos,
        value,
        collected: false,
    });
    id
}

/// Add an enemy with random size, drift and color
pub fn spawn_enemy(state: &mut GameState) -> u32 {
    let id = state.next_entity_id();
    let half_spread = state.tuning.enemy_initial_speed_spread / 2.0;
    let (min_size, max_size) = (state.tuning.enemy_min_size, state.tuning.enemy_max_size);

    let rng = &mut state.rng;
    let pos = random_position(rng);
    let size = random_enemy_size(rng, min_size, max_size);
    let vel = if half_spread > 0.0 {
        Vec2::new(
            rng.random_range(-half_spread..half_spread),
            rng.random_range(-half_spread..half_spread),
        )
    } else {
        Vec2::ZERO
    };
    let color = ENEMY_COLORS[rng.random_range(0..ENEMY_COLORS.len())];

    state.enemies.push(Enemy {
        id,
        pos,
        vel,
        size,
        color,
    });
    id
}

/// Re-randomize an eaten enemy in place so the roster never shrinks
pub fn respawn_enemy(state: &mut GameState, index: usize) {
    let (min_size, max_size) = (state.tuning.enemy_min_size, state.tuning.enemy_max_size);
    let pos = random_position(&mut state.rng);
    let size = random_enemy_size(&mut state.rng, min_size, max_size);
    if let Some(enemy) = state.enemies.get_mut(index) {
        enemy.pos = pos;
        enemy.size = size;
    }
}

/// Roll the per-tick power-up chance; spawn one on success
pub fn maybe_spawn_power_up(state: &mut GameState) -> Option<u32> {
    let chance = state.tuning.power_up_chance_per_tick;
    if !state.rng.random_bool(chance) {
        return None;
    }
    let id = state.next_entity_id();
    let pos = random_position(&mut state.rng);
    state.power_ups.push(PowerUp {
        id,
        pos,
        kind: PowerUpKind::Invincible,
    });
    log::debug!("Power-up {} spawned at ({:.0}, {:.0})", id, pos.x, pos.y);
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_tokens_in_bounds_with_valid_value() {
        let mut state = GameState::new(11);
        for _ in 0..500 {
            spawn_token(&mut state);
        }
        for token in &state.tokens {
            assert!((1..=3).contains(&token.value));
            assert!(token.pos.x >= 0.0 && token.pos.x < CANVAS_WIDTH);
            assert!(token.pos.y >= 0.0 && token.pos.y < CANVAS_HEIGHT);
            assert!(!token.collected);
        }
    }

    #[test]
    fn test_enemy_attributes_in_range() {
        let mut state = GameState::new(12);
        for _ in 0..200 {
            spawn_enemy(&mut state);
        }
        for enemy in &state.enemies {
            assert!(enemy.size >= 40.0 && enemy.size < 70.0);
            assert!(enemy.vel.x.abs() <= 1.5 && enemy.vel.y.abs() <= 1.5);
            assert!(ENEMY_COLORS.contains(&enemy.color));
        }
    }

    #[test]
    fn test_respawn_keeps_identity() {
        let mut state = GameState::new(13);
        let id = spawn_enemy(&mut state);
        state.enemies[0].size = 10.0;
        respawn_enemy(&mut state, 0);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].id, id);
        assert!(state.enemies[0].size >= 40.0 && state.enemies[0].size < 70.0);
    }

    #[test]
    fn test_collapsed_size_range_spawns_fixed_size() {
        let mut state = GameState::with_tuning(
            14,
            Tuning {
                enemy_min_size: 55.0,
                enemy_max_size: 55.0,
                ..Tuning::default()
            },
        );
        spawn_enemy(&mut state);
        respawn_enemy(&mut state, 0);
        assert_eq!(state.enemies[0].size, 55.0);
    }

    #[test]
    fn test_power_up_chance_extremes() {
        let mut never = GameState::with_tuning(
            1,
            Tuning {
                power_up_chance_per_tick: 0.0,
                ..Tuning::default()
            },
        );
        for _ in 0..1000 {
            assert!(maybe_spawn_power_up(&mut never).is_none());
        }

        let mut always = GameState::with_tuning(
            1,
            Tuning {
                power_up_chance_per_tick: 1.0,
                ..Tuning::default()
            },
        );
        assert!(maybe_spawn_power_up(&mut always).is_some());
        assert_eq!(always.power_ups[0].kind, PowerUpKind::Invincible);
    }
}
