//! Proximity collision detection
//!
//! Everything in the arena is a circle, so a contact is just a center
//! distance compared against a reach.

use glam::Vec2;

use super::state::{Enemy, Player, PowerUp, Token};
use crate::tuning::Tuning;

/// True when two centers are strictly closer than `reach`
#[inline]
pub fn within(a: Vec2, b: Vec2, reach: f32) -> bool {
    a.distance_squared(b) < reach * reach
}

/// Player touches a token
#[inline]
pub fn player_touches_token(player: &Player, token: &Token, tuning: &Tuning) -> bool {
    within(player.pos, token.pos, player.radius() + tuning.token_pickup_radius)
}

/// Player touches a power-up
#[inline]
pub fn player_touches_power_up(player: &Player, power_up: &PowerUp, tuning: &Tuning) -> bool {
    within(player.pos, power_up.pos, player.radius() + tuning.power_up_pickup_radius)
}

/// Player and enemy bodies overlap
#[inline]
pub fn player_touches_enemy(player: &Player, enemy: &Enemy) -> bool {
    within(player.pos, enemy.pos, player.radius() + enemy.radius())
}

/// Who wins a player/enemy contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Player eats the enemy
    Eat,
    /// Enemy ends the round
    Fatal,
}

/// Resolve a contact: invincibility or strictly larger size wins
#[inline]
pub fn resolve_contact(player_size: f32, enemy_size: f32, invincible: bool) -> Contact {
    if invincible || player_size > enemy_size {
        Contact::Eat
    } else {
        Contact::Fatal
    }
}
