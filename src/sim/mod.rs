//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod effects;
pub mod movement;
pub mod rules;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Contact, resolve_contact};
pub use state::{
    Combo, Enemy, FloatingText, GameEvent, GamePhase, GameState, Particle, Player, PowerUp,
    PowerUpKind, Token,
};
pub use tick::{TickInput, tick};
