//! Particles and floating labels
//!
//! Purely cosmetic: created in bursts on events, decayed every tick, and
//! purged once their life runs out.

use glam::Vec2;
use rand::Rng;

use super::state::{FloatingText, GameState, Particle};

/// Spray `count` particles outward from `pos`
pub fn spawn_burst(state: &mut GameState, pos: Vec2, color: u32, count: usize) {
    let half_spread = state.tuning.particle_spread / 2.0;
    state.particles.reserve(count);
    for _ in 0..count {
        let id = state.next_entity_id();
        let rng = &mut state.rng;
        let vel = if half_spread > 0.0 {
            Vec2::new(
                rng.random_range(-half_spread..=half_spread),
                rng.random_range(-half_spread..=half_spread),
            )
        } else {
            Vec2::ZERO
        };
        let size = 3.0 + rng.random::<f32>() * 3.0;
        state.particles.push(Particle {
            id,
            pos,
            vel,
            color,
            life: 1.0,
            size,
        });
    }
}

/// Pop a label at `pos`
pub fn add_floating_text(state: &mut GameState, pos: Vec2, text: impl Into<String>, color: u32) {
    let id = state.next_entity_id();
    state.floating_texts.push(FloatingText {
        id,
        pos,
        text: text.into(),
        color,
        life: 1.0,
    });
}

/// Advance and expire all effects by one tick
pub fn update_effects(state: &mut GameState) {
    let gravity = state.tuning.particle_gravity;
    let particle_decay = state.tuning.particle_decay;
    for particle in state.particles.iter_mut() {
        particle.pos += particle.vel;
        particle.vel.y += gravity;
        particle.life -= particle_decay;
    }
    state.particles.retain(|p| p.life > 0.0);

    let rise = state.tuning.text_rise;
    let text_decay = state.tuning.text_decay;
    for text in state.floating_texts.iter_mut() {
        text.pos.y -= rise;
        text.life -= text_decay;
    }
    state.floating_texts.retain(|t| t.life > 0.0);
}
