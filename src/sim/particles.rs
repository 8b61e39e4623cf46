//! Brick-break particle bursts
//!
//! Purely visual. The tick advances them so their lifetime stays in step
//! with the simulation.

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{Color, Particle};
use crate::consts::{PARTICLE_DAMPING, PARTICLE_LIFE, PARTICLE_MAX_SPEED, PARTICLES_PER_BURST};

/// A burst of particles at `origin` with random velocities in
/// `[-PARTICLE_MAX_SPEED, PARTICLE_MAX_SPEED)` per axis.
pub fn spawn_burst(origin: Vec2, color: Color, rng: &mut dyn RandomSource) -> Vec<Particle> {
    (0..PARTICLES_PER_BURST)
        .map(|_| {
            let vx = rng.centered(PARTICLE_MAX_SPEED);
            let vy = rng.centered(PARTICLE_MAX_SPEED);
            Particle {
                pos: origin,
                vel: Vec2::new(vx, vy),
                life: PARTICLE_LIFE,
                max_life: PARTICLE_LIFE,
                color,
            }
        })
        .collect()
}

/// Move, damp and age every particle by one tick, dropping the dead ones.
pub fn advance(particles: &[Particle]) -> Vec<Particle> {
    particles
        .iter()
        .filter(|p| p.life > 1)
        .map(|p| Particle {
            pos: p.pos + p.vel,
            vel: p.vel * PARTICLE_DAMPING,
            life: p.life - 1,
            ..p.clone()
        })
        .collect()
}
