//! Particle effects.
//!
//! This module provides the `ParticleSystem` facade that owns a live particle
//! list and its RNG, plus the free functions it is built from, which can be
//! used directly when the caller wants to hold the list itself.

mod rng;
mod color;
mod particle;

// Re-export public types
pub use rng::Rng;
pub use color::Color;
pub use particle::{
    Particle, ParticleConfig,
    create_particle_effect, update_particles, draw_particles,
};

use crate::error::FxError;
use crate::renderer::traits::Surface;

/// Live particles plus the RNG used to spawn them.
/// Generic: games spawn bursts and tick once per frame.
pub struct ParticleSystem {
    particles: Vec<Particle>,
    rng: Rng,
}

impl ParticleSystem {
    /// Create a new ParticleSystem with the given RNG seed.
    pub fn new(seed: u64) -> Self {
        ParticleSystem {
            particles: Vec::new(),
            rng: Rng::new(seed.wrapping_add(7919)),
        }
    }

    /// Create a ParticleSystem with room for `capacity` particles.
    pub fn with_capacity(seed: u64, capacity: usize) -> Self {
        ParticleSystem {
            particles: Vec::with_capacity(capacity),
            rng: Rng::new(seed.wrapping_add(7919)),
        }
    }

    /// Spawn one burst described by `config`, born at `now`.
    pub fn spawn(&mut self, config: &ParticleConfig, now: f64) {
        let burst = create_particle_effect(config, now, &mut self.rng);
        self.particles.extend(burst);
    }

    /// Advance all particles one frame, dropping expired ones.
    pub fn tick(&mut self, now: f64) {
        let particles = std::mem::take(&mut self.particles);
        self.particles = update_particles(particles, now);
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), FxError> {
        draw_particles(surface, &self.particles)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::RecordingSurface;

    #[test]
    fn spawn_accumulates_bursts() {
        let mut system = ParticleSystem::new(42);
        let config = ParticleConfig::default().with_count(10);
        system.spawn(&config, 0.0);
        system.spawn(&config.clone().with_count(4), 0.0);
        assert_eq!(system.len(), 14);
    }

    #[test]
    fn tick_expires_particles_by_their_own_lifetime() {
        let mut system = ParticleSystem::new(42);
        system.spawn(&ParticleConfig::default().with_count(3).with_lifetime(100.0), 0.0);
        system.spawn(&ParticleConfig::default().with_count(2).with_lifetime(500.0), 0.0);
        system.tick(200.0);
        assert_eq!(system.len(), 2);
        system.tick(500.0);
        assert!(system.is_empty());
    }

    #[test]
    fn same_seed_same_burst() {
        let config = ParticleConfig::default().with_count(8);
        let mut a = ParticleSystem::new(9);
        let mut b = ParticleSystem::new(9);
        a.spawn(&config, 0.0);
        b.spawn(&config, 0.0);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn draw_and_clear() {
        let mut system = ParticleSystem::with_capacity(1, 64);
        system.spawn(&ParticleConfig::default().with_count(2), 0.0);
        let mut surface = RecordingSurface::new();
        system.draw(&mut surface).unwrap();
        assert!(!surface.commands().is_empty());
        system.clear();
        assert!(system.is_empty());
    }
}
