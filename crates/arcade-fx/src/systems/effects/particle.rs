//! Particle bursts: creation, per-frame integration, drawing.
//!
//! Time is in milliseconds on the host's clock (e.g. `performance.now()`).
//! Motion is per frame, not per millisecond: velocity is added once per
//! `update_particles` call.

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::FxError;
use crate::renderer::traits::{FillRule, Surface};
use super::color::Color;
use super::rng::Rng;

/// A single particle with physics and rendering state.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Circle radius in pixels.
    pub size: f32,
    pub color: Color,
    /// Added to `velocity.y` every update.
    pub gravity: f32,
    /// Lifetime in milliseconds.
    pub lifetime: f64,
    /// Creation timestamp in milliseconds.
    pub birth: f64,
    pub fade_out: bool,
    /// Derived opacity in [0, 1].
    pub alpha: f32,
}

impl Particle {
    /// Age in milliseconds at `now`.
    pub fn age(&self, now: f64) -> f64 {
        now - self.birth
    }

    pub fn is_expired(&self, now: f64) -> bool {
        self.age(now) >= self.lifetime
    }

    /// Advance one frame. Returns false when expired.
    pub fn tick(&mut self, now: f64) -> bool {
        self.position += self.velocity;
        self.velocity.y += self.gravity;

        let age = self.age(now);
        if age >= self.lifetime {
            return false;
        }
        if self.fade_out {
            self.alpha = (1.0 - age / self.lifetime).clamp(0.0, 1.0) as f32;
        }
        true
    }
}

/// Parameters for one particle burst. Missing JSON fields take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub x: f32,
    pub y: f32,
    pub count: usize,
    /// Palette; each particle picks one uniformly.
    pub colors: Vec<Color>,
    /// Radius range in pixels, `[min, max]`.
    pub size_range: [f32; 2],
    /// Initial speed range in pixels per frame, `[min, max]`.
    pub speed_range: [f32; 2],
    pub gravity: f32,
    /// Milliseconds.
    pub lifetime: f64,
    pub fade_out: bool,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            count: 20,
            colors: vec![Color::white()],
            size_range: [2.0, 6.0],
            speed_range: [1.0, 5.0],
            gravity: 0.1,
            lifetime: 1000.0,
            fade_out: true,
        }
    }
}

impl ParticleConfig {
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_size_range(mut self, min: f32, max: f32) -> Self {
        self.size_range = [min, max];
        self
    }

    pub fn with_speed_range(mut self, min: f32, max: f32) -> Self {
        self.speed_range = [min, max];
        self
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_lifetime(mut self, lifetime: f64) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn with_fade_out(mut self, fade_out: bool) -> Self {
        self.fade_out = fade_out;
        self
    }
}

/// Create `config.count` particles at the config origin, born at `now`.
pub fn create_particle_effect(config: &ParticleConfig, now: f64, rng: &mut Rng) -> Vec<Particle> {
    let origin = Vec2::new(config.x, config.y);
    let fallback = Color::white();
    let mut particles = Vec::with_capacity(config.count);

    for _ in 0..config.count {
        let angle = rng.next_f32() * TAU;
        let speed = rng.range(config.speed_range[0], config.speed_range[1]);
        let size = rng.range(config.size_range[0], config.size_range[1]).max(0.0);
        let color = rng.pick(&config.colors).unwrap_or(&fallback).clone();

        particles.push(Particle {
            position: origin,
            velocity: Vec2::new(angle.cos() * speed, angle.sin() * speed),
            size,
            color,
            gravity: config.gravity,
            lifetime: config.lifetime,
            birth: now,
            fade_out: config.fade_out,
            alpha: 1.0,
        });
    }

    particles
}

/// Advance every particle one frame and drop the expired ones.
pub fn update_particles(mut particles: Vec<Particle>, now: f64) -> Vec<Particle> {
    particles.retain_mut(|p| p.tick(now));
    particles
}

/// Fill each particle as a circle at its own alpha. Global alpha is reset to 1
/// afterwards, even when the surface reports an error.
pub fn draw_particles<S: Surface>(surface: &mut S, particles: &[Particle]) -> Result<(), FxError> {
    let result: Result<(), FxError> = particles.iter().try_for_each(|p| {
        surface.set_global_alpha(p.alpha);
        surface.set_fill_style(p.color.as_str());
        surface.begin_path();
        surface.arc(p.position.x, p.position.y, p.size, 0.0, TAU)?;
        surface.fill(FillRule::NonZero);
        Ok(())
    });
    surface.set_global_alpha(1.0);
    result
}
