use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::extensions::easing::Easing;
use crate::systems::effects::Rng;
use super::{Controller, TimedEffect};

/// Screen shake parameters. Missing JSON fields take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenShakeConfig {
    /// Peak offset in pixels at the start of the shake.
    pub intensity: f32,
    /// Milliseconds.
    pub duration: f64,
    pub easing: Easing,
    pub seed: u64,
}

impl Default for ScreenShakeConfig {
    fn default() -> Self {
        Self {
            intensity: 10.0,
            duration: 500.0,
            easing: Easing::Linear,
            seed: 0x5eed,
        }
    }
}

/// Random camera offset whose amplitude decays linearly to zero.
#[derive(Debug, Clone)]
pub struct ScreenShake {
    pub intensity: f32,
    rng: Rng,
}

impl ScreenShake {
    pub fn new(intensity: f32, seed: u64) -> Self {
        Self { intensity, rng: Rng::new(seed) }
    }
}

impl TimedEffect for ScreenShake {
    type Output = Vec2;

    fn sample(&mut self, progress: f32) -> Vec2 {
        let amplitude = self.intensity * (1.0 - progress);
        Vec2::new(
            self.rng.signed_unit() * amplitude,
            self.rng.signed_unit() * amplitude,
        )
    }

    fn finish(&mut self) -> Vec2 {
        Vec2::ZERO
    }

    fn reset(&mut self) -> Option<Vec2> {
        Some(Vec2::ZERO)
    }
}

/// Build an idle screen shake that reports each frame's offset to `on_offset`.
pub fn create_screen_shake(
    config: ScreenShakeConfig,
    on_offset: impl FnMut(Vec2) + 'static,
) -> Controller<ScreenShake> {
    Controller::new(ScreenShake::new(config.intensity, config.seed), config.duration, on_offset)
        .with_easing(config.easing)
}
