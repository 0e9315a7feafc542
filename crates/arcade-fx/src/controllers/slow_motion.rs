use serde::{Deserialize, Serialize};

use crate::extensions::easing::{lerp, Easing};
use super::{Controller, TimedEffect};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlowMotionConfig {
    /// Time scale reached at the midpoint (1 = normal speed).
    pub target_factor: f32,
    /// Milliseconds, covering both the slow-down and the recovery.
    pub duration: f64,
    pub easing: Easing,
}

impl Default for SlowMotionConfig {
    fn default() -> Self {
        Self {
            target_factor: 0.3,
            duration: 1000.0,
            easing: Easing::Linear,
        }
    }
}

/// Time scale that eases from 1 down to `target_factor` and back to 1.
#[derive(Debug, Clone, Copy)]
pub struct SlowMotion {
    pub target_factor: f32,
}

impl SlowMotion {
    /// Time scale at `progress`: 1 at both ends, `target_factor` at 0.5.
    pub fn factor_at(&self, progress: f32) -> f32 {
        if progress < 0.5 {
            lerp(1.0, self.target_factor, progress * 2.0)
        } else {
            lerp(self.target_factor, 1.0, (progress - 0.5) * 2.0)
        }
    }
}

impl TimedEffect for SlowMotion {
    type Output = f32;

    fn sample(&mut self, progress: f32) -> f32 {
        self.factor_at(progress)
    }

    fn finish(&mut self) -> f32 {
        1.0
    }

    fn reset(&mut self) -> Option<f32> {
        Some(1.0)
    }
}

/// Build an idle slow-motion effect that reports the time scale each frame.
pub fn create_slow_motion(
    config: SlowMotionConfig,
    on_factor: impl FnMut(f32) + 'static,
) -> Controller<SlowMotion> {
    Controller::new(SlowMotion { target_factor: config.target_factor }, config.duration, on_factor)
        .with_easing(config.easing)
}
