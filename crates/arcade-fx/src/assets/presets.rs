use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use crate::controllers::{FlashConfig, ScreenShakeConfig, SlowMotionConfig, TransitionConfig};
use crate::error::FxError;
use crate::systems::effects::{Color, ParticleConfig};
use crate::systems::transition::TransitionKind;

/// Named effect presets for a game.
/// Loaded from a JSON file at runtime, or taken from [`EffectPresets::builtin`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectPresets {
    #[serde(default)]
    pub particles: HashMap<String, ParticleConfig>,
    #[serde(default)]
    pub shakes: HashMap<String, ScreenShakeConfig>,
    #[serde(default)]
    pub flashes: HashMap<String, FlashConfig>,
    #[serde(default)]
    pub slow_motion: HashMap<String, SlowMotionConfig>,
    #[serde(default)]
    pub transitions: HashMap<String, TransitionConfig>,
}

impl EffectPresets {
    /// Parse presets from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, FxError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The presets every game starts with.
    pub fn builtin() -> Self {
        let mut presets = Self::default();

        presets.particles.insert("explosion".into(), ParticleConfig::default()
            .with_count(40)
            .with_colors(vec!["#ff4500".into(), "#ffa500".into(), "#ffd700".into()])
            .with_size_range(2.0, 7.0)
            .with_speed_range(2.0, 8.0)
            .with_gravity(0.15)
            .with_lifetime(900.0));
        presets.particles.insert("sparkle".into(), ParticleConfig::default()
            .with_count(15)
            .with_colors(vec![Color::white(), "#fffacd".into(), "#87cefa".into()])
            .with_size_range(1.0, 3.0)
            .with_speed_range(0.5, 2.0)
            .with_gravity(0.0)
            .with_lifetime(600.0));
        presets.particles.insert("confetti".into(), ParticleConfig::default()
            .with_count(60)
            .with_colors(vec!["#ff6b6b".into(), "#4ecdc4".into(), "#ffe66d".into(), "#a29bfe".into()])
            .with_size_range(3.0, 5.0)
            .with_speed_range(3.0, 9.0)
            .with_gravity(0.25)
            .with_lifetime(2000.0)
            .with_fade_out(false));
        presets.particles.insert("smoke".into(), ParticleConfig::default()
            .with_count(12)
            .with_colors(vec![Color::rgba(120, 120, 120, 0.6), Color::rgba(80, 80, 80, 0.5)])
            .with_size_range(6.0, 12.0)
            .with_speed_range(0.2, 1.0)
            .with_gravity(-0.02)
            .with_lifetime(1500.0));

        presets.shakes.insert("hit".into(), ScreenShakeConfig { intensity: 6.0, duration: 250.0, ..Default::default() });
        presets.shakes.insert("quake".into(), ScreenShakeConfig { intensity: 18.0, duration: 900.0, ..Default::default() });
        presets.flashes.insert("damage".into(), FlashConfig { color: "#ff0000".into(), duration: 150.0, ..Default::default() });
        presets.flashes.insert("pickup".into(), FlashConfig::default());
        presets.slow_motion.insert("bullet_time".into(), SlowMotionConfig::default());
        presets.transitions.insert("scene".into(), TransitionConfig { kind: TransitionKind::Circle, duration: 600.0, ..Default::default() });
        presets.transitions.insert("fade".into(), TransitionConfig::default());

        presets
    }

    /// Overlay `other` on top of `self`; entries in `other` win on name clashes.
    pub fn merge(&mut self, other: EffectPresets) {
        self.particles.extend(other.particles);
        self.shakes.extend(other.shakes);
        self.flashes.extend(other.flashes);
        self.slow_motion.extend(other.slow_motion);
        self.transitions.extend(other.transitions);
    }

    pub fn particle(&self, name: &str) -> Result<&ParticleConfig, FxError> {
        self.particles.get(name).ok_or_else(|| FxError::UnknownPreset(name.to_string()))
    }

    pub fn shake(&self, name: &str) -> Result<&ScreenShakeConfig, FxError> {
        self.shakes.get(name).ok_or_else(|| FxError::UnknownPreset(name.to_string()))
    }

    pub fn flash(&self, name: &str) -> Result<&FlashConfig, FxError> {
        self.flashes.get(name).ok_or_else(|| FxError::UnknownPreset(name.to_string()))
    }

    pub fn slow_motion(&self, name: &str) -> Result<&SlowMotionConfig, FxError> {
        self.slow_motion.get(name).ok_or_else(|| FxError::UnknownPreset(name.to_string()))
    }

    pub fn transition(&self, name: &str) -> Result<&TransitionConfig, FxError> {
        self.transitions.get(name).ok_or_else(|| FxError::UnknownPreset(name.to_string()))
    }
}
