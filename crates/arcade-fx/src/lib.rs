pub mod core;
pub mod error;
pub mod systems;
pub mod controllers;
pub mod renderer;
pub mod assets;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use crate::core::scheduler::{FrameScheduler, FrameQueue, FrameHandle, FrameBatch};
pub use error::FxError;
pub use renderer::traits::{Surface, FillRule, ImageSize};
pub use renderer::recording::{RecordingSurface, DrawCommand, ImageRef};
pub use systems::effects::{
    ParticleSystem, Particle, ParticleConfig, Color, Rng,
    create_particle_effect, update_particles, draw_particles,
};
pub use systems::transition::{TransitionKind, draw_transition};
pub use systems::overlay::draw_flash;
pub use systems::parallax::{ParallaxBackground, ParallaxConfig, ParallaxLayer};
pub use controllers::{
    Controller, TimedEffect,
    ScreenShake, ScreenShakeConfig, create_screen_shake,
    Flash, FlashConfig, create_flash,
    SlowMotion, SlowMotionConfig, create_slow_motion,
    TransitionEffect, TransitionConfig, create_transition,
};
pub use assets::presets::EffectPresets;

// Extensions (opt-in helpers)
pub use extensions::{Easing, lerp, ease};
